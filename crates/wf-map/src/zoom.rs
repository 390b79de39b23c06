//! Map magnification.

use crate::geometry::Transform;
use crate::scene::VIEWPORT_CENTER;

/// Zoom level in tenths, so repeated steps land exactly on the grid.
const MIN_TENTHS: u8 = 5;
const MAX_TENTHS: u8 = 30;
const STEP_TENTHS: u8 = 2;
const DEFAULT_TENTHS: u8 = 10;

/// Map zoom, always within `[0.5, 3.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zoom {
    tenths: u8,
}

impl Default for Zoom {
    fn default() -> Self {
        Self {
            tenths: DEFAULT_TENTHS,
        }
    }
}

impl Zoom {
    pub const MIN: Zoom = Zoom { tenths: MIN_TENTHS };
    pub const MAX: Zoom = Zoom { tenths: MAX_TENTHS };

    /// Nearest zoom for an arbitrary factor, clamped to the valid range.
    pub fn from_factor(factor: f64) -> Self {
        let tenths = if factor.is_finite() {
            (factor * 10.0)
                .round()
                .clamp(f64::from(MIN_TENTHS), f64::from(MAX_TENTHS))
        } else {
            f64::from(DEFAULT_TENTHS)
        };
        // Within [5, 30] after the clamp.
        Self {
            tenths: tenths as u8,
        }
    }

    pub fn zoom_in(self) -> Self {
        Self {
            tenths: (self.tenths + STEP_TENTHS).min(MAX_TENTHS),
        }
    }

    pub fn zoom_out(self) -> Self {
        Self {
            tenths: self.tenths.saturating_sub(STEP_TENTHS).max(MIN_TENTHS),
        }
    }

    pub fn factor(self) -> f64 {
        f64::from(self.tenths) / 10.0
    }

    pub fn can_zoom_in(self) -> bool {
        self.tenths < MAX_TENTHS
    }

    pub fn can_zoom_out(self) -> bool {
        self.tenths > MIN_TENTHS
    }

    /// "Magnification: 120%" style percentage.
    pub fn percent(self) -> u32 {
        u32::from(self.tenths) * 10
    }

    /// Scale about the viewport center.
    pub fn transform(self) -> Transform {
        Transform {
            center: VIEWPORT_CENTER,
            scale: self.factor(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn fifteen_zoom_ins_clamp_at_three() {
        let mut z = Zoom::default();
        for _ in 0..15 {
            z = z.zoom_in();
            assert!((0.5..=3.0).contains(&z.factor()));
        }
        assert_eq!(z.factor(), 3.0);
        assert_eq!(z, Zoom::MAX);
        assert!(!z.can_zoom_in());
    }

    #[test]
    fn ten_zoom_outs_clamp_at_half() {
        let mut z = Zoom::default();
        for _ in 0..10 {
            z = z.zoom_out();
            assert!((0.5..=3.0).contains(&z.factor()));
        }
        assert_eq!(z.factor(), 0.5);
        assert_eq!(z, Zoom::MIN);
        assert!(!z.can_zoom_out());
    }

    #[test]
    fn step_is_two_tenths() {
        let z = Zoom::default().zoom_in();
        assert_eq!(z.factor(), 1.2);
        assert_eq!(z.percent(), 120);
        assert_eq!(z.zoom_out(), Zoom::default());
    }

    #[test]
    fn zoom_out_from_six_tenths_stops_at_half() {
        let z = Zoom::from_factor(0.6).zoom_out();
        assert_eq!(z, Zoom::MIN);
    }

    #[test]
    fn from_factor_clamps_and_rounds() {
        assert_eq!(Zoom::from_factor(10.0), Zoom::MAX);
        assert_eq!(Zoom::from_factor(0.1), Zoom::MIN);
        assert_eq!(Zoom::from_factor(1.44).factor(), 1.4);
        assert_eq!(Zoom::from_factor(f64::NAN), Zoom::default());
    }

    #[test]
    fn transform_centers_on_viewport() {
        let t = Zoom::default().zoom_in().transform();
        assert_eq!(t.center, Point::new(400.0, 300.0));
        assert_eq!(t.scale, 1.2);
    }
}
