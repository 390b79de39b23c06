//! Map colors.

use std::fmt;

use serde::{Serialize, Serializer};
use wf_models::{StopStatus, TrafficIntensity};

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#rrggbb`
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// Serialized as its `#rrggbb` string.
impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub const ROSE: Rgb = Rgb(0xf4, 0x3f, 0x5e);
pub const AMBER: Rgb = Rgb(0xf5, 0x9e, 0x0b);
pub const EMERALD: Rgb = Rgb(0x10, 0xb9, 0x81);
/// Roads with no traffic information.
pub const DIM: Rgb = Rgb(0x06, 0x4e, 0x3b);
pub const LIME: Rgb = Rgb(0x84, 0xcc, 0x16);
pub const FOREST: Rgb = Rgb(0x06, 0x5f, 0x46);
pub const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);
/// Map background.
pub const NIGHT: Rgb = Rgb(0x02, 0x2c, 0x22);

/// Road color for a traffic intensity; `None` (no segment) gets [`DIM`].
pub fn intensity_color(intensity: Option<TrafficIntensity>) -> Rgb {
    match intensity {
        Some(TrafficIntensity::Heavy) => ROSE,
        Some(TrafficIntensity::Moderate) => AMBER,
        Some(TrafficIntensity::Low) => EMERALD,
        None => DIM,
    }
}

/// Marker fill for a stop.
pub fn stop_fill(status: StopStatus) -> Rgb {
    match status {
        StopStatus::Completed => EMERALD,
        StopStatus::InProgress => LIME,
        StopStatus::Scheduled => FOREST,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_hues() {
        assert_eq!(intensity_color(Some(TrafficIntensity::Heavy)).hex(), "#f43f5e");
        assert_eq!(intensity_color(Some(TrafficIntensity::Moderate)).hex(), "#f59e0b");
        assert_eq!(intensity_color(Some(TrafficIntensity::Low)).hex(), "#10b981");
    }

    #[test]
    fn missing_intensity_is_dim() {
        assert_eq!(intensity_color(None).hex(), "#064e3b");
    }

    #[test]
    fn every_intensity_has_a_distinct_color() {
        use std::collections::HashSet;
        use strum::IntoEnumIterator;
        let mut seen: HashSet<Rgb> = TrafficIntensity::iter().map(|i| intensity_color(Some(i))).collect();
        seen.insert(intensity_color(None));
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn stop_fills() {
        assert_eq!(stop_fill(StopStatus::Completed).to_string(), "#10b981");
        assert_eq!(stop_fill(StopStatus::InProgress).to_string(), "#84cc16");
        assert_eq!(stop_fill(StopStatus::Scheduled).to_string(), "#065f46");
    }
}
