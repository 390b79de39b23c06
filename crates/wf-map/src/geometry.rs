//! Points, polylines and the zoom transform.

use serde::Serialize;

/// A point in viewport coordinates (origin top-left, y down).
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    fn lerp(self, other: Point, t: f64) -> Point {
        Point::new(self.x + (other.x - self.x) * t, self.y + (other.y - self.y) * t)
    }
}

/// An open path of straight segments.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<Point>,
}

impl Polyline {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        Self::new(coords.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Total arc length.
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }

    /// Point at arc length `distance` from the start, clamped to the ends.
    ///
    /// Returns `None` only for an empty polyline.
    pub fn point_at_length(&self, distance: f64) -> Option<Point> {
        let first = *self.points.first()?;
        if distance <= 0.0 {
            return Some(first);
        }
        let mut remaining = distance;
        for w in self.points.windows(2) {
            let seg = w[0].distance(w[1]);
            if remaining <= seg {
                let t = if seg > 0.0 { remaining / seg } else { 0.0 };
                return Some(w[0].lerp(w[1], t));
            }
            remaining -= seg;
        }
        self.points.last().copied()
    }

    /// Point at `fraction` (0..=1) of the arc length.
    pub fn point_at_fraction(&self, fraction: f64) -> Option<Point> {
        self.point_at_length(fraction.clamp(0.0, 1.0) * self.length())
    }

    /// SVG path data (`M x,y L x,y ...`).
    pub fn to_path_data(&self) -> String {
        let mut out = String::new();
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(if i == 0 { 'M' } else { 'L' });
            out.push_str(&format!("{},{}", p.x, p.y));
        }
        out
    }
}

/// Uniform scale about a fixed center: translate to center, scale, translate
/// back.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub center: Point,
    pub scale: f64,
}

impl Transform {
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.center.x + (p.x - self.center.x) * self.scale,
            self.center.y + (p.y - self.center.y) * self.scale,
        )
    }

    /// The SVG `transform` attribute value.
    pub fn to_svg(&self) -> String {
        format!(
            "translate({}, {}) scale({}) translate({}, {})",
            self.center.x, self.center.y, self.scale, -self.center.x, -self.center.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l_shape() -> Polyline {
        // 30 right, then 40 down: length 70
        Polyline::from_coords(&[(0.0, 0.0), (30.0, 0.0), (30.0, 40.0)])
    }

    #[test]
    fn length_sums_segments() {
        assert!((l_shape().length() - 70.0).abs() < 1e-9);
        let diag = Polyline::from_coords(&[(0.0, 0.0), (3.0, 4.0)]);
        assert!((diag.length() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn point_at_length_walks_segments() {
        let path = l_shape();
        assert_eq!(path.point_at_length(0.0), Some(Point::new(0.0, 0.0)));
        assert_eq!(path.point_at_length(15.0), Some(Point::new(15.0, 0.0)));
        assert_eq!(path.point_at_length(50.0), Some(Point::new(30.0, 20.0)));
        assert_eq!(path.point_at_length(500.0), Some(Point::new(30.0, 40.0)));
    }

    #[test]
    fn point_at_fraction_clamps() {
        let path = l_shape();
        assert_eq!(path.point_at_fraction(-1.0), Some(Point::new(0.0, 0.0)));
        assert_eq!(path.point_at_fraction(2.0), Some(Point::new(30.0, 40.0)));
        assert_eq!(path.point_at_fraction(0.5), Some(Point::new(30.0, 5.0)));
    }

    #[test]
    fn empty_polyline_has_no_points() {
        let empty = Polyline::new(Vec::new());
        assert_eq!(empty.length(), 0.0);
        assert_eq!(empty.point_at_length(1.0), None);
    }

    #[test]
    fn path_data_format() {
        assert_eq!(l_shape().to_path_data(), "M0,0 L30,0 L30,40");
    }

    #[test]
    fn transform_keeps_center_fixed() {
        let t = Transform {
            center: Point::new(400.0, 300.0),
            scale: 2.0,
        };
        assert_eq!(t.apply(Point::new(400.0, 300.0)), Point::new(400.0, 300.0));
        assert_eq!(t.apply(Point::new(500.0, 300.0)), Point::new(600.0, 300.0));
        assert_eq!(t.apply(Point::new(400.0, 250.0)), Point::new(400.0, 200.0));
    }

    #[test]
    fn transform_svg_string() {
        let t = Transform {
            center: Point::new(400.0, 300.0),
            scale: 1.2,
        };
        assert_eq!(
            t.to_svg(),
            "translate(400, 300) scale(1.2) translate(-400, -300)"
        );
        let unscaled = Transform {
            center: Point::new(400.0, 300.0),
            scale: 1.0,
        };
        assert_eq!(
            unscaled.to_svg(),
            "translate(400, 300) scale(1) translate(-400, -300)"
        );
    }
}
