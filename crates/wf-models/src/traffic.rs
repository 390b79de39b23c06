//! Traffic segments and the AI traffic report.

use serde::{Deserialize, Serialize};

/// Three-valued congestion classification.
///
/// Drives both the road color on the map and whether a flow dot travels
/// along the road.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum TrafficIntensity {
    /// Fluid flow.
    Low,
    /// Slowdowns.
    Moderate,
    /// Congestion.
    Heavy,
}

impl TrafficIntensity {
    /// Whether the map animates a flow dot for this intensity.
    pub fn has_flow(self) -> bool {
        matches!(self, Self::Moderate | Self::Heavy)
    }
}

/// A labelled stretch of road with its congestion level.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrafficSegment {
    /// Segment identifier.
    pub id: String,
    /// Congestion level.
    pub intensity: TrafficIntensity,
    /// Display label (e.g. "A1 North").
    pub label: String,
}

impl TrafficSegment {
    /// Build a segment from its parts.
    pub fn new(id: &str, intensity: TrafficIntensity, label: &str) -> Self {
        Self {
            id: id.to_string(),
            intensity,
            label: label.to_string(),
        }
    }
}

/// Short logistics tip plus the classified segments near a location.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrafficReport {
    /// Human-readable advice.
    pub tip: String,
    /// Classified segments.
    pub segments: Vec<TrafficSegment>,
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Segments `s1..sN` with the given intensities.
    pub(crate) fn segments(intensities: &[&str]) -> Vec<TrafficSegment> {
        intensities
            .iter()
            .enumerate()
            .map(|(i, name)| {
                TrafficSegment::new(
                    &format!("s{}", i + 1),
                    name.parse().expect("known intensity"),
                    &format!("Segment {}", i + 1),
                )
            })
            .collect()
    }

    #[test]
    fn flow_only_for_moderate_and_heavy() {
        assert!(!TrafficIntensity::Low.has_flow());
        assert!(TrafficIntensity::Moderate.has_flow());
        assert!(TrafficIntensity::Heavy.has_flow());
    }

    #[test]
    fn report_parses_wire_shape() {
        let json = serde_json::json!({
            "tip": "Avoid the A1 near Barberino.",
            "segments": [
                { "id": "s1", "intensity": "Heavy", "label": "A1 Barberino" },
                { "id": "s2", "intensity": "Low", "label": "A11 Firenze-Mare" }
            ]
        });
        let report: TrafficReport = serde_json::from_value(json).unwrap();
        assert_eq!(report.segments.len(), 2);
        assert_eq!(report.segments[0].intensity, TrafficIntensity::Heavy);
    }

    #[test]
    fn report_rejects_unknown_intensity() {
        let json = serde_json::json!({
            "tip": "x",
            "segments": [{ "id": "s1", "intensity": "Gridlock", "label": "A1" }]
        });
        assert!(serde_json::from_value::<TrafficReport>(json).is_err());
    }

    #[test]
    fn report_rejects_missing_segments() {
        let json = serde_json::json!({ "tip": "x" });
        assert!(serde_json::from_value::<TrafficReport>(json).is_err());
    }

    #[test]
    fn test_helper_builds_ids_in_order() {
        let segs = segments(&["Low", "heavy"]);
        assert_eq!(segs[0].id, "s1");
        assert_eq!(segs[1].intensity, TrafficIntensity::Heavy);
    }
}
