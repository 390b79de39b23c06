//! Error types for the `wf-models` crate.
//!
//! All fallible constructors and parsers in this crate return variants of
//! [`ModelError`].

use std::str::FromStr;

/// Errors produced when constructing or validating model types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// A tag string (status, priority, intensity, ...) was not recognised.
    #[error("invalid {kind} \"{value}\"")]
    InvalidTag {
        /// Which tag family was being parsed.
        kind: &'static str,
        /// The value that failed to parse.
        value: String,
    },

    /// A coordinate pair was outside the valid latitude/longitude range.
    #[error("invalid coordinate ({lat}, {lng}): {reason}")]
    InvalidCoordinate {
        /// Latitude that was supplied.
        lat: f64,
        /// Longitude that was supplied.
        lng: f64,
        /// Human-readable explanation.
        reason: String,
    },
}

/// Parse a tag through its `FromStr` implementation, reporting failures as
/// [`ModelError::InvalidTag`].
///
/// # Examples
///
/// ```
/// use wf_models::{parse_tag, TrafficIntensity};
///
/// let heavy: TrafficIntensity = parse_tag("traffic intensity", "heavy").unwrap();
/// assert_eq!(heavy, TrafficIntensity::Heavy);
/// assert!(parse_tag::<TrafficIntensity>("traffic intensity", "gridlock").is_err());
/// ```
pub fn parse_tag<T: FromStr>(kind: &'static str, value: &str) -> Result<T, ModelError> {
    value.trim().parse().map_err(|_| ModelError::InvalidTag {
        kind,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClientStatus, StopStatus};

    #[test]
    fn error_display_tag() {
        let err = ModelError::InvalidTag {
            kind: "client status",
            value: "Lost".into(),
        };
        assert_eq!(err.to_string(), "invalid client status \"Lost\"");
    }

    #[test]
    fn error_display_coordinate() {
        let err = ModelError::InvalidCoordinate {
            lat: 91.0,
            lng: 0.0,
            reason: "latitude must be within [-90, 90]".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid coordinate (91, 0): latitude must be within [-90, 90]"
        );
    }

    #[test]
    fn parse_tag_trims_and_reports_kind() {
        let status: StopStatus = parse_tag("stop status", "  in progress ").unwrap();
        assert_eq!(status, StopStatus::InProgress);

        let err = parse_tag::<ClientStatus>("client status", "Lost").unwrap_err();
        assert_eq!(
            err,
            ModelError::InvalidTag {
                kind: "client status",
                value: "Lost".into()
            }
        );
    }
}
