//! Values returned when a call fails.
//!
//! All of them are deterministic; the arrival notification depends only on
//! the stop it is drafted for.

use wf_models::{
    MessageInsight, NearbyPlaces, Priority, RouteStop, Sentiment, TrafficIntensity, TrafficReport,
    TrafficSegment,
};

pub const TRAFFIC_TIP: &str = "Normal traffic conditions expected on the current route.";
pub const ROUTE_ADVICE: &str = "Ensure all delivery documents are prepared for the next stop.";
pub const SUGGESTED_ACTION: &str = "Review and respond manually.";
pub const SEARCH_UNAVAILABLE: &str = "Search currently unavailable.";
/// Text used when a nearby search succeeds with an empty answer.
pub const NO_RESULTS: &str = "No results found.";

pub fn traffic_report() -> TrafficReport {
    TrafficReport {
        tip: TRAFFIC_TIP.to_string(),
        segments: vec![
            TrafficSegment::new("s1", TrafficIntensity::Low, "A1 North"),
            TrafficSegment::new("s2", TrafficIntensity::Moderate, "A11 Interchange"),
            TrafficSegment::new("s3", TrafficIntensity::Low, "A1 South"),
        ],
    }
}

pub fn message_insight() -> MessageInsight {
    MessageInsight {
        priority: Priority::Medium,
        sentiment: Sentiment::Neutral,
        suggested_action: SUGGESTED_ACTION.to_string(),
    }
}

pub fn route_advice() -> String {
    ROUTE_ADVICE.to_string()
}

pub fn arrival_notification(stop: &RouteStop) -> String {
    format!(
        "WFTransporti: We are on track for the {} of your {} at {}. Estimated arrival: {}.",
        stop.kind, stop.car_model, stop.location, stop.estimated_time
    )
}

pub fn nearby_places() -> NearbyPlaces {
    NearbyPlaces {
        text: SEARCH_UNAVAILABLE.to_string(),
        links: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wf_models::mock;

    #[test]
    fn arrival_fallback_is_fixed_template() {
        let stop = &mock::route()[1];
        assert_eq!(
            arrival_notification(stop),
            "WFTransporti: We are on track for the Delivery of your Iveco Daily Isotermico at Bologna. \
             Estimated arrival: 11:45."
        );
        assert_eq!(arrival_notification(stop), arrival_notification(&stop.clone()));
    }

    #[test]
    fn traffic_fallback_segments() {
        let report = traffic_report();
        let labels: Vec<_> = report.segments.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["A1 North", "A11 Interchange", "A1 South"]);
        assert_eq!(report.segments[1].intensity, TrafficIntensity::Moderate);
    }

    #[test]
    fn nearby_fallback_has_no_links() {
        let places = nearby_places();
        assert_eq!(places.text, "Search currently unavailable.");
        assert!(places.links.is_empty());
    }
}
