//! Prompt templates.

use wf_models::RouteStop;

pub fn traffic(location: &str) -> String {
    format!(
        "What is the current traffic status on major highways (Autostrade) near {location}, Italy? \
         Provide a short logistics tip and classify 3 major segments as 'Low', 'Moderate', or 'Heavy' intensity."
    )
}

pub fn triage(message: &str) -> String {
    format!(
        "Analyze this message from a car transport client: \"{message}\". \
         Determine priority (Low, Medium, High), sentiment (Positive, Neutral, Negative), \
         and a short suggested professional action."
    )
}

/// `"{type} {car_model} at {location}"` per stop, comma separated.
pub fn stop_details(stops: &[RouteStop]) -> String {
    stops
        .iter()
        .map(|s| format!("{} {} at {}", s.kind, s.car_model, s.location))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn route_advice(stops: &[RouteStop]) -> String {
    format!(
        "I have the following stops for my auto-transport business: {}. \
         Provide a concise (2-3 sentences) logistic tip or warning about this sequence \
         considering general Italian geography and transit efficiency.",
        stop_details(stops)
    )
}

pub fn arrival(stop: &RouteStop) -> String {
    format!(
        "Draft a professional and premium SMS/WhatsApp notification for a client. \
         Context: WFTransporti is arriving for a {}. Car: {}. Location: {}. ETA: {}. \
         Make it sound high-end and reassuring. Keep it under 160 characters.",
        stop.kind, stop.car_model, stop.location, stop.estimated_time
    )
}
