//! Non-interactive subcommands.
//!
//! Each one runs a single operation against the session mock data and
//! returns what it would print, so they can be tested without a terminal.

use std::time::Duration;

use anyhow::Context;
use clap::Subcommand;
use wf_map::{build_scene, render_svg, Animator, SceneInputs, Zoom};
use wf_models::{
    mock, parse_tag, Location, MessageId, ModelError, StopId, TrafficIntensity, TrafficSegment,
};
use wf_sdk::{fallback, AssistantClient};

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Render the live map as SVG
    Snapshot {
        /// Zoom factor, clamped to 0.5..=3.0
        #[arg(long, default_value_t = 1.0)]
        zoom: f64,
        /// Advance the animations by this many milliseconds
        #[arg(long, default_value_t = 0)]
        elapsed_ms: u64,
        /// Use the offline traffic report instead of asking the assistant
        #[arg(long, conflicts_with = "traffic")]
        fallback: bool,
        /// Explicit intensities for the roads, in order (e.g. heavy,low)
        #[arg(long, value_delimiter = ',', value_parser = parse_intensity)]
        traffic: Option<Vec<TrafficIntensity>>,
        /// Print the scene and animation frame as JSON instead of SVG
        #[arg(long)]
        json: bool,
    },
    /// Traffic report for a location
    Traffic {
        #[arg(long, default_value = "Florence")]
        location: String,
    },
    /// Route advice for the mock route
    Advise,
    /// Draft an arrival notification for a route stop
    Notify {
        /// Stop id (e.g. r2)
        #[arg(long)]
        stop: String,
    },
    /// Search places near the vehicle
    Nearby {
        #[arg(long)]
        query: String,
        /// Search around this latitude instead of the vehicle
        #[arg(long, requires = "lng", allow_negative_numbers = true)]
        lat: Option<f64>,
        /// Search around this longitude instead of the vehicle
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lng: Option<f64>,
    },
    /// Triage an inbound message
    Triage {
        /// Message id (e.g. m1)
        #[arg(long)]
        message: String,
    },
}

/// Run `command` and return its output.
pub async fn execute(command: Command, client: &AssistantClient) -> anyhow::Result<String> {
    let output = match command {
        Command::Snapshot {
            zoom,
            elapsed_ms,
            fallback,
            traffic,
            json,
        } => {
            let segments = match (traffic, fallback) {
                (Some(intensities), _) => explicit_segments(&intensities),
                (None, true) => fallback::traffic_report().segments,
                (None, false) => {
                    let location = mock::transport_state().current_location.name;
                    client.traffic_analysis(&location).await.segments
                }
            };
            snapshot(Zoom::from_factor(zoom), Duration::from_millis(elapsed_ms), segments, json)?
        }
        Command::Traffic { location } => {
            serde_json::to_string_pretty(&client.traffic_analysis(&location).await)?
        }
        Command::Advise => {
            let advice = client.optimize_route(&mock::route()).await;
            serde_json::to_string_pretty(&serde_json::json!({ "advice": advice }))?
        }
        Command::Notify { stop } => {
            let id = StopId::new(&stop);
            let stop = mock::route()
                .into_iter()
                .find(|s| s.id == id)
                .with_context(|| format!("no route stop with id {id}"))?;
            let text = client.arrival_notification(&stop).await;
            serde_json::to_string_pretty(&serde_json::json!({
                "stopId": stop.id,
                "text": text,
            }))?
        }
        Command::Nearby { query, lat, lng } => {
            let here = match (lat, lng) {
                (Some(lat), Some(lng)) => Location::try_new(lat, lng, "custom position")?,
                _ => mock::transport_state().current_location,
            };
            serde_json::to_string_pretty(&client.nearby_places(&query, here.lat, here.lng).await)?
        }
        Command::Triage { message } => {
            let id = MessageId::new(&message);
            let message = mock::messages(chrono::Utc::now())
                .into_iter()
                .find(|m| m.id == id)
                .with_context(|| format!("no message with id {id}"))?;
            serde_json::to_string_pretty(&client.analyze_message(&message.content).await)?
        }
    };
    Ok(output)
}

fn parse_intensity(value: &str) -> Result<TrafficIntensity, ModelError> {
    parse_tag("traffic intensity", value)
}

fn explicit_segments(intensities: &[TrafficIntensity]) -> Vec<TrafficSegment> {
    intensities
        .iter()
        .enumerate()
        .map(|(i, &intensity)| {
            TrafficSegment::new(&format!("s{}", i + 1), intensity, &format!("Road {}", i + 1))
        })
        .collect()
}

fn snapshot(
    zoom: Zoom,
    elapsed: Duration,
    segments: Vec<TrafficSegment>,
    json: bool,
) -> anyhow::Result<String> {
    let mut state = mock::transport_state();
    state.replace_traffic(segments);
    let scene = build_scene(&SceneInputs {
        current_location: &state.current_location,
        stops: &state.active_route,
        segments: &state.traffic_segments,
        zoom,
    });
    let mut animator = Animator::for_scene(&scene);
    animator.tick(elapsed);
    let frame = animator.frame(&scene);
    if !json {
        return Ok(render_svg(&scene, &frame));
    }
    let document = serde_json::json!({
        "scene": serde_json::to_value(&scene)?,
        "frame": serde_json::to_value(&frame)?,
    });
    Ok(serde_json::to_string_pretty(&document)?)
}
