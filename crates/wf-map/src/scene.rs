//! Scene construction.
//!
//! The road network, stop markers and vehicle position are fixed viewport
//! coordinates. The current location and the route stops passed in
//! [`SceneInputs`] do not move anything yet: markers come from
//! [`STOP_POSITIONS`], not from the route.

use std::time::Duration;

use serde::Serialize;
use wf_models::{Location, RouteStop, StopStatus, TrafficIntensity, TrafficSegment};

use crate::geometry::{Point, Polyline, Transform};
use crate::palette::{intensity_color, stop_fill, Rgb};
use crate::zoom::Zoom;

pub const VIEWPORT_WIDTH: f64 = 800.0;
pub const VIEWPORT_HEIGHT: f64 = 600.0;
pub const VIEWPORT_CENTER: Point = Point::new(VIEWPORT_WIDTH / 2.0, VIEWPORT_HEIGHT / 2.0);

/// Simulated motorway network (A1 spine, Tyrrhenian branch, Adriatic spur).
pub const ROAD_PATHS: [&[(f64, f64)]; 3] = [
    &[(100.0, 100.0), (200.0, 250.0), (400.0, 300.0), (500.0, 500.0)],
    &[(100.0, 100.0), (50.0, 400.0), (200.0, 550.0)],
    &[(400.0, 300.0), (600.0, 150.0)],
];

/// Marker positions: name, coordinates, status.
pub const STOP_POSITIONS: [(&str, f64, f64, StopStatus); 4] = [
    ("Milan", 100.0, 100.0, StopStatus::Completed),
    ("Bologna", 200.0, 250.0, StopStatus::InProgress),
    ("Florence", 400.0, 300.0, StopStatus::Scheduled),
    ("Rome", 500.0, 500.0, StopStatus::Scheduled),
];

pub const VEHICLE_POSITION: Point = Point::new(200.0, 250.0);

/// Everything the scene depends on.
#[derive(Debug, Clone, Copy)]
pub struct SceneInputs<'a> {
    pub current_location: &'a Location,
    pub stops: &'a [RouteStop],
    pub segments: &'a [TrafficSegment],
    pub zoom: Zoom,
}

/// How fast a flow dot travels its road.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowSpeed {
    Moderate,
    Heavy,
}

impl FlowSpeed {
    /// `None` for intensities that do not animate.
    pub fn for_intensity(intensity: TrafficIntensity) -> Option<Self> {
        if !intensity.has_flow() {
            return None;
        }
        Some(if intensity == TrafficIntensity::Heavy {
            Self::Heavy
        } else {
            Self::Moderate
        })
    }

    /// Time to traverse the whole road. Congested roads are slower.
    pub fn traversal(self) -> Duration {
        match self {
            Self::Moderate => Duration::from_millis(3000),
            Self::Heavy => Duration::from_millis(6000),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Road {
    pub index: usize,
    pub path: Polyline,
    pub segment: Option<TrafficSegment>,
    pub color: Rgb,
    /// `Some` when a flow dot animates on this road.
    pub flow: Option<FlowSpeed>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StopMarker {
    pub name: String,
    pub position: Point,
    pub status: StopStatus,
    pub fill: Rgb,
}

/// A fully built, immutable map scene.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Scene {
    pub transform: Transform,
    pub roads: Vec<Road>,
    pub stops: Vec<StopMarker>,
    pub vehicle: Point,
}

impl Scene {
    pub fn flowing_roads(&self) -> impl Iterator<Item = &Road> {
        self.roads.iter().filter(|r| r.flow.is_some())
    }
}

/// Segment used to color road `index`: segments are reused cyclically.
pub fn segment_for_road(segments: &[TrafficSegment], index: usize) -> Option<&TrafficSegment> {
    if segments.is_empty() {
        return None;
    }
    segments.get(index % segments.len())
}

/// Build the scene for the given inputs.
pub fn build_scene(inputs: &SceneInputs<'_>) -> Scene {
    let roads = ROAD_PATHS
        .iter()
        .enumerate()
        .map(|(index, coords)| {
            let segment = segment_for_road(inputs.segments, index).cloned();
            let intensity = segment.as_ref().map(|s| s.intensity);
            Road {
                index,
                path: Polyline::from_coords(coords),
                color: intensity_color(intensity),
                flow: intensity.and_then(FlowSpeed::for_intensity),
                segment,
            }
        })
        .collect();

    let stops = STOP_POSITIONS
        .iter()
        .map(|&(name, x, y, status)| StopMarker {
            name: name.to_string(),
            position: Point::new(x, y),
            status,
            fill: stop_fill(status),
        })
        .collect();

    Scene {
        transform: inputs.zoom.transform(),
        roads,
        stops,
        vehicle: VEHICLE_POSITION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;
    use wf_models::mock;

    fn seg(id: &str, intensity: TrafficIntensity) -> TrafficSegment {
        TrafficSegment::new(id, intensity, id)
    }

    fn scene_with(segments: &[TrafficSegment], zoom: Zoom) -> Scene {
        let state = mock::transport_state();
        build_scene(&SceneInputs {
            current_location: &state.current_location,
            stops: &state.active_route,
            segments,
            zoom,
        })
    }

    #[test]
    fn segments_are_used_cyclically() {
        let segs = vec![seg("a", TrafficIntensity::Low), seg("b", TrafficIntensity::Heavy)];
        assert_eq!(segment_for_road(&segs, 0).map(|s| s.id.as_str()), Some("a"));
        assert_eq!(segment_for_road(&segs, 1).map(|s| s.id.as_str()), Some("b"));
        assert_eq!(segment_for_road(&segs, 2).map(|s| s.id.as_str()), Some("a"));
        assert_eq!(segment_for_road(&[], 0), None);
    }

    #[test]
    fn roads_take_color_from_their_segment() {
        let segs = vec![
            seg("s1", TrafficIntensity::Heavy),
            seg("s2", TrafficIntensity::Moderate),
            seg("s3", TrafficIntensity::Low),
        ];
        let scene = scene_with(&segs, Zoom::default());
        let colors: Vec<_> = scene.roads.iter().map(|r| r.color).collect();
        assert_eq!(colors, vec![palette::ROSE, palette::AMBER, palette::EMERALD]);
    }

    #[test]
    fn no_segments_gives_dim_roads_without_flow() {
        let scene = scene_with(&[], Zoom::default());
        assert_eq!(scene.roads.len(), 3);
        assert!(scene.roads.iter().all(|r| r.color == palette::DIM));
        assert_eq!(scene.flowing_roads().count(), 0);
    }

    #[test]
    fn flow_only_on_moderate_or_heavy_roads() {
        let segs = vec![
            seg("s1", TrafficIntensity::Low),
            seg("s2", TrafficIntensity::Moderate),
            seg("s3", TrafficIntensity::Heavy),
        ];
        let scene = scene_with(&segs, Zoom::default());
        assert_eq!(scene.roads[0].flow, None);
        assert_eq!(scene.roads[1].flow, Some(FlowSpeed::Moderate));
        assert_eq!(scene.roads[2].flow, Some(FlowSpeed::Heavy));
        assert!(FlowSpeed::Heavy.traversal() > FlowSpeed::Moderate.traversal());
    }

    #[test]
    fn flow_speed_follows_has_flow() {
        use strum::IntoEnumIterator;
        for intensity in TrafficIntensity::iter() {
            assert_eq!(FlowSpeed::for_intensity(intensity).is_some(), intensity.has_flow());
        }
    }

    #[test]
    fn scene_serializes_with_hex_colors() {
        let segs = vec![seg("s1", TrafficIntensity::Heavy), seg("s2", TrafficIntensity::Low)];
        let value = serde_json::to_value(scene_with(&segs, Zoom::default())).unwrap();

        let roads = value["roads"].as_array().unwrap();
        assert_eq!(roads[0]["color"], "#f43f5e");
        assert_eq!(roads[0]["flow"], "Heavy");
        assert_eq!(roads[1]["color"], "#10b981");
        assert!(roads[1]["flow"].is_null());
        assert_eq!(value["stops"][0]["name"], "Milan");
        assert_eq!(value["vehicle"]["x"], 200.0);
        assert_eq!(value["transform"]["scale"], 1.0);
    }

    #[test]
    fn markers_come_from_fixed_positions() {
        let scene = scene_with(&[], Zoom::default());
        let names: Vec<_> = scene.stops.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Milan", "Bologna", "Florence", "Rome"]);
        assert_eq!(scene.stops[1].fill, palette::LIME);
        assert_eq!(scene.vehicle, Point::new(200.0, 250.0));
    }

    #[test]
    fn rebuild_is_deterministic_and_tracks_zoom() {
        let segs = vec![seg("s1", TrafficIntensity::Moderate)];
        let a = scene_with(&segs, Zoom::default());
        let b = scene_with(&segs, Zoom::default());
        assert_eq!(a, b);

        let zoomed = scene_with(&segs, Zoom::default().zoom_in());
        assert_eq!(zoomed.transform.scale, 1.2);
        assert_eq!(zoomed.roads, a.roads);
    }
}
