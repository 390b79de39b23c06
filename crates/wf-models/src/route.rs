//! Route stops, vehicle location and the aggregate transport state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::traffic::TrafficSegment;

// ---------------------------------------------------------------------------
// StopId
// ---------------------------------------------------------------------------

/// Identifier of a route stop.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct StopId(String);

impl StopId {
    /// Create a new stop identifier.
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    /// Return the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StopId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

/// Whether the vehicle loads or unloads at a stop.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum StopKind {
    /// Goods are collected.
    Pickup,
    /// Goods are handed over.
    Delivery,
}

/// Progress of a stop along the route.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum StopStatus {
    /// Stop already served.
    Completed,
    /// Vehicle is on its way to, or at, this stop.
    #[serde(rename = "In Progress")]
    #[strum(serialize = "In Progress")]
    InProgress,
    /// Planned.
    Scheduled,
}

// ---------------------------------------------------------------------------
// RouteStop
// ---------------------------------------------------------------------------

/// One waypoint of the active route.
///
/// A route is a `Vec<RouteStop>`; its order is the input order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteStop {
    /// Unique identifier.
    pub id: StopId,
    /// Place name.
    pub location: String,
    /// Pickup or delivery.
    #[serde(rename = "type")]
    pub kind: StopKind,
    /// Vehicle / cargo description.
    pub car_model: String,
    /// Progress.
    pub status: StopStatus,
    /// Estimated time, as displayed.
    pub estimated_time: String,
}

impl RouteStop {
    /// Only the stop currently being served can trigger a client notification.
    pub fn can_notify(&self) -> bool {
        self.status == StopStatus::InProgress
    }
}

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// A named geographic position.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Location {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Display name.
    pub name: String,
}

impl Location {
    /// Build a location, rejecting out-of-range coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use wf_models::Location;
    ///
    /// let florence = Location::try_new(43.7696, 11.2558, "Florence").unwrap();
    /// assert_eq!(florence.name, "Florence");
    /// assert!(Location::try_new(120.0, 0.0, "Nowhere").is_err());
    /// ```
    pub fn try_new(lat: f64, lng: f64, name: &str) -> Result<Self, ModelError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(ModelError::InvalidCoordinate {
                lat,
                lng,
                reason: "latitude must be within [-90, 90]".into(),
            });
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(ModelError::InvalidCoordinate {
                lat,
                lng,
                reason: "longitude must be within [-180, 180]".into(),
            });
        }
        Ok(Self {
            lat,
            lng,
            name: name.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// TransportState
// ---------------------------------------------------------------------------

/// Aggregate state of the tracked vehicle.
///
/// The traffic segment list is replaced wholesale on each AI refresh.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransportState {
    /// Where the vehicle is.
    pub current_location: Location,
    /// The route being driven.
    pub active_route: Vec<RouteStop>,
    /// Speed in km/h.
    pub speed: u32,
    /// Heading in degrees, clockwise from north.
    pub heading: u16,
    /// Latest traffic classification around the vehicle.
    pub traffic_segments: Vec<TrafficSegment>,
}

impl TransportState {
    /// Swap in a freshly fetched traffic segment list.
    pub fn replace_traffic(&mut self, segments: Vec<TrafficSegment>) {
        self.traffic_segments = segments;
    }
}

/// Eight-point compass name for a heading in degrees.
///
/// # Examples
///
/// ```
/// assert_eq!(wf_models::compass_point(185), "S");
/// assert_eq!(wf_models::compass_point(350), "N");
/// ```
pub fn compass_point(heading: u16) -> &'static str {
    const POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
    let sector = ((u32::from(heading % 360) * 2 + 45) / 90) % 8;
    POINTS[sector as usize]
}
