//! Nearby-place search results.

use serde::{Deserialize, Serialize};

/// A link to a place returned by the maps-grounded search.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlaceLink {
    /// Place name.
    pub title: String,
    /// Maps URL.
    pub uri: String,
}

/// Summary text plus the places it mentions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct NearbyPlaces {
    /// Free-text answer.
    pub text: String,
    /// Places cited by the answer, possibly empty.
    pub links: Vec<PlaceLink>,
}
