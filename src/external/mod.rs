mod google_maps;

pub use google_maps::GoogleMaps;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::entities::TravelMode;
use crate::error::Error;

/// One entry of a place text search, normalized from the provider's shape.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlaceSummary {
    pub name: String,
    pub address: String,
    pub rating: Rating,
    pub lat: f64,
    pub lng: f64,
}

/// Providers omit ratings for unrated places; the sentinel string stands in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rating {
    Score(f64),
    Unrated(String),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteDetails {
    pub start_address: String,
    pub end_address: String,
    pub distance: String,
    pub duration: String,
    pub steps: Vec<RouteStep>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteStep {
    /// May contain markup as delivered by the provider.
    pub instruction: String,
    pub distance: String,
}

/// The external geocoding/directions provider, one synchronous network call
/// per invocation, no retries. Implemented by [`GoogleMaps`] and by test
/// stubs.
#[async_trait]
pub trait Maps: Send + Sync {
    /// Text search near a location. Only the provider's first result page
    /// is used; zero results is an empty vec, not an error.
    async fn search_places(&self, query: &str, location: &str)
        -> Result<Vec<PlaceSummary>, Error>;

    /// Directions between two points for a travel mode. `None` when the
    /// provider returns no candidate routes.
    async fn directions(
        &self,
        start: &str,
        end: &str,
        mode: TravelMode,
    ) -> Result<Option<RouteDetails>, Error>;
}

pub type DynMaps = Arc<dyn Maps>;
