use async_trait::async_trait;

use crate::entities::{CustomList, Place, RouteHistory, TravelMode};
use crate::error::Error;
use crate::external::{PlaceSummary, RouteDetails};

#[async_trait]
pub trait PlaceAPI {
    async fn create_place(
        &self,
        name: String,
        address: String,
        category: Option<String>,
    ) -> Result<Place, Error>;

    async fn mark_place(&self, id: i32, visited: bool) -> Result<Place, Error>;

    async fn list_places(&self) -> Result<Vec<Place>, Error>;

    async fn search_places(
        &self,
        query: String,
        location: String,
    ) -> Result<Vec<PlaceSummary>, Error>;
}

#[async_trait]
pub trait ListAPI {
    async fn create_list(&self, name: String) -> Result<CustomList, Error>;

    async fn list_lists(&self) -> Result<Vec<CustomList>, Error>;
}

#[async_trait]
pub trait RouteAPI {
    /// Looks up a route with the mapping provider and, when one exists,
    /// appends it to the route history. `None` when the provider has no
    /// candidate route; nothing is recorded in that case.
    async fn find_route(
        &self,
        start: String,
        end: String,
        mode: TravelMode,
    ) -> Result<Option<RouteDetails>, Error>;

    async fn record_route(
        &self,
        start: &str,
        end: &str,
        mode: TravelMode,
    ) -> Result<RouteHistory, Error>;

    async fn route_history(&self) -> Result<Vec<RouteHistory>, Error>;
}

#[async_trait]
pub trait AdminAPI {
    async fn migrate(&self) -> Result<(), Error>;
}

pub trait API: PlaceAPI + ListAPI + RouteAPI + AdminAPI {}
