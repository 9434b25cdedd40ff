use axum::extract::{Extension, Json, Query};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::entities::{RouteHistory, TravelMode};
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct FindParams {
    start: String,
    end: String,
    #[serde(default)]
    mode: TravelMode,
}

/// A missing route is a well-formed 200 response with an error body, not a
/// request failure. Existing clients inspect the body for that field.
pub async fn find(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<FindParams>,
) -> Result<Json<Value>, Error> {
    let maybe_route = api
        .find_route(params.start, params.end, params.mode)
        .await?;

    let body = match maybe_route {
        Some(route) => serde_json::to_value(route)?,
        None => json!({ "error": "route not found" }),
    };

    Ok(Json(body))
}

pub async fn history(
    Extension(api): Extension<DynAPI>,
) -> Result<Json<Vec<RouteHistory>>, Error> {
    let history = api.route_history().await?;

    Ok(history.into())
}
