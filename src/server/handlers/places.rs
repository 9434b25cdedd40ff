use axum::extract::{Extension, Json, Query};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::entities::Place;
use crate::error::Error;
use crate::external::PlaceSummary;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    name: String,
    address: String,
    category: Option<String>,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Place>, Error> {
    let place = api
        .create_place(params.name, params.address, params.category)
        .await?;

    Ok(place.into())
}

#[derive(Serialize, Deserialize)]
pub struct MarkParams {
    id: i32,
    visited: bool,
}

pub async fn mark(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<MarkParams>,
) -> Result<Json<Value>, Error> {
    api.mark_place(params.id, params.visited).await?;

    Ok(Json(json!({ "message": "place updated" })))
}

pub async fn index(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<Place>>, Error> {
    let places = api.list_places().await?;

    Ok(places.into())
}

#[derive(Serialize, Deserialize)]
pub struct SearchParams {
    query: String,
    #[serde(default = "default_location")]
    location: String,
}

fn default_location() -> String {
    "Buenos Aires, Argentina".into()
}

pub async fn search(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<PlaceSummary>>, Error> {
    let results = api.search_places(params.query, params.location).await?;

    Ok(results.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use crate::server::handlers::testing::{sample_summary, StubAPI};

    #[tokio::test]
    async fn created_place_starts_unvisited_and_round_trips() {
        let api: DynAPI = Arc::new(StubAPI::default());

        let Json(place) = create(
            Extension(api.clone()),
            Json(CreateParams {
                name: "Cafe Tortoni".into(),
                address: "Av. de Mayo 825".into(),
                category: Some("restaurante".into()),
            }),
        )
        .await
        .unwrap();

        assert!(!place.visited);

        let Json(places) = index(Extension(api)).await.unwrap();

        assert_eq!(places.len(), 1);
        assert_eq!(places[0].name, "Cafe Tortoni");
        assert_eq!(places[0].address, "Av. de Mayo 825");
        assert_eq!(places[0].category.as_deref(), Some("restaurante"));
    }

    #[tokio::test]
    async fn create_rejects_empty_name() {
        let api: DynAPI = Arc::new(StubAPI::default());

        let err = create(
            Extension(api.clone()),
            Json(CreateParams {
                name: "".into(),
                address: "Av. de Mayo 825".into(),
                category: None,
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let Json(places) = index(Extension(api)).await.unwrap();
        assert!(places.is_empty());
    }

    #[tokio::test]
    async fn mark_flips_the_visited_flag() {
        let api: DynAPI = Arc::new(StubAPI::default());

        let Json(place) = create(
            Extension(api.clone()),
            Json(CreateParams {
                name: "Caminito".into(),
                address: "La Boca".into(),
                category: None,
            }),
        )
        .await
        .unwrap();

        let Json(body) = mark(
            Extension(api.clone()),
            Json(MarkParams {
                id: place.id,
                visited: true,
            }),
        )
        .await
        .unwrap();

        assert_eq!(body["message"], "place updated");

        let Json(places) = index(Extension(api)).await.unwrap();
        assert!(places[0].visited);
    }

    #[tokio::test]
    async fn mark_unknown_place_is_not_found() {
        let api: DynAPI = Arc::new(StubAPI::default());

        let err = mark(
            Extension(api.clone()),
            Json(MarkParams {
                id: 42,
                visited: true,
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);

        let Json(places) = index(Extension(api)).await.unwrap();
        assert!(places.is_empty());
    }

    #[tokio::test]
    async fn search_passes_provider_results_through() {
        let api: DynAPI = Arc::new(StubAPI {
            search_results: vec![sample_summary()],
            ..Default::default()
        });

        let Json(results) = search(
            Extension(api),
            Query(SearchParams {
                query: "cafe".into(),
                location: default_location(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Cafe Tortoni");
    }

    #[tokio::test]
    async fn search_with_zero_results_is_an_empty_sequence() {
        let api: DynAPI = Arc::new(StubAPI::default());

        let Json(results) = search(
            Extension(api),
            Query(SearchParams {
                query: "cafe".into(),
                location: "Palermo, Buenos Aires".into(),
            }),
        )
        .await
        .unwrap();

        assert!(results.is_empty());
    }
}
