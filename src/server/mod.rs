mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::api::API;
use crate::server::handlers::{admin, lists, places, routes};

type DynAPI = Arc<dyn API + Send + Sync>;

pub async fn serve<T: API + Sync + Send + 'static>(api: T) {
    let api = Arc::new(api) as DynAPI;

    let app = Router::new()
        .route("/", get(root))
        .route("/create_db", get(admin::create_db))
        .route("/create_list", post(lists::create))
        .route("/get_lists", get(lists::index))
        .route("/add_place", post(places::create))
        .route("/get_places", get(places::index))
        .route("/mark_place", post(places::mark))
        .route("/search_places", get(places::search))
        .route("/get_route", get(routes::find))
        .route("/get_route_history", get(routes::history))
        .layer(Extension(api));

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}

async fn root() -> &'static str {
    "wayfarer travel planner api"
}
