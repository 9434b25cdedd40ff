use std::env;
use std::sync::Arc;

use wayfarer::db::{self, PgPool};
use wayfarer::engine::Engine;
use wayfarer::external::GoogleMaps;
use wayfarer::server::serve;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let db_uri = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let api_key = env::var("GOOGLE_MAPS_API_KEY").expect("GOOGLE_MAPS_API_KEY must be set");
    let api_base =
        env::var("GOOGLE_MAPS_API_BASE").unwrap_or_else(|_| "maps.googleapis.com".into());

    let PgPool(pool) = PgPool::new(&db_uri, 5).await.unwrap();

    db::migrate(&pool).await.unwrap();

    let maps = GoogleMaps::new(api_base, api_key).unwrap();
    let engine = Engine::new(pool, Arc::new(maps));

    serve(engine).await;
}
