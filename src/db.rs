use sqlx::{postgres::PgPoolOptions, Executor, Pool, Postgres};

pub struct PgPool(pub Pool<Postgres>);

impl PgPool {
    pub async fn new(db_uri: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(db_uri)
            .await?;

        Ok(Self(pool))
    }
}

/// Idempotent schema creation, run once before serving traffic and again
/// on demand through the create_db endpoint.
pub async fn migrate(pool: &Pool<Postgres>) -> Result<(), sqlx::Error> {
    pool.execute(
        "CREATE TABLE IF NOT EXISTS places (id SERIAL PRIMARY KEY, name VARCHAR NOT NULL, address VARCHAR NOT NULL, category VARCHAR, visited BOOLEAN NOT NULL DEFAULT FALSE)",
    )
    .await?;

    pool.execute(
        "CREATE TABLE IF NOT EXISTS custom_lists (id SERIAL PRIMARY KEY, name VARCHAR NOT NULL UNIQUE)",
    )
    .await?;

    pool.execute(
        "CREATE TABLE IF NOT EXISTS route_history (id SERIAL PRIMARY KEY, start_point VARCHAR NOT NULL, end_point VARCHAR NOT NULL, mode VARCHAR NOT NULL, created_at TIMESTAMPTZ NOT NULL)",
    )
    .await?;

    Ok(())
}
