mod list_api;
mod place_api;
mod route_api;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    api::{AdminAPI, API},
    db,
    error::Error,
    external::DynMaps,
};

type Database = Postgres;

pub struct Engine {
    pool: Pool<Database>,
    maps: DynMaps,
}

impl Engine {
    pub fn new(pool: Pool<Database>, maps: DynMaps) -> Self {
        Self { pool, maps }
    }
}

#[async_trait]
impl AdminAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn migrate(&self) -> Result<(), Error> {
        db::migrate(&self.pool).await?;

        Ok(())
    }
}

impl API for Engine {}
