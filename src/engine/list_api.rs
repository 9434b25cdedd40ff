use super::Engine;

use async_trait::async_trait;
use sqlx::{Executor, Row};

use crate::{
    api::ListAPI,
    entities::CustomList,
    error::{validation_error, Error},
};

#[async_trait]
impl ListAPI for Engine {
    /// Duplicate names surface as a constraint violation through the
    /// UNIQUE index on custom_lists.name; the failed insert leaves the
    /// store unchanged.
    #[tracing::instrument(skip(self))]
    async fn create_list(&self, name: String) -> Result<CustomList, Error> {
        if name.trim().is_empty() {
            return Err(validation_error("list name must not be empty"));
        }

        let mut conn = self.pool.acquire().await?;

        let row = conn
            .fetch_one(
                sqlx::query("INSERT INTO custom_lists (name) VALUES ($1) RETURNING id")
                    .bind(&name),
            )
            .await?;

        let id: i32 = row.try_get("id")?;

        Ok(CustomList { id, name })
    }

    #[tracing::instrument(skip(self))]
    async fn list_lists(&self) -> Result<Vec<CustomList>, Error> {
        let mut conn = self.pool.acquire().await?;

        let results = conn
            .fetch_all(sqlx::query(
                "SELECT id, name FROM custom_lists ORDER BY id ASC",
            ))
            .await?;

        results
            .iter()
            .map(|row| {
                Ok(CustomList {
                    id: row.try_get("id")?,
                    name: row.try_get("name")?,
                })
            })
            .collect()
    }
}
