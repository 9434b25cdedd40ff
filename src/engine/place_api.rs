use super::Engine;

use async_trait::async_trait;
use sqlx::{postgres::PgRow, Executor, Row};

use crate::{
    api::PlaceAPI,
    entities::Place,
    error::{not_found_error, validation_error, Error},
    external::PlaceSummary,
};

#[async_trait]
impl PlaceAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_place(
        &self,
        name: String,
        address: String,
        category: Option<String>,
    ) -> Result<Place, Error> {
        if name.trim().is_empty() {
            return Err(validation_error("name must not be empty"));
        }

        if address.trim().is_empty() {
            return Err(validation_error("address must not be empty"));
        }

        let mut conn = self.pool.acquire().await?;

        let row = conn
            .fetch_one(
                sqlx::query(
                    "INSERT INTO places (name, address, category, visited) VALUES ($1, $2, $3, FALSE) RETURNING id",
                )
                .bind(&name)
                .bind(&address)
                .bind(&category),
            )
            .await?;

        let id: i32 = row.try_get("id")?;

        Ok(Place {
            id,
            name,
            address,
            category,
            visited: false,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn mark_place(&self, id: i32, visited: bool) -> Result<Place, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_result = conn
            .fetch_optional(
                sqlx::query(
                    "UPDATE places SET visited = $2 WHERE id = $1 RETURNING id, name, address, category, visited",
                )
                .bind(&id)
                .bind(&visited),
            )
            .await?;

        let result = maybe_result.ok_or_else(|| not_found_error("place not found"))?;

        place_from_row(&result)
    }

    #[tracing::instrument(skip(self))]
    async fn list_places(&self) -> Result<Vec<Place>, Error> {
        let mut conn = self.pool.acquire().await?;

        let results = conn
            .fetch_all(sqlx::query(
                "SELECT id, name, address, category, visited FROM places ORDER BY id ASC",
            ))
            .await?;

        results.iter().map(place_from_row).collect()
    }

    #[tracing::instrument(skip(self))]
    async fn search_places(
        &self,
        query: String,
        location: String,
    ) -> Result<Vec<PlaceSummary>, Error> {
        self.maps.search_places(&query, &location).await
    }
}

fn place_from_row(row: &PgRow) -> Result<Place, Error> {
    Ok(Place {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        address: row.try_get("address")?,
        category: row.try_get("category")?,
        visited: row.try_get("visited")?,
    })
}
