use super::Engine;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Executor, Row};

use crate::{
    api::RouteAPI,
    entities::{RouteHistory, TravelMode},
    error::{unexpected_error, validation_error, Error},
    external::RouteDetails,
};

#[async_trait]
impl RouteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn find_route(
        &self,
        start: String,
        end: String,
        mode: TravelMode,
    ) -> Result<Option<RouteDetails>, Error> {
        if start.trim().is_empty() || end.trim().is_empty() {
            return Err(validation_error("start and end must not be empty"));
        }

        let maybe_route = self.maps.directions(&start, &end, mode).await?;

        let route = match maybe_route {
            Some(route) => route,
            None => {
                tracing::info!("provider returned no candidate routes, nothing recorded");
                return Ok(None);
            }
        };

        // the provider call and the history insert are deliberately two
        // independent operations, not one transaction
        self.record_route(&start, &end, mode).await?;

        Ok(Some(route))
    }

    #[tracing::instrument(skip(self))]
    async fn record_route(
        &self,
        start: &str,
        end: &str,
        mode: TravelMode,
    ) -> Result<RouteHistory, Error> {
        let created_at = Utc::now();

        let mut conn = self.pool.acquire().await?;

        let row = conn
            .fetch_one(
                sqlx::query(
                    "INSERT INTO route_history (start_point, end_point, mode, created_at) VALUES ($1, $2, $3, $4) RETURNING id",
                )
                .bind(start)
                .bind(end)
                .bind(mode.name())
                .bind(&created_at),
            )
            .await?;

        Ok(RouteHistory {
            id: row.try_get("id")?,
            start: start.into(),
            end: end.into(),
            mode,
            created_at,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn route_history(&self) -> Result<Vec<RouteHistory>, Error> {
        let mut conn = self.pool.acquire().await?;

        let results = conn
            .fetch_all(sqlx::query(
                "SELECT id, start_point, end_point, mode, created_at FROM route_history ORDER BY id ASC",
            ))
            .await?;

        results
            .iter()
            .map(|row| {
                let mode: String = row.try_get("mode")?;

                Ok(RouteHistory {
                    id: row.try_get("id")?,
                    start: row.try_get("start_point")?,
                    end: row.try_get("end_point")?,
                    mode: TravelMode::from_name(&mode).ok_or_else(unexpected_error)?,
                    created_at: row.try_get("created_at")?,
                })
            })
            .collect()
    }
}
