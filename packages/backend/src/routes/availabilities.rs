//! Availability endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, post};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::SqlitePool;
use types::Availability;

use crate::error::ApiError;
use crate::models::AvailabilityRow;
use crate::AppState;

pub(crate) fn routes() -> Router<AppState> {
    Router::new()
        .route("/hosts/{id}/availabilities", post(create_availability))
        .route("/availabilities/{id}", delete(delete_availability))
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityPayload {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

async fn create_availability(
    State(state): State<AppState>,
    Path(host_id): Path<String>,
    Json(payload): Json<AvailabilityPayload>,
) -> Result<(StatusCode, Json<Availability>), ApiError> {
    let availability = add(&state.pool, &host_id, payload.start_date, payload.end_date).await?;
    Ok((StatusCode::CREATED, Json(availability)))
}

async fn delete_availability(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    remove(&state.pool, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add an availability window to a host.
pub async fn add(
    pool: &SqlitePool,
    host_id: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Availability, ApiError> {
    if start_date > end_date {
        return Err(ApiError::BadRequest(
            "start_date must not be after end_date".into(),
        ));
    }

    let host: Option<(String,)> = sqlx::query_as("SELECT id FROM hosts WHERE id = ?")
        .bind(host_id)
        .fetch_optional(pool)
        .await?;
    if host.is_none() {
        return Err(ApiError::NotFound);
    }

    let id = uuid::Uuid::new_v4().to_string();
    sqlx::query(
        "INSERT INTO availabilities (id, host_id, start_date, end_date) VALUES (?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(host_id)
    .bind(start_date)
    .bind(end_date)
    .execute(pool)
    .await?;

    let row: AvailabilityRow = sqlx::query_as("SELECT * FROM availabilities WHERE id = ?")
        .bind(&id)
        .fetch_one(pool)
        .await?;

    Ok(row.into())
}

/// Remove an availability window.
pub async fn remove(pool: &SqlitePool, id: &str) -> Result<(), ApiError> {
    let result = sqlx::query("DELETE FROM availabilities WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::routes::{hosts, users};

    async fn pool_with_host() -> (SqlitePool, String) {
        let pool = db::connect_memory().await.unwrap();
        db::migrate(&pool).await.unwrap();
        users::upsert(
            &pool,
            users::UserUpsert {
                id: Some("u1".to_string()),
                name: None,
                email: "u1@example.com".to_string(),
                image: None,
            },
        )
        .await
        .unwrap();
        let host = hosts::create(
            &pool,
            hosts::HostPayload {
                user_id: Some("u1".to_string()),
                name: "Cabin".to_string(),
                location: "Oslo".to_string(),
                amenities: vec![],
                image: None,
            },
        )
        .await
        .unwrap();
        (pool, host.host.id)
    }

    #[tokio::test]
    async fn add_and_remove_window() {
        let (pool, host_id) = pool_with_host().await;

        let window = add(
            &pool,
            &host_id,
            "2026-07-01".parse().unwrap(),
            "2026-07-10".parse().unwrap(),
        )
        .await
        .unwrap();
        assert_eq!(window.host_id, host_id);

        let host = hosts::fetch_host(&pool, &host_id).await.unwrap().unwrap();
        assert_eq!(host.availabilities, vec![window.clone()]);

        remove(&pool, &window.id).await.unwrap();
        let host = hosts::fetch_host(&pool, &host_id).await.unwrap().unwrap();
        assert!(host.availabilities.is_empty());
    }

    #[tokio::test]
    async fn windows_come_back_sorted_by_start_date() {
        let (pool, host_id) = pool_with_host().await;

        add(
            &pool,
            &host_id,
            "2026-09-01".parse().unwrap(),
            "2026-09-05".parse().unwrap(),
        )
        .await
        .unwrap();
        add(
            &pool,
            &host_id,
            "2026-07-01".parse().unwrap(),
            "2026-07-10".parse().unwrap(),
        )
        .await
        .unwrap();

        let host = hosts::fetch_host(&pool, &host_id).await.unwrap().unwrap();
        let starts: Vec<String> = host
            .availabilities
            .iter()
            .map(|a| a.start_date.to_string())
            .collect();
        assert_eq!(starts, vec!["2026-07-01", "2026-09-01"]);
    }

    #[tokio::test]
    async fn inverted_range_is_rejected() {
        let (pool, host_id) = pool_with_host().await;

        let result = add(
            &pool,
            &host_id,
            "2026-07-10".parse().unwrap(),
            "2026-07-01".parse().unwrap(),
        )
        .await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    async fn unknown_host_or_window_is_not_found() {
        let (pool, _host_id) = pool_with_host().await;

        let result = add(
            &pool,
            "nope",
            "2026-07-01".parse().unwrap(),
            "2026-07-10".parse().unwrap(),
        )
        .await;
        assert!(matches!(result, Err(ApiError::NotFound)));

        assert!(matches!(remove(&pool, "nope").await, Err(ApiError::NotFound)));
    }
}
