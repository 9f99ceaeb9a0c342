//! Host endpoints.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use sqlx::SqlitePool;
use types::amenities::encode_amenities;
use types::{Availability, HostWithAvailabilities};

use crate::error::ApiError;
use crate::models::{AvailabilityRow, HostRow};
use crate::AppState;

pub(crate) fn routes() -> Router<AppState> {
    Router::new()
        .route("/hosts", get(list_hosts_handler).post(create_host))
        .route(
            "/hosts/{id}",
            get(get_host).put(update_host).delete(delete_host),
        )
}

#[derive(Debug, Deserialize)]
struct HostFilter {
    user_id: Option<String>,
}

/// Create/update payload. `user_id` is required on create and ignored on
/// update — hosts never change owner.
#[derive(Debug, Deserialize)]
pub struct HostPayload {
    pub user_id: Option<String>,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub image: Option<String>,
}

impl HostPayload {
    fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::BadRequest("name is required".into()));
        }
        if self.location.trim().is_empty() {
            return Err(ApiError::BadRequest("location is required".into()));
        }
        Ok(())
    }
}

async fn list_hosts_handler(
    State(state): State<AppState>,
    Query(filter): Query<HostFilter>,
) -> Result<Json<Vec<HostWithAvailabilities>>, ApiError> {
    let hosts = list_hosts(&state.pool, filter.user_id.as_deref()).await?;
    Ok(Json(hosts))
}

async fn get_host(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HostWithAvailabilities>, ApiError> {
    match fetch_host(&state.pool, &id).await? {
        Some(host) => Ok(Json(host)),
        None => Err(ApiError::NotFound),
    }
}

async fn create_host(
    State(state): State<AppState>,
    Json(payload): Json<HostPayload>,
) -> Result<(StatusCode, Json<HostWithAvailabilities>), ApiError> {
    let host = create(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(host)))
}

async fn update_host(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<HostPayload>,
) -> Result<Json<HostWithAvailabilities>, ApiError> {
    let host = update(&state.pool, &id, payload).await?;
    Ok(Json(host))
}

async fn delete_host(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    remove(&state.pool, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List hosts with their availabilities, optionally filtered by owner.
pub async fn list_hosts(
    pool: &SqlitePool,
    user_id: Option<&str>,
) -> Result<Vec<HostWithAvailabilities>, sqlx::Error> {
    let rows: Vec<HostRow> = match user_id {
        Some(user_id) => {
            sqlx::query_as("SELECT * FROM hosts WHERE user_id = ? ORDER BY name")
                .bind(user_id)
                .fetch_all(pool)
                .await?
        }
        None => {
            sqlx::query_as("SELECT * FROM hosts ORDER BY name")
                .fetch_all(pool)
                .await?
        }
    };

    let availability_rows: Vec<AvailabilityRow> =
        sqlx::query_as("SELECT * FROM availabilities ORDER BY start_date")
            .fetch_all(pool)
            .await?;

    let mut by_host: HashMap<String, Vec<Availability>> = HashMap::new();
    for row in availability_rows {
        by_host
            .entry(row.host_id.clone())
            .or_default()
            .push(row.into());
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let availabilities = by_host.remove(&row.id).unwrap_or_default();
            row.into_host(availabilities)
        })
        .collect())
}

/// Fetch a single host with its availabilities.
pub async fn fetch_host(
    pool: &SqlitePool,
    id: &str,
) -> Result<Option<HostWithAvailabilities>, sqlx::Error> {
    let row: Option<HostRow> = sqlx::query_as("SELECT * FROM hosts WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let availability_rows: Vec<AvailabilityRow> =
        sqlx::query_as("SELECT * FROM availabilities WHERE host_id = ? ORDER BY start_date")
            .bind(id)
            .fetch_all(pool)
            .await?;

    let availabilities = availability_rows.into_iter().map(Into::into).collect();
    Ok(Some(row.into_host(availabilities)))
}

/// Create a host for the payload's owner.
pub async fn create(
    pool: &SqlitePool,
    payload: HostPayload,
) -> Result<HostWithAvailabilities, ApiError> {
    payload.validate()?;

    let Some(user_id) = payload.user_id.as_deref().filter(|id| !id.is_empty()) else {
        return Err(ApiError::BadRequest("user_id is required".into()));
    };

    let owner: Option<(String,)> = sqlx::query_as("SELECT id FROM users WHERE id = ?")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    if owner.is_none() {
        return Err(ApiError::BadRequest("unknown user".into()));
    }

    let existing: Option<(String,)> = sqlx::query_as("SELECT id FROM hosts WHERE user_id = ?")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    if existing.is_some() {
        return Err(ApiError::Conflict("user already has a host".into()));
    }

    let id = uuid::Uuid::new_v4().to_string();
    sqlx::query(
        "INSERT INTO hosts (id, user_id, name, location, image, amenities) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(user_id)
    .bind(payload.name.trim())
    .bind(payload.location.trim())
    .bind(&payload.image)
    .bind(encode_amenities(&payload.amenities))
    .execute(pool)
    .await?;

    fetch_host(pool, &id).await?.ok_or(ApiError::NotFound)
}

/// Update an existing host.
pub async fn update(
    pool: &SqlitePool,
    id: &str,
    payload: HostPayload,
) -> Result<HostWithAvailabilities, ApiError> {
    payload.validate()?;

    let result = sqlx::query(
        "UPDATE hosts SET name = ?, location = ?, image = ?, amenities = ? WHERE id = ?",
    )
    .bind(payload.name.trim())
    .bind(payload.location.trim())
    .bind(&payload.image)
    .bind(encode_amenities(&payload.amenities))
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound);
    }

    fetch_host(pool, id).await?.ok_or(ApiError::NotFound)
}

/// Delete a host and its availabilities.
pub async fn remove(pool: &SqlitePool, id: &str) -> Result<(), ApiError> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM availabilities WHERE host_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM hosts WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound);
    }

    tx.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::routes::{availabilities, users};

    async fn pool_with_user(user_id: &str) -> SqlitePool {
        let pool = db::connect_memory().await.unwrap();
        db::migrate(&pool).await.unwrap();
        users::upsert(
            &pool,
            users::UserUpsert {
                id: Some(user_id.to_string()),
                name: Some("Ada".to_string()),
                email: format!("{user_id}@example.com"),
                image: None,
            },
        )
        .await
        .unwrap();
        pool
    }

    fn draft(user_id: &str) -> HostPayload {
        HostPayload {
            user_id: Some(user_id.to_string()),
            name: "Canal flat".to_string(),
            location: "Amsterdam".to_string(),
            amenities: vec!["wifi".to_string(), "kitchen".to_string()],
            image: None,
        }
    }

    #[tokio::test]
    async fn create_read_update_delete_round_trip() {
        let pool = pool_with_user("u1").await;

        let created = create(&pool, draft("u1")).await.unwrap();
        assert_eq!(created.host.name, "Canal flat");
        assert_eq!(created.amenities, vec!["wifi", "kitchen"]);

        let fetched = fetch_host(&pool, &created.host.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);

        let updated = update(
            &pool,
            &created.host.id,
            HostPayload {
                user_id: None,
                name: "Canal flat (renovated)".to_string(),
                location: "Amsterdam".to_string(),
                amenities: vec!["wifi".to_string()],
                image: Some("https://example.com/flat.jpg".to_string()),
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.host.name, "Canal flat (renovated)");
        assert_eq!(updated.amenities, vec!["wifi"]);

        remove(&pool, &created.host.id).await.unwrap();
        assert!(fetch_host(&pool, &created.host.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_filters_by_owner() {
        let pool = pool_with_user("u1").await;
        users::upsert(
            &pool,
            users::UserUpsert {
                id: Some("u2".to_string()),
                name: None,
                email: "u2@example.com".to_string(),
                image: None,
            },
        )
        .await
        .unwrap();

        create(&pool, draft("u1")).await.unwrap();
        create(&pool, draft("u2")).await.unwrap();

        assert_eq!(list_hosts(&pool, None).await.unwrap().len(), 2);

        let mine = list_hosts(&pool, Some("u2")).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].host.user_id, "u2");

        assert!(list_hosts(&pool, Some("u3")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn second_host_for_same_user_conflicts() {
        let pool = pool_with_user("u1").await;

        create(&pool, draft("u1")).await.unwrap();
        let result = create(&pool, draft("u1")).await;
        assert!(matches!(result, Err(ApiError::Conflict(_))));
    }

    #[tokio::test]
    async fn create_validates_payload() {
        let pool = pool_with_user("u1").await;

        let mut missing_name = draft("u1");
        missing_name.name = "  ".to_string();
        assert!(matches!(
            create(&pool, missing_name).await,
            Err(ApiError::BadRequest(_))
        ));

        let mut unknown_owner = draft("u1");
        unknown_owner.user_id = Some("nobody".to_string());
        assert!(matches!(
            create(&pool, unknown_owner).await,
            Err(ApiError::BadRequest(_))
        ));

        let mut no_owner = draft("u1");
        no_owner.user_id = None;
        assert!(matches!(
            create(&pool, no_owner).await,
            Err(ApiError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn update_and_delete_unknown_host_is_not_found() {
        let pool = pool_with_user("u1").await;

        assert!(matches!(
            update(&pool, "nope", draft("u1")).await,
            Err(ApiError::NotFound)
        ));
        assert!(matches!(remove(&pool, "nope").await, Err(ApiError::NotFound)));
    }

    #[tokio::test]
    async fn deleting_a_host_removes_its_availabilities() {
        let pool = pool_with_user("u1").await;
        let host = create(&pool, draft("u1")).await.unwrap();

        availabilities::add(
            &pool,
            &host.host.id,
            "2026-06-01".parse().unwrap(),
            "2026-06-14".parse().unwrap(),
        )
        .await
        .unwrap();

        remove(&pool, &host.host.id).await.unwrap();

        let leftover: Vec<crate::models::AvailabilityRow> =
            sqlx::query_as("SELECT * FROM availabilities")
                .fetch_all(&pool)
                .await
                .unwrap();
        assert!(leftover.is_empty());
    }
}
