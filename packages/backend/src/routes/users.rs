//! User profile endpoints.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use sqlx::SqlitePool;
use types::User;

use crate::error::ApiError;
use crate::models::UserRow;
use crate::AppState;

pub(crate) fn routes() -> Router<AppState> {
    Router::new().route("/users", get(list_users).post(upsert_user))
}

#[derive(Debug, Deserialize)]
struct UserFilter {
    email: Option<String>,
}

/// Upsert payload. The caller may supply the id so identity stays aligned
/// across services; it is only honored for new rows.
#[derive(Debug, Deserialize)]
pub struct UserUpsert {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: String,
    pub image: Option<String>,
}

async fn list_users(
    State(state): State<AppState>,
    Query(filter): Query<UserFilter>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = find_users(&state.pool, filter.email.as_deref()).await?;
    Ok(Json(users))
}

async fn upsert_user(
    State(state): State<AppState>,
    Json(payload): Json<UserUpsert>,
) -> Result<Json<User>, ApiError> {
    let user = upsert(&state.pool, payload).await?;
    Ok(Json(user))
}

/// List user profiles, optionally filtered by exact email.
pub async fn find_users(pool: &SqlitePool, email: Option<&str>) -> Result<Vec<User>, sqlx::Error> {
    let rows: Vec<UserRow> = match email {
        Some(email) => {
            sqlx::query_as("SELECT * FROM users WHERE email = ? ORDER BY email")
                .bind(email)
                .fetch_all(pool)
                .await?
        }
        None => {
            sqlx::query_as("SELECT * FROM users ORDER BY email")
                .fetch_all(pool)
                .await?
        }
    };

    Ok(rows.into_iter().map(User::from).collect())
}

/// Insert or update a profile keyed by email.
pub async fn upsert(pool: &SqlitePool, payload: UserUpsert) -> Result<User, ApiError> {
    let email = payload.email.trim().to_lowercase();
    if email.is_empty() {
        return Err(ApiError::BadRequest("email is required".into()));
    }

    let id = payload
        .id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    sqlx::query(
        "INSERT INTO users (id, name, email, image) VALUES (?, ?, ?, ?)
         ON CONFLICT (email) DO UPDATE SET name = excluded.name, image = excluded.image",
    )
    .bind(&id)
    .bind(&payload.name)
    .bind(&email)
    .bind(&payload.image)
    .execute(pool)
    .await?;

    let row: UserRow = sqlx::query_as("SELECT * FROM users WHERE email = ?")
        .bind(&email)
        .fetch_one(pool)
        .await?;

    Ok(row.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    async fn pool() -> SqlitePool {
        let pool = db::connect_memory().await.unwrap();
        db::migrate(&pool).await.unwrap();
        pool
    }

    fn profile(email: &str) -> UserUpsert {
        UserUpsert {
            id: None,
            name: Some("Ada".to_string()),
            email: email.to_string(),
            image: None,
        }
    }

    #[tokio::test]
    async fn upsert_then_find_by_email() {
        let pool = pool().await;

        let created = upsert(&pool, profile("ada@example.com")).await.unwrap();
        assert_eq!(created.email, "ada@example.com");

        let found = find_users(&pool, Some("ada@example.com")).await.unwrap();
        assert_eq!(found, vec![created]);

        assert!(find_users(&pool, Some("nobody@example.com"))
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn upsert_is_keyed_by_email() {
        let pool = pool().await;

        let first = upsert(&pool, profile("ada@example.com")).await.unwrap();
        let second = upsert(
            &pool,
            UserUpsert {
                id: Some("some-other-id".to_string()),
                name: Some("Ada Lovelace".to_string()),
                email: "ada@example.com".to_string(),
                image: Some("https://example.com/ada.png".to_string()),
            },
        )
        .await
        .unwrap();

        // Same row updated, original id preserved
        assert_eq!(second.id, first.id);
        assert_eq!(second.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(find_users(&pool, None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn upsert_keeps_caller_supplied_id_for_new_rows() {
        let pool = pool().await;

        let created = upsert(
            &pool,
            UserUpsert {
                id: Some("auth-id-1".to_string()),
                name: None,
                email: "grace@example.com".to_string(),
                image: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(created.id, "auth-id-1");
    }

    #[tokio::test]
    async fn upsert_rejects_empty_email() {
        let pool = pool().await;
        let result = upsert(&pool, profile("  ")).await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }
}
