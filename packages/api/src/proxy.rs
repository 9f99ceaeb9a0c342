//! # REST proxy routes mounted beside the Dioxus application
//!
//! The web tier exposes a small plain-REST surface for callers that are not
//! Dioxus clients. Each handler adapts an incoming request into a backend
//! call through [`ApiClient`] and maps the outcome onto the HTTP contract:
//!
//! - missing required query parameter → `400 {"error": ...}`
//! - backend has no matching resource → `404 {"error": ...}`
//! - success → `200` with the typed payload
//! - anything unexpected → `500 {"error": ...}`, cause logged
//!
//! No retries and no timeout handling beyond the client defaults.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tracing::error;
use types::User;

use crate::client::{ApiClient, ClientError};

/// Build the proxy router around a backend client.
pub fn router(client: ApiClient) -> Router {
    Router::new()
        .route("/api/user", get(user_lookup))
        .with_state(client)
}

/// `GET /api/user?email=<address>` — look up a single user by email.
async fn user_lookup(
    State(client): State<ApiClient>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(email) = params.get("email").filter(|e| !e.trim().is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "email query parameter is required" })),
        )
            .into_response();
    };

    let users: Result<Vec<User>, ClientError> =
        client.get("/users", &[("email", email.as_str())]).await;

    match users {
        Ok(users) => match users.into_iter().next() {
            Some(user) => (StatusCode::OK, Json(json!({ "user": user }))).into_response(),
            None => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "user not found" })),
            )
                .into_response(),
        },
        Err(e) => {
            error!("User lookup failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "internal error" })),
            )
                .into_response()
        }
    }
}
