//! # Backend data API for Stay With Friends
//!
//! An axum REST service over SQLite that owns the application data: public
//! user profiles, hosts, and their availability windows. The web tier never
//! touches this database directly — it goes through the HTTP surface defined
//! here, re-typing responses with the shared [`types`] crate at the boundary.
//!
//! ## Routes
//!
//! | Method & path | Purpose |
//! |---------------|---------|
//! | `GET /users?email=` | List users, optionally filtered by email |
//! | `POST /users` | Upsert a user profile by email |
//! | `GET /hosts?user_id=` | List hosts (with amenities + availabilities) |
//! | `POST /hosts` | Create a host (one per user) |
//! | `GET /hosts/{id}` | Fetch a single host |
//! | `PUT /hosts/{id}` | Update a host |
//! | `DELETE /hosts/{id}` | Delete a host and its availabilities |
//! | `POST /hosts/{id}/availabilities` | Add an availability window |
//! | `DELETE /availabilities/{id}` | Remove an availability window |

use axum::Router;
use sqlx::SqlitePool;

pub mod db;
pub mod error;
pub mod models;
pub mod routes;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

/// Build the full backend router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(routes::users::routes())
        .merge(routes::hosts::routes())
        .merge(routes::availabilities::routes())
        .with_state(state)
}
