//! # Credential-store user model
//!
//! [`AuthUser`] is the complete row from the `users` table in `auth.db`:
//! profile fields, the Argon2 `password_hash`, and audit timestamps. It
//! derives [`sqlx::FromRow`] so it loads straight out of queries and never
//! crosses the server boundary.
//!
//! [`AuthUser::to_profile`] projects the row into the shared [`types::User`]
//! shape — the client-safe subset without the hash or timestamps — which is
//! what every server function returns.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use types::User;

/// Full user record from the credential database.
#[derive(Debug, Clone, FromRow)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub image: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AuthUser {
    /// Convert to the client-safe profile shape.
    pub fn to_profile(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            image: self.image.clone(),
        }
    }
}
