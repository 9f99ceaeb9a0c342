//! # API crate — shared fullstack server functions for Stay With Friends
//!
//! This crate is the backbone of the fullstack architecture. It defines every
//! Dioxus server function the web frontend calls, along with the supporting
//! modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Email + password authentication: session key, Argon2 hashing |
//! | [`client`] | `server` | Typed reqwest client for the backend data API |
//! | [`db`] | — | SQLite connection pool for the credential store (lazy `OnceCell` singleton) |
//! | [`models`] | — | Credential rows ([`models::AuthUser`]) and their client-safe projection |
//! | [`proxy`] | `server` | Plain REST routes (`/api/user`) mounted beside the Dioxus app |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated
//! with `#[get(...)]` or `#[post(...)]` and compiled twice: once with full
//! server logic (behind `#[cfg(feature = "server")]`) and once as a thin
//! client stub that simply forwards the call over HTTP.
//!
//! - **Authentication**: `get_current_user`, `register`, `login_password`, `logout`
//! - **Browsing**: `list_hosts`, `get_host`
//! - **Host management**: `get_my_host`, `save_host`, `delete_my_host`,
//!   `add_availability`, `remove_availability`

use dioxus::prelude::*;

use types::{Availability, HostDraft, HostWithAvailabilities, User};

pub mod auth;
#[cfg(feature = "server")]
pub mod client;
pub mod db;
pub mod models;
#[cfg(feature = "server")]
pub mod proxy;

/// Look up the caller's credential row from the session, or fail.
#[cfg(feature = "server")]
async fn require_user(
    session: &tower_sessions::Session,
) -> Result<models::AuthUser, ServerFnError> {
    use crate::db::get_pool;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Err(ServerFnError::new("Not authenticated"));
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<models::AuthUser> = sqlx::query_as("SELECT * FROM users WHERE id = ?")
        .bind(&user_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    user.ok_or_else(|| ServerFnError::new("Not authenticated"))
}

/// Fetch the host owned by the given user, if any.
#[cfg(feature = "server")]
async fn host_owned_by(user_id: &str) -> Result<Option<HostWithAvailabilities>, ServerFnError> {
    let hosts: Vec<HostWithAvailabilities> = client::backend()
        .await
        .get("/hosts", &[("user_id", user_id)])
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(hosts.into_iter().next())
}

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<User>, ServerFnError> {
    use crate::db::get_pool;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<models::AuthUser> = sqlx::query_as("SELECT * FROM users WHERE id = ?")
        .bind(&user_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_profile()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<User>, ServerFnError> {
    Ok(None)
}

/// Register a new user with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/register", session: tower_sessions::Session)]
pub async fn register(
    email: String,
    password: String,
    name: String,
) -> Result<User, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();
    let name = name.trim().to_string();

    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("Invalid email address"));
    }
    if password.len() < 8 {
        return Err(ServerFnError::new(
            "Password must be at least 8 characters",
        ));
    }
    if name.is_empty() {
        return Err(ServerFnError::new("Name is required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // Check if user already exists
    let existing: Option<(i64,)> = sqlx::query_as("SELECT 1 as n FROM users WHERE email = ?")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new("An account with this email already exists"));
    }

    let password_hash = auth::hash_password(&password).map_err(ServerFnError::new)?;

    let user_id = uuid::Uuid::new_v4().to_string();

    // Publish the profile to the backend first so host ownership can join on
    // this id. Re-registering after a failure here just upserts again.
    let _: User = client::backend()
        .await
        .post(
            "/users",
            &serde_json::json!({ "id": user_id, "name": name, "email": email }),
        )
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let now = chrono::Utc::now();
    sqlx::query(
        "INSERT INTO users (id, email, name, image, password_hash, created_at, updated_at)
         VALUES (?, ?, ?, NULL, ?, ?, ?)",
    )
    .bind(&user_id)
    .bind(&email)
    .bind(&name)
    .bind(&password_hash)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: models::AuthUser = sqlx::query_as("SELECT * FROM users WHERE id = ?")
        .bind(&user_id)
        .fetch_one(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.clone())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_profile())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(
    email: String,
    password: String,
    name: String,
) -> Result<User, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login-password", session: tower_sessions::Session)]
pub async fn login_password(email: String, password: String) -> Result<User, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<models::AuthUser> = sqlx::query_as("SELECT * FROM users WHERE email = ?")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let valid = auth::verify_password(&password, &user.password_hash).map_err(ServerFnError::new)?;

    if !valid {
        return Err(ServerFnError::new("Invalid email or password"));
    }

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.clone())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_profile())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login-password")]
pub async fn login_password(email: String, password: String) -> Result<User, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// List every published host for the browse page.
#[cfg(feature = "server")]
#[get("/api/hosts")]
pub async fn list_hosts() -> Result<Vec<HostWithAvailabilities>, ServerFnError> {
    client::backend()
        .await
        .get("/hosts", &[])
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/hosts")]
pub async fn list_hosts() -> Result<Vec<HostWithAvailabilities>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Fetch a single host by id.
#[cfg(feature = "server")]
#[get("/api/hosts/:host_id")]
pub async fn get_host(host_id: String) -> Result<Option<HostWithAvailabilities>, ServerFnError> {
    use crate::client::ClientError;

    match client::backend()
        .await
        .get(&format!("/hosts/{host_id}"), &[])
        .await
    {
        Ok(host) => Ok(Some(host)),
        Err(ClientError::NotFound) => Ok(None),
        Err(e) => Err(ServerFnError::new(e.to_string())),
    }
}

#[cfg(not(feature = "server"))]
#[get("/api/hosts/:host_id")]
pub async fn get_host(host_id: String) -> Result<Option<HostWithAvailabilities>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Get the authenticated user's own host, if they have published one.
#[cfg(feature = "server")]
#[get("/api/my-host", session: tower_sessions::Session)]
pub async fn get_my_host() -> Result<Option<HostWithAvailabilities>, ServerFnError> {
    let user = require_user(&session).await?;
    host_owned_by(&user.id).await
}

#[cfg(not(feature = "server"))]
#[get("/api/my-host")]
pub async fn get_my_host() -> Result<Option<HostWithAvailabilities>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create or update the authenticated user's host from a form draft.
#[cfg(feature = "server")]
#[post("/api/my-host", session: tower_sessions::Session)]
pub async fn save_host(draft: HostDraft) -> Result<HostWithAvailabilities, ServerFnError> {
    let user = require_user(&session).await?;

    if draft.name.trim().is_empty() {
        return Err(ServerFnError::new("Name is required"));
    }
    if draft.location.trim().is_empty() {
        return Err(ServerFnError::new("Location is required"));
    }

    let backend = client::backend().await;
    let existing = host_owned_by(&user.id).await?;

    let host = match existing {
        Some(host) => backend
            .put(
                &format!("/hosts/{}", host.host.id),
                &serde_json::json!({
                    "name": draft.name,
                    "location": draft.location,
                    "amenities": draft.amenities,
                    "image": draft.image,
                }),
            )
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?,
        None => backend
            .post(
                "/hosts",
                &serde_json::json!({
                    "user_id": user.id,
                    "name": draft.name,
                    "location": draft.location,
                    "amenities": draft.amenities,
                    "image": draft.image,
                }),
            )
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?,
    };

    Ok(host)
}

#[cfg(not(feature = "server"))]
#[post("/api/my-host")]
pub async fn save_host(draft: HostDraft) -> Result<HostWithAvailabilities, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete the authenticated user's host and its availabilities.
#[cfg(feature = "server")]
#[post("/api/my-host/delete", session: tower_sessions::Session)]
pub async fn delete_my_host() -> Result<(), ServerFnError> {
    let user = require_user(&session).await?;

    let Some(host) = host_owned_by(&user.id).await? else {
        return Err(ServerFnError::new("No host to delete"));
    };

    client::backend()
        .await
        .delete(&format!("/hosts/{}", host.host.id))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/my-host/delete")]
pub async fn delete_my_host() -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Add an availability window to the authenticated user's host.
#[cfg(feature = "server")]
#[post("/api/my-host/availabilities", session: tower_sessions::Session)]
pub async fn add_availability(
    start_date: String,
    end_date: String,
) -> Result<Availability, ServerFnError> {
    let user = require_user(&session).await?;

    let Some(host) = host_owned_by(&user.id).await? else {
        return Err(ServerFnError::new("Publish your host first"));
    };

    let start: chrono::NaiveDate = start_date
        .parse()
        .map_err(|_| ServerFnError::new("Invalid start date"))?;
    let end: chrono::NaiveDate = end_date
        .parse()
        .map_err(|_| ServerFnError::new("Invalid end date"))?;

    client::backend()
        .await
        .post(
            &format!("/hosts/{}/availabilities", host.host.id),
            &serde_json::json!({ "start_date": start, "end_date": end }),
        )
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/my-host/availabilities")]
pub async fn add_availability(
    start_date: String,
    end_date: String,
) -> Result<Availability, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Remove an availability window from the authenticated user's host.
#[cfg(feature = "server")]
#[post("/api/my-host/availabilities/delete", session: tower_sessions::Session)]
pub async fn remove_availability(id: String) -> Result<(), ServerFnError> {
    let user = require_user(&session).await?;

    // Only windows belonging to the caller's own host may be removed.
    let Some(host) = host_owned_by(&user.id).await? else {
        return Err(ServerFnError::new("No host published"));
    };
    if !host.availabilities.iter().any(|a| a.id == id) {
        return Err(ServerFnError::new("Availability not found"));
    }

    client::backend()
        .await
        .delete(&format!("/availabilities/{id}"))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/my-host/availabilities/delete")]
pub async fn remove_availability(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
