//! Server-side models for the credential store.

#[cfg(feature = "server")]
mod user;

#[cfg(feature = "server")]
pub use user::AuthUser;
