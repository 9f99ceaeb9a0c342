//! # Database module — credential store connection pool
//!
//! Provides the shared SQLite connection pool for `auth.db`, used by every
//! authentication server function. Gated behind `#[cfg(feature = "server")]`
//! so client (WASM) builds never pull in SQLx or Tokio networking code.
//!
//! The pool is a lazy, process-wide singleton backed by a
//! [`tokio::sync::OnceCell`]: the first call to [`get_pool`] reads
//! `AUTH_DATABASE_URL` (via `dotenvy`), opens the pool, and caches it for all
//! subsequent callers.

#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use pool::get_pool;
