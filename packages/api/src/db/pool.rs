//! Auth database connection pool using the OnceCell pattern.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tokio::sync::OnceCell;

static POOL: OnceCell<SqlitePool> = OnceCell::const_new();

/// Get or initialize the credential-database connection pool.
/// Uses the AUTH_DATABASE_URL environment variable, defaulting to a local
/// `auth.db` file which is created on first use.
pub async fn get_pool() -> Result<&'static SqlitePool, sqlx::Error> {
    POOL.get_or_try_init(|| async {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("AUTH_DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://auth.db".to_string());

        let options = SqliteConnectOptions::from_str(&database_url)?.create_if_missing(true);

        SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
    })
    .await
}
