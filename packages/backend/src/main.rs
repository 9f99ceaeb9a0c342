use backend::{db, router, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("backend=info")),
        )
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://stay.db".to_string());

    let pool = db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    db::migrate(&pool).await.expect("Failed to run migrations");

    let app = router(AppState { pool });

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3001".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Backend listening on {}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
