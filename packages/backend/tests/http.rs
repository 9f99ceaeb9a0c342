//! HTTP-level tests: serve the real router on an ephemeral port and drive it
//! with reqwest, asserting the status-code contract end to end.

use backend::{db, router, AppState};
use serde_json::{json, Value};
use types::{HostWithAvailabilities, User};

/// Spawn the backend on an ephemeral port and return its base URL.
async fn spawn_backend() -> String {
    let pool = db::connect_memory().await.unwrap();
    db::migrate(&pool).await.unwrap();

    let app = router(AppState { pool });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service()).await.unwrap();
    });

    format!("http://{addr}")
}

async fn seed_user(client: &reqwest::Client, base: &str, id: &str, email: &str) -> User {
    client
        .post(format!("{base}/users"))
        .json(&json!({ "id": id, "name": "Ada", "email": email }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn user_lookup_by_email() {
    let base = spawn_backend().await;
    let client = reqwest::Client::new();

    // No users yet: filter yields an empty array, not an error
    let resp = client
        .get(format!("{base}/users"))
        .query(&[("email", "ada@example.com")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let users: Vec<User> = resp.json().await.unwrap();
    assert!(users.is_empty());

    seed_user(&client, &base, "u1", "ada@example.com").await;

    let users: Vec<User> = client
        .get(format!("{base}/users"))
        .query(&[("email", "ada@example.com")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "ada@example.com");
}

#[tokio::test]
async fn host_crud_over_http() {
    let base = spawn_backend().await;
    let client = reqwest::Client::new();
    seed_user(&client, &base, "u1", "ada@example.com").await;

    // Create
    let resp = client
        .post(format!("{base}/hosts"))
        .json(&json!({
            "user_id": "u1",
            "name": "Canal flat",
            "location": "Amsterdam",
            "amenities": ["wifi", "kitchen"],
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let host: HostWithAvailabilities = resp.json().await.unwrap();
    assert_eq!(host.amenities, vec!["wifi", "kitchen"]);

    // A second host for the same owner conflicts
    let resp = client
        .post(format!("{base}/hosts"))
        .json(&json!({ "user_id": "u1", "name": "Attic", "location": "Utrecht" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 409);

    // Read
    let resp = client
        .get(format!("{base}/hosts/{}", host.host.id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = client
        .get(format!("{base}/hosts/does-not-exist"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());

    // Update
    let resp = client
        .put(format!("{base}/hosts/{}", host.host.id))
        .json(&json!({ "name": "Canal flat", "location": "Amsterdam", "amenities": [] }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let updated: HostWithAvailabilities = resp.json().await.unwrap();
    assert!(updated.amenities.is_empty());

    // Delete
    let resp = client
        .delete(format!("{base}/hosts/{}", host.host.id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);

    let resp = client
        .delete(format!("{base}/hosts/{}", host.host.id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn availability_windows_over_http() {
    let base = spawn_backend().await;
    let client = reqwest::Client::new();
    seed_user(&client, &base, "u1", "ada@example.com").await;

    let host: HostWithAvailabilities = client
        .post(format!("{base}/hosts"))
        .json(&json!({ "user_id": "u1", "name": "Cabin", "location": "Oslo" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // Inverted range is a client error
    let resp = client
        .post(format!("{base}/hosts/{}/availabilities", host.host.id))
        .json(&json!({ "start_date": "2026-07-10", "end_date": "2026-07-01" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // Valid window
    let resp = client
        .post(format!("{base}/hosts/{}/availabilities", host.host.id))
        .json(&json!({ "start_date": "2026-07-01", "end_date": "2026-07-10" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let window: Value = resp.json().await.unwrap();

    // Unknown host
    let resp = client
        .post(format!("{base}/hosts/nope/availabilities"))
        .json(&json!({ "start_date": "2026-07-01", "end_date": "2026-07-10" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    // Remove
    let resp = client
        .delete(format!("{base}/availabilities/{}", window["id"].as_str().unwrap()))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);
}
