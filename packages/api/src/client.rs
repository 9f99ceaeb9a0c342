//! # Typed HTTP client for the backend data API
//!
//! Every call from the web tier to the backend goes through [`ApiClient`]:
//! it owns the base URL, performs the request with reqwest, and translates
//! the response into either the deserialized shared type or a
//! [`ClientError`]. Upstream 404s get their own variant so route handlers
//! can map "not found" without inspecting status codes themselves.
//!
//! Server functions share a process-wide lazy instance via [`backend`],
//! mirroring the connection-pool singleton in [`crate::db`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::OnceCell;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("resource not found")]
    NotFound,
    #[error("backend returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("backend request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Thin typed wrapper around reqwest for the backend REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Build a client from the BACKEND_URL environment variable, defaulting
    /// to the local development backend.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let base_url = std::env::var("BACKEND_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:3001".to_string());
        Self::new(base_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let response = self.http.get(self.url(path)).query(query).send().await?;
        Self::decode(response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self.http.put(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let response = self.http.delete(self.url(path)).send().await?;
        match response.status() {
            s if s.is_success() => Ok(()),
            reqwest::StatusCode::NOT_FOUND => Err(ClientError::NotFound),
            s => Err(ClientError::Status(s)),
        }
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        match response.status() {
            s if s.is_success() => Ok(response.json().await?),
            reqwest::StatusCode::NOT_FOUND => Err(ClientError::NotFound),
            s => Err(ClientError::Status(s)),
        }
    }
}

static BACKEND: OnceCell<ApiClient> = OnceCell::const_new();

/// Get or initialize the shared backend client.
pub async fn backend() -> &'static ApiClient {
    BACKEND.get_or_init(|| async { ApiClient::from_env() }).await
}
