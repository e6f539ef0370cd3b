//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and asserting on responses.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use dnd_api::{create_app, create_app_state};
use dnd_common::AppConfig;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server backed by PostgreSQL from the environment
    pub async fn start() -> Result<Self> {
        Self::start_with_config(postgres_config()?).await
    }

    /// Start a server backed by the seeded in-memory store
    pub async fn start_in_memory() -> Result<Self> {
        Self::start_with_config(memory_config()?).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config).await?;
        let app = create_app(state);

        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Configuration for the in-memory backend
pub fn memory_config() -> Result<AppConfig> {
    AppConfig::from_lookup(|key: &str| (key == "STORAGE_BACKEND").then(|| "memory".to_string()))
        .map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Configuration for the PostgreSQL backend
pub fn postgres_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    AppConfig::from_lookup(|key: &str| match key {
        "STORAGE_BACKEND" => Some("postgres".to_string()),
        _ => std::env::var(key).ok(),
    })
    .map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Check whether a database is available for PostgreSQL-backed tests
pub fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status and return the error code from the body
pub async fn assert_error(response: Response, expected_status: StatusCode) -> Result<String> {
    let body: ErrorEnvelope = assert_json(response, expected_status).await?;
    Ok(body.error.code)
}

#[derive(serde::Deserialize)]
struct ErrorEnvelope {
    error: ErrorPayload,
}

#[derive(serde::Deserialize)]
struct ErrorPayload {
    code: String,
}
