//! HTTP client for the bank API plus the scripted demo run by `bank-client`.

use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

pub mod demo;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api/banks";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("no bank id given and the service lists no banks")]
    NoBank,
}

/// Status code and decoded JSON body of one call. An empty body decodes to `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone)]
pub struct BankClient {
    http: reqwest::Client,
    base_url: String,
}

impl BankClient {
    /// `base_url` points at the collection, e.g. `http://localhost:5000/api/banks`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http: reqwest::Client::new(), base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }

    pub async fn create(&self, name: &str, location: &str) -> Result<ApiResponse, ClientError> {
        let req = self.http.post(&self.base_url).json(&json!({"name": name, "location": location}));
        send(req).await
    }

    pub async fn list(&self) -> Result<ApiResponse, ClientError> {
        send(self.http.get(&self.base_url)).await
    }

    pub async fn get(&self, id: &str) -> Result<ApiResponse, ClientError> {
        send(self.http.get(self.item_url(id))).await
    }

    pub async fn update(&self, id: &str, name: &str, location: &str) -> Result<ApiResponse, ClientError> {
        let req = self.http.put(self.item_url(id)).json(&json!({"name": name, "location": location}));
        send(req).await
    }

    pub async fn delete(&self, id: &str) -> Result<ApiResponse, ClientError> {
        send(self.http.delete(self.item_url(id))).await
    }
}

async fn send(req: reqwest::RequestBuilder) -> Result<ApiResponse, ClientError> {
    let resp = req.send().await.map_err(|e| ClientError::Network(e.to_string()))?;
    let status = resp.status().as_u16();
    let bytes = resp.bytes().await.map_err(|e| ClientError::Network(e.to_string()))?;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).map_err(|e| ClientError::Parse(e.to_string()))?
    };
    debug!(status, "bank api response");
    Ok(ApiResponse { status, body })
}
