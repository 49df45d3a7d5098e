use async_trait::async_trait;
use hyper::client::HttpConnector;
use hyper::{Body, Client, Method, Request};
use hyper_rustls::HttpsConnector;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::config::LedgerConfig;
use crate::domain::CallDescriptor;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Transport error: {0}")]
    Transport(#[from] hyper::Error),

    #[error("Failed to build request: {0}")]
    Request(#[from] hyper::http::Error),

    #[error("Node rejected request: HTTP {status}: {body}")]
    NodeRejected { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Read-only access to the ledger.
///
/// Implementations submit exactly one request per call and never retry.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    async fn view(&self, call: &CallDescriptor) -> Result<Vec<Value>, LedgerError>;
}

/// Aptos fullnode REST client. One instance is built by the host and shared.
pub struct AptosNodeClient {
    client: Client<HttpsConnector<HttpConnector>>,
    base_url: String,
}

impl AptosNodeClient {
    pub fn new(config: &LedgerConfig) -> Self {
        let https = hyper_rustls::HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .build();

        Self {
            client: Client::builder().build(https),
            base_url: config.base_url().to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl LedgerClient for AptosNodeClient {
    async fn view(&self, call: &CallDescriptor) -> Result<Vec<Value>, LedgerError> {
        let body = call.to_json().to_string();
        debug!("POST {}/view {}", self.base_url, body);

        let request = Request::builder()
            .method(Method::POST)
            .uri(format!("{}/view", self.base_url))
            .header("content-type", "application/json")
            .header("accept", "application/json")
            .body(Body::from(body))?;

        let response = self.client.request(request).await?;
        let status = response.status();
        let bytes = hyper::body::to_bytes(response.into_body()).await?;

        if !status.is_success() {
            return Err(LedgerError::NodeRejected {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        serde_json::from_slice::<Vec<Value>>(&bytes)
            .map_err(|e| LedgerError::MalformedResponse(e.to_string()))
    }
}
