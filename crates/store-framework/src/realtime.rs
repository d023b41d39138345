//! # Realtime Channel
//!
//! Append-only writes to a hosted document collection (used by chat). There is no read
//! path and no subscription here; the backend's own delivery guarantees are all there
//! is.

use crate::error::ApiError;
use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{debug, warn};

#[async_trait]
pub trait RealtimeChannel: Send + Sync {
    /// Append `document` as a new record in `collection`. Resolves once acknowledged.
    async fn append(&self, collection: &str, document: Map<String, Value>) -> Result<(), ApiError>;
}

/// A [`RealtimeChannel`] that POSTs each document to `<endpoint>/<collection>`.
#[derive(Clone, Debug)]
pub struct HttpRealtimeChannel {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRealtimeChannel {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Self { client, endpoint }
    }
}

#[async_trait]
impl RealtimeChannel for HttpRealtimeChannel {
    async fn append(&self, collection: &str, document: Map<String, Value>) -> Result<(), ApiError> {
        let url = format!("{}/{}", self.endpoint, collection);
        debug!(collection, fields = document.len(), "Appending document");

        let resp = self.client.post(&url).json(&document).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            warn!(collection, status = status.as_u16(), "Append rejected");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }
}
