//! # Transport
//!
//! The [`Transport`] trait is the seam between stores and the network. Stores build an
//! [`ApiRequest`] and hand it over; the transport returns the decoded JSON body or an
//! [`ApiError`]. Production code uses [`HttpTransport`]; tests use the doubles in
//! [`mock`](crate::mock).
//!
//! A transport performs exactly one round-trip per request. It does not retry,
//! deduplicate or cache.

use crate::error::ApiError;
use crate::request::{ApiRequest, RequestBody, Upload, UploadProgress};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Chunk size used when streaming uploads, so progress is reported while sending.
const UPLOAD_CHUNK_SIZE: usize = 64 * 1024;

#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request and return the response body as JSON (`Value::Null` when empty).
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError>;
}

/// A [`Transport`] backed by a shared `reqwest::Client`.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Build a transport whose client gives up on requests after `timeout`.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn upload_form(upload: Upload) -> Result<Form, ApiError> {
        let total = upload.bytes.len() as u64;
        let progress = upload.config.on_progress.clone();
        let chunks: Vec<Bytes> = upload
            .bytes
            .chunks(UPLOAD_CHUNK_SIZE)
            .map(Bytes::copy_from_slice)
            .collect();

        let mut sent = 0u64;
        let stream = futures::stream::iter(chunks.into_iter().map(move |chunk| {
            sent += chunk.len() as u64;
            if let Some(callback) = &progress {
                callback(UploadProgress { sent, total });
            }
            Ok::<Bytes, std::io::Error>(chunk)
        }));

        let part = Part::stream_with_length(reqwest::Body::wrap_stream(stream), total)
            .file_name(upload.file_name)
            .mime_str(&upload.content_type)?;

        let form = upload
            .fields
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value));
        Ok(form.part("file", part))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, request.path);
        let method = request.method;
        debug!(%method, path = %request.path, "Sending request");

        let mut builder = self.client.request(method.into(), &url);
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(body) => builder.json(&body),
            RequestBody::Upload(upload) => {
                for (name, value) in &upload.config.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                if let Some(timeout) = upload.config.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.multipart(Self::upload_form(upload)?)
            }
        };

        let resp = builder.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            warn!(%method, path = %request.path, status = status.as_u16(), "Request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = resp.bytes().await?;
        debug!(
            %method,
            path = %request.path,
            status = status.as_u16(),
            len = body.len(),
            "Response received"
        );
        if body.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&body)?)
    }
}
