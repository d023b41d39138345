//! # Generic Requests
//!
//! This module defines the request types passed from a `ResourceClient` to a
//! [`Transport`](crate::Transport). A request is plain data: a verb, a path relative to
//! the API base URL, and a body. Anything transport-specific the caller wants to pass
//! along (extra headers, a progress callback) travels inside [`TransportConfig`]
//! untouched.

use bytes::Bytes;
use serde_json::Value;
use std::fmt::{self, Debug, Display};
use std::sync::Arc;
use std::time::Duration;

/// The four verbs the remote API understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A single request against the remote API.
#[derive(Debug)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API base URL, always starting with `/api/`.
    pub path: String,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: RequestBody::Empty,
        }
    }

    pub fn with_json(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    pub fn with_upload(mut self, upload: Upload) -> Self {
        self.body = RequestBody::Upload(upload);
        self
    }

    /// The JSON body, if this request carries one.
    pub fn json(&self) -> Option<&Value> {
        match &self.body {
            RequestBody::Json(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Upload(Upload),
}

/// A file sent as `multipart/form-data`, plus any extra text fields.
#[derive(Debug)]
pub struct Upload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
    pub fields: Vec<(String, String)>,
    pub config: TransportConfig,
}

/// Bytes handed to the network so far for one upload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadProgress {
    pub sent: u64,
    pub total: u64,
}

pub type ProgressCallback = Arc<dyn Fn(UploadProgress) + Send + Sync>;

/// Caller-supplied transport options, forwarded as-is.
#[derive(Clone, Default)]
pub struct TransportConfig {
    pub headers: Vec<(String, String)>,
    pub timeout: Option<Duration>,
    pub on_progress: Option<ProgressCallback>,
}

impl TransportConfig {
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn on_progress(
        mut self,
        callback: impl Fn(UploadProgress) + Send + Sync + 'static,
    ) -> Self {
        self.on_progress = Some(Arc::new(callback));
        self
    }
}

impl Debug for TransportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportConfig")
            .field("headers", &self.headers)
            .field("timeout", &self.timeout)
            .field("on_progress", &self.on_progress.is_some())
            .finish()
    }
}
