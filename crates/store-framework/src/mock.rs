//! # Mock Framework & Testing Guide
//!
//! Test doubles for the two network seams, [`Transport`] and [`RealtimeChannel`]. They
//! let you test stores and the code around them without a server.
//!
//! ## When to use which
//!
//! | Double | Style | Use Case |
//! |--------|-------|----------|
//! | [`MockTransport`] | Expectation queue | Scripted exchanges, `verify()` at the end |
//! | [`create_mock_transport`] | Channel + responder | Inspect a request, answer by hand |
//! | [`RecordingChannel`] | Recorder | Assert what a chat store appended |
//!
//! ## Pattern 0: Scripted responses
//!
//! ```rust,ignore
//! let mock = Arc::new(MockTransport::new());
//! mock.expect(Method::Delete, "/api/units/42").return_ok(Value::Null);
//!
//! let units = UnitStore::new(ResourceClient::new(mock.clone()));
//! units.delete("42".into()).await?;
//!
//! mock.verify(); // Ensures all expectations were met
//! ```
//!
//! ## Pattern 1: Hand-driven responses
//!
//! Useful for ordering tests: hold two requests open and answer them in reverse.
//!
//! ```rust,ignore
//! let (transport, mut receiver) = create_mock_transport(10);
//! let client = ResourceClient::<Unit>::new(transport);
//!
//! let task = tokio::spawn(async move { client.get("1".into()).await });
//! let (request, responder) = expect_request(&mut receiver).await.expect("Expected request");
//! assert_eq!(request.path, "/api/units/1");
//! responder.send(Ok(json!({ "id": 1, "name": "Unit 1" }))).unwrap();
//! ```
//!
//! ## Testing Failure Scenarios
//!
//! Errors are injected with `return_err`, e.g. a 500 from the API:
//!
//! ```rust,ignore
//! mock.expect(Method::Get, "/api/sizes")
//!     .return_err(ApiError::Status { status: 500, message: "boom".into() });
//! ```

use crate::error::ApiError;
use crate::realtime::RealtimeChannel;
use crate::request::{ApiRequest, Method};
use crate::transport::Transport;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

struct Expectation {
    method: Method,
    path: String,
    response: Result<Value, ApiError>,
}

/// What a `MockTransport` saw, kept for assertions after the fact.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub json: Option<Value>,
    /// File name, for multipart uploads.
    pub upload: Option<String>,
}

/// A transport with expectation tracking for fluent testing.
///
/// Requests must arrive in the order the expectations were declared; anything else
/// panics with a description of the mismatch.
#[derive(Default)]
pub struct MockTransport {
    expectations: Mutex<VecDeque<Expectation>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    /// Creates a new mock transport with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a request with this method and path.
    pub fn expect(&self, method: Method, path: impl Into<String>) -> ExpectationBuilder<'_> {
        ExpectationBuilder {
            transport: self,
            method,
            path: path.into(),
        }
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let upload = match &request.body {
            crate::request::RequestBody::Upload(upload) => Some(upload.file_name.clone()),
            _ => None,
        };
        self.requests.lock().unwrap().push(RecordedRequest {
            method: request.method,
            path: request.path.clone(),
            json: request.json().cloned(),
            upload,
        });

        let expectation = self.expectations.lock().unwrap().pop_front();
        match expectation {
            Some(exp) if exp.method == request.method && exp.path == request.path => exp.response,
            Some(exp) => panic!(
                "Unexpected request {} {}, expected {} {}",
                request.method, request.path, exp.method, exp.path
            ),
            None => panic!("Unexpected request {} {}", request.method, request.path),
        }
    }
}

/// Builder for one expectation.
pub struct ExpectationBuilder<'a> {
    transport: &'a MockTransport,
    method: Method,
    path: String,
}

impl ExpectationBuilder<'_> {
    /// Sets the expectation to return a successful response body.
    pub fn return_ok(self, body: Value) {
        self.push(Ok(body));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ApiError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Value, ApiError>) {
        self.transport
            .expectations
            .lock()
            .unwrap()
            .push_back(Expectation {
                method: self.method,
                path: self.path,
                response,
            });
    }
}

// =============================================================================
// CHANNEL-DRIVEN TRANSPORT
// =============================================================================

/// Where a test sends the response for one request.
pub type Responder = oneshot::Sender<Result<Value, ApiError>>;

/// A request waiting for the test to answer it.
#[derive(Debug)]
pub struct PendingRequest {
    pub request: ApiRequest,
    pub respond_to: Responder,
}

/// A transport that forwards every request to a channel the test controls.
pub struct ChannelTransport {
    sender: mpsc::Sender<PendingRequest>,
}

#[async_trait]
impl Transport for ChannelTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(PendingRequest {
                request,
                respond_to,
            })
            .await
            .map_err(|_| ApiError::TransportClosed)?;
        response.await.map_err(|_| ApiError::TransportDropped)?
    }
}

/// Creates a transport and the receiver its requests arrive on.
///
/// # Testing Strategy
/// Instead of scripting responses up front, the test pulls each request off the
/// receiver, asserts on it, and answers through the responder when it chooses. Dropping
/// the responder makes the caller see [`ApiError::TransportDropped`].
pub fn create_mock_transport(
    buffer_size: usize,
) -> (Arc<ChannelTransport>, mpsc::Receiver<PendingRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (Arc::new(ChannelTransport { sender }), receiver)
}

/// Helper to take the next request and its responder.
pub async fn expect_request(
    receiver: &mut mpsc::Receiver<PendingRequest>,
) -> Option<(ApiRequest, Responder)> {
    receiver
        .recv()
        .await
        .map(|pending| (pending.request, pending.respond_to))
}

// =============================================================================
// REALTIME
// =============================================================================

/// A realtime channel that keeps every appended document in memory.
#[derive(Default)]
pub struct RecordingChannel {
    documents: Mutex<Vec<(String, Map<String, Value>)>>,
    fail_with: Mutex<Option<ApiError>>,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next append fail with `error` instead of recording.
    pub fn fail_next(&self, error: ApiError) {
        *self.fail_with.lock().unwrap() = Some(error);
    }

    /// `(collection, document)` pairs in append order.
    pub fn documents(&self) -> Vec<(String, Map<String, Value>)> {
        self.documents.lock().unwrap().clone()
    }
}

#[async_trait]
impl RealtimeChannel for RecordingChannel {
    async fn append(&self, collection: &str, document: Map<String, Value>) -> Result<(), ApiError> {
        if let Some(error) = self.fail_with.lock().unwrap().take() {
            return Err(error);
        }
        self.documents
            .lock()
            .unwrap()
            .push((collection.to_string(), document));
        Ok(())
    }
}
