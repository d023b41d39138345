//! # Store Framework
//!
//! This crate provides the building blocks for a client-side state layer that sits
//! between UI code and a remote REST API. It is deliberately domain-free: the
//! application crate supplies the records, this crate supplies the plumbing.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Resource Layer** ([`Resource`]) - What a record looks like and where it lives
//! 2. **Client Layer** ([`ResourceClient`], [`StoreClient`]) - Typed CRUD calls
//! 3. **Transport Layer** ([`Transport`]) - How a request reaches the network
//!
//! A store is a thin, typed pass-through: one method call, one request, the server's
//! answer (or error) handed back unchanged. No validation, no retries, no caching
//! except where a store explicitly keeps an [`Observable`].
//!
//! ## Cross-cutting utilities
//!
//! - [`Debounced`] - collapse bursts of calls into one delayed execution
//! - [`NetworkMonitor`] / [`NetworkStatus`] - observable online/offline state
//! - [`Notifier`] - success/error/warning/info events for a presentation layer
//! - [`RealtimeChannel`] - append-only writes to a hosted collection
//!
//! ## Defining a Resource
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use store_framework::{RecordId, Resource, ResourceClient};
//!
//! #[derive(Debug, Deserialize)]
//! struct Unit {
//!     id: RecordId,
//!     name: String,
//! }
//!
//! #[derive(Debug, Serialize)]
//! struct UnitCreate {
//!     name: String,
//! }
//!
//! impl Resource for Unit {
//!     const NAME: &'static str = "units";
//!     type Create = UnitCreate;
//!     type Update = UnitCreate;
//! }
//!
//! assert_eq!(ResourceClient::<Unit>::base_path(), "/api/units");
//! assert_eq!(ResourceClient::<Unit>::item_path(42), "/api/units/42");
//! ```
//!
//! ## Concurrency Model
//!
//! - Every store operation is a future; awaiting it suspends only the caller
//! - Calls on the same store are **not** serialized, responses may arrive in any order
//! - Shared mutable state (network flag, cached lists) lives behind `watch` channels
//!
//! ## Testing
//!
//! See the [`mock`] module for a scripted [`mock::MockTransport`], a channel-driven
//! transport for hand-answered requests, and a recording realtime channel.

pub mod client;
pub mod client_trait;
pub mod debounce;
pub mod error;
pub mod mock;
pub mod network;
pub mod notify;
pub mod observable;
pub mod realtime;
pub mod request;
pub mod resource;
pub mod tracing;
pub mod transport;

// Re-export core types for convenience
pub use client::ResourceClient;
pub use client_trait::StoreClient;
pub use debounce::Debounced;
pub use error::ApiError;
pub use network::{
    ConnectivityBridge, ConnectivityEvent, ConnectivitySource, NetworkMonitor, NetworkStatus,
};
pub use notify::{Notification, Notifier, Severity};
pub use observable::Observable;
pub use realtime::{HttpRealtimeChannel, RealtimeChannel};
pub use request::{ApiRequest, Method, RequestBody, TransportConfig, Upload, UploadProgress};
pub use resource::{RecordId, Resource};
pub use transport::{HttpTransport, Transport};
