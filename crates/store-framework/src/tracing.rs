//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging for the whole client.
//!
//! ## What Gets Traced
//!
//! - **Store operations**: one span per call (`get_all`, `update_staff`, ...) with the
//!   resource name as a field.
//! - **Transport**: method, path, status and body length of every round-trip; failed
//!   statuses at `warn`.
//! - **Network monitor**: start, stop and each connectivity change.
//! - **Lifecycle**: context start-up and shutdown.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run -p activation-client
//!
//! # Every request and response
//! RUST_LOG=debug cargo run -p activation-client
//!
//! # Only the transport
//! RUST_LOG=store_framework::transport=debug cargo run -p activation-client
//! ```
//!
//! With `RUST_LOG=debug` a single update shows up as:
//!
//! ```text
//! DEBUG update_staff{id=Text("7")}: Sending request
//! DEBUG Sending request method=PUT path=/api/staffs/7
//! DEBUG Response received method=PUT path=/api/staffs/7 status=200 len=87
//! ```

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
