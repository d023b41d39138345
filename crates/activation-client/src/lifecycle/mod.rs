//! # Application Lifecycle & Wiring
//!
//! Stores are simple on their own; wiring them to one shared transport, the realtime
//! channel, the notifier, the network monitor and the session is what this module does.
//!
//! ## The AppContext Pattern
//!
//! [`AppContext`] is created once at start-up and handed (or cloned piecewise) to
//! whatever UI code needs it:
//!
//! ```rust,ignore
//! let config = Config::from_env()?;
//! let bridge = ConnectivityBridge::new(true);
//! let ctx = AppContext::from_config(&config, &bridge)?;
//!
//! let units = ctx.units.get_all().await?;
//! if let Err(e) = ctx.staff.update_staff(id, update).await {
//!     ctx.notifier.error(e.to_string());
//! }
//!
//! ctx.shutdown().await?;
//! ```
//!
//! Every store holds a clone of the same `Arc<dyn Transport>`, so tests build the
//! context over a [`MockTransport`](store_framework::mock::MockTransport) and a
//! [`RecordingChannel`](store_framework::mock::RecordingChannel) with no network.
//!
//! ## Shutdown
//!
//! The only background work owned by the context is the network monitor loop.
//! [`AppContext::shutdown`] stops it and waits for the task to end. Requests still in
//! flight are not cancelled; their futures belong to the callers.

pub mod app_context;

pub use app_context::*;
