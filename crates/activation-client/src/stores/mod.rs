//! Type-safe domain stores wrapping [`ResourceClient`](store_framework::ResourceClient).
//!
//! Each store exposes the operations its resource supports. `get_all`, `get` and
//! `delete` come from [`StoreClient`](store_framework::StoreClient); everything
//! resource-specific is an inherent method.

pub mod campaign_store;
pub mod chat_store;
pub mod comment_store;
pub mod document_store;
pub mod navigation_store;
pub mod size_store;
pub mod staff_store;
pub mod stock_store;
pub mod unit_store;
pub mod warehouse_store;

pub use campaign_store::*;
pub use chat_store::*;
pub use comment_store::*;
pub use document_store::*;
pub use navigation_store::*;
pub use size_store::*;
pub use staff_store::*;
pub use stock_store::*;
pub use unit_store::*;
pub use warehouse_store::*;
