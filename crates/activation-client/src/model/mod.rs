//! Pure data structures (DTOs) implementing the [`Resource`](store_framework::Resource) trait.
//!
//! Field names are camelCase on the wire. Update payloads only carry the fields that
//! are set.

pub mod campaign;
pub mod comment;
pub mod document;
pub mod message;
pub mod navigation;
pub mod size;
pub mod staff;
pub mod stock;
pub mod unit;
pub mod warehouse;

pub use campaign::*;
pub use comment::*;
pub use document::*;
pub use message::*;
pub use navigation::*;
pub use size::*;
pub use staff::*;
pub use stock::*;
pub use unit::*;
pub use warehouse::*;
