//! # Activation Client Library
//!
//! The client-side state layer of the activation tracking app: typed stores for every
//! REST resource, the chat write path, formatting helpers and the wiring that ties
//! them together. Exposed as a library for the demo binary and integration tests.

pub mod config;
pub mod helpers;
pub mod lifecycle;
pub mod model;
pub mod stores;
