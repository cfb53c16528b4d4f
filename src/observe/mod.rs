// src/observe/mod.rs

//! Observability layer.
//!
//! - [`event`] defines the records the core emits.
//! - [`logger`] provides the `Logger` trait the core calls into and the
//!   `TracingLogger` used in production.

pub mod event;
pub mod logger;

pub use event::PlantEvent;
pub use logger::{Logger, TracingLogger};
