// src/plant/mod.rs

//! Production plant core.
//!
//! - [`line`]: one production line executing one probabilistic unit of work
//!   and containing its own failures.
//! - [`workload`]: the `Workload` trait supplying delays and failure
//!   decisions, and the shared `RandomWorkload` used in production.
//! - [`tasks`]: execution handles and the never-pruned accumulated task set.
//! - [`manager`]: the iteration loop (fan-out, whole-set gate, final drain).
//! - [`supervisor`]: the deadline race around a manager run.

pub mod line;
pub mod manager;
pub mod supervisor;
pub mod tasks;
pub mod workload;

pub use line::Line;
pub use manager::Manager;
pub use supervisor::Supervisor;
pub use tasks::{AccumulatedTaskSet, ExecutionHandle, Resolution};
pub use workload::{RandomWorkload, Workload};
