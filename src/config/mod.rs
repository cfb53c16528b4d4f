// src/config/mod.rs

//! Configuration loading and validation for plantsim.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate run shape and work parameters (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{PlantConfig, RawPlantConfig, RunConfig, RunSection, WorkProfile, WorkSection};
