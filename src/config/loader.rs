// src/config/loader.rs

use std::fs;
use std::path::Path;

use crate::config::model::{PlantConfig, RawPlantConfig};
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw `RawPlantConfig`.
///
/// This only performs TOML deserialization; it does **not** check value
/// ranges. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawPlantConfig> {
    let contents = fs::read_to_string(path.as_ref())?;
    let config: RawPlantConfig = toml::from_str(&contents)?;
    Ok(config)
}

/// Load a configuration file from path and run validation.
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Rejects zero lines/iterations/deadline, an inverted delay range and a
///   failure probability outside `0.0..=1.0`.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<PlantConfig> {
    let raw_config = load_from_path(&path)?;
    PlantConfig::try_from(raw_config)
}
