//! JSON input configuration.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::Path;

/// Precision used by the reference driver when none is given.
pub const DEFAULT_PRECISION: u32 = 40;

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

/// Addresses to summarise plus the precision passed to the converter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InputConfig {
    /// Passed through to [`crate::convert_ips_to_short_mode`].
    #[serde(default = "default_precision")]
    pub precision: u32,
    /// Dotted-quad address strings, validated during conversion.
    pub addresses: Vec<String>,
}

impl InputConfig {
    pub fn new(addresses: Vec<String>) -> InputConfig {
        InputConfig {
            precision: DEFAULT_PRECISION,
            addresses,
        }
    }
}

/// Read an [`InputConfig`] from a JSON file.
///
/// # Returns
/// * `Ok(InputConfig)` - The parsed configuration
/// * `Err` - If the file is missing, unreadable, or invalid JSON; parse errors name the
///   failing JSON path
pub fn read_config(path: &str) -> Result<InputConfig, Box<dyn Error>> {
    if !Path::new(path).exists() {
        return Err(format!("Config file does not exist: {path}").into());
    }
    log::info!("Reading config file: {path}");
    let json =
        std::fs::read_to_string(path).map_err(|e| format!("Error reading config {path}: {e}"))?;

    let mut json_deserializer = serde_json::Deserializer::from_str(&json);
    let config: InputConfig = serde_path_to_error::deserialize(&mut json_deserializer)
        .map_err(|e| format!("Error parsing config {path} at '{}': {}", e.path(), e.inner()))?;

    Ok(config)
}
