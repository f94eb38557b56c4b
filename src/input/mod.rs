//! Input loading.
//!
//! - [`config`] - JSON config with addresses and precision
//! - [`address_list`] - Address parsing and plain-text lists

mod address_list;
mod config;

use std::error::Error;
use std::path::Path;

pub use address_list::{
    extract_addresses, parse_address, parse_addresses, parse_entry, read_address_list,
    MIN_EXPAND_PREFIX,
};
pub use config::{read_config, InputConfig, DEFAULT_PRECISION};

/// Bundled reference list, used when neither an argument nor `SPF_IP4_INPUT` names one.
pub const DEFAULT_INPUT: &str = "data/reference_ips.json";

/// Pick the input path: explicit argument, then `SPF_IP4_INPUT`, then [`DEFAULT_INPUT`].
pub fn resolve_input_path(arg: Option<String>) -> String {
    arg.or_else(|| std::env::var("SPF_IP4_INPUT").ok())
        .unwrap_or_else(|| DEFAULT_INPUT.to_string())
}

/// Read `SPF_IP4_PRECISION` if set.
pub fn precision_from_env() -> Result<Option<u32>, Box<dyn Error>> {
    match std::env::var("SPF_IP4_PRECISION") {
        Ok(value) => {
            let precision = value
                .trim()
                .parse::<u32>()
                .map_err(|e| format!("Invalid SPF_IP4_PRECISION {value:?}: {e}"))?;
            Ok(Some(precision))
        }
        Err(_) => Ok(None),
    }
}

/// Load an input file, as JSON config for `.json` and as an address list otherwise.
pub fn load_input(path: &str) -> Result<InputConfig, Box<dyn Error>> {
    let is_json = Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        read_config(path)
    } else {
        Ok(InputConfig::new(read_address_list(path)?))
    }
}
