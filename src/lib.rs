//! Summarise IPv4 address lists into SPF `ip4:` mechanisms.
//!
//! Addresses are de-duplicated, sorted, grouped by their third octet and each group is
//! fitted to one CIDR block.
//!
//! ```
//! let spf = spf_ip4_summary::convert_ips_to_short_mode(["10.0.0.1", "10.0.0.2", "10.0.0.3"], 40)?;
//! assert_eq!(spf, "ip4:10.0.0.0/29");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod input;
pub mod models;
pub mod output;
pub mod processing;

use processing::{summarize, RangeSummary};
use std::error::Error;

pub use input::parse_addresses;

/// Convert address strings to a space separated list of `ip4:` mechanisms.
///
/// Entries that are not IPv4 addresses are skipped. `precision` is accepted for
/// interface compatibility; the range fitting does not use it yet.
///
/// # Returns
/// * `Ok(String)` - The mechanisms, empty when no valid address was given
/// * `Err` - If a fitted block fails to cover its group
pub fn convert_ips_to_short_mode<I, S>(ips: I, precision: u32) -> Result<String, Box<dyn Error>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    log::debug!("convert_ips_to_short_mode() precision={precision} (not applied)");
    let ranges = summarize_ips(ips)?;
    Ok(format_ranges(&ranges))
}

/// Parse and summarise address strings, keeping the group behind each block.
pub fn summarize_ips<I, S>(ips: I) -> Result<Vec<RangeSummary>, Box<dyn Error>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let addrs = parse_addresses(ips);
    log::info!("#Start summarize_ips() with {} valid address(es)", addrs.len());
    summarize(addrs)
}

/// Format fitted ranges as an SPF mechanism string.
pub fn format_ranges(ranges: &[RangeSummary]) -> String {
    let blocks: Vec<models::CidrBlock> = ranges.iter().map(|r| r.block).collect();
    output::format_spf_mechanisms(&blocks)
}
