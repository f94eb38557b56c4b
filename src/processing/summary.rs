//! Group-to-block summary used by the formatter and the terminal report.

use super::{fit_cidr, group_addresses, unique_sorted_addresses};
use crate::models::{AddressGroup, CidrBlock};
use std::error::Error;
use std::net::Ipv4Addr;

/// One fitted range: the group and the block chosen for it.
#[derive(Debug, Clone)]
pub struct RangeSummary {
    pub group: AddressGroup,
    pub block: CidrBlock,
}

impl RangeSummary {
    /// Addresses inside the block that were not in the input.
    pub fn over_inclusion(&self) -> u64 {
        self.block.size().saturating_sub(self.group.len() as u64)
    }
}

/// Run dedup, sort, grouping and fitting over parsed addresses.
///
/// # Returns
/// * `Ok(Vec<RangeSummary>)` - One entry per group, in ascending address order
pub fn summarize(addrs: Vec<Ipv4Addr>) -> Result<Vec<RangeSummary>, Box<dyn Error>> {
    let addrs = unique_sorted_addresses(addrs);
    log::info!("# Got unique address count = {}", addrs.len());

    let mut ranges = Vec::new();
    for group in group_addresses(&addrs) {
        let block = fit_cidr(&group)?;
        log::debug!("{}..{} -> {}", group.first(), group.last(), block);
        ranges.push(RangeSummary { group, block });
    }
    Ok(ranges)
}
