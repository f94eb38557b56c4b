//! Address de-duplication and ordering.
//!
//! Handles removing repeated addresses and sorting them by numeric value.

use crate::models::addr_to_u32;
use itertools::Itertools;
use std::net::Ipv4Addr;

/// De-duplicate addresses, keeping the first occurrence of each.
///
/// # Arguments
/// * `addrs` - Parsed addresses, possibly with repeats
///
/// # Returns
/// The unique addresses in their input order
pub fn de_duplicate_addresses(addrs: Vec<Ipv4Addr>) -> Vec<Ipv4Addr> {
    let before = addrs.len();
    let unique: Vec<Ipv4Addr> = addrs.into_iter().unique().collect();
    if unique.len() != before {
        log::debug!(
            "de_duplicate_addresses() dropped {} repeated address(es)",
            before - unique.len()
        );
    }
    unique
}

/// Sort addresses ascending by their big-endian `u32` value.
pub fn sort_addresses(addrs: &mut [Ipv4Addr]) {
    addrs.sort_unstable_by_key(|a| addr_to_u32(*a));
}

/// De-duplicate then sort, the input expected by the range grouper.
pub fn unique_sorted_addresses(addrs: Vec<Ipv4Addr>) -> Vec<Ipv4Addr> {
    let mut addrs = de_duplicate_addresses(addrs);
    sort_addresses(&mut addrs);
    addrs
}
