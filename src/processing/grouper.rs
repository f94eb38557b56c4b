//! Range grouping of sorted addresses.
//!
//! Splits a sorted address list into runs that share a third-octet block.

use crate::models::{group_key, AddressGroup};
use itertools::Itertools;
use std::net::Ipv4Addr;

/// Partition sorted unique addresses into consecutive [`AddressGroup`]s.
///
/// A new group starts whenever the third octet changes. Neighbours with equal third
/// octets but different upper octets also start a new group, so every group stays
/// inside one /24. The last group is always emitted.
pub fn group_addresses(addrs: &[Ipv4Addr]) -> Vec<AddressGroup> {
    let runs = addrs.iter().group_by(|addr| group_key(**addr));

    let groups: Vec<AddressGroup> = runs
        .into_iter()
        .map(|(_key, mut members)| {
            // group_by never yields an empty run
            let first = members.next().copied().unwrap_or(Ipv4Addr::UNSPECIFIED);
            let mut group = AddressGroup::new(first);
            for addr in members {
                group.push(*addr);
            }
            group
        })
        .collect();

    log::debug!(
        "group_addresses() {} address(es) -> {} group(s)",
        addrs.len(),
        groups.len()
    );
    groups
}
