//! CIDR fitting for address groups.
//!
//! Picks one CIDR block per group. The block starts from the smallest power of two
//! covering the group's span and is widened one bit at a time until it reaches the
//! address just past the span. This is a best-fit heuristic, not a minimal cover, and
//! its output is kept stable on purpose.

use crate::models::{cut_addr, AddressGroup, CidrBlock, MAX_LENGTH};
use std::error::Error;
use std::net::Ipv4Addr;

/// Prefix length whose block size is the next power of two `>= span`.
pub fn initial_prefix(span: u16) -> u8 {
    let span = span.max(1) as u32;
    let ceil_log2 = u32::BITS - (span - 1).leading_zeros();
    MAX_LENGTH - ceil_log2 as u8
}

/// Address `span` steps after `first`, kept inside `first`'s /24.
///
/// Saturates at `.255` instead of wrapping back to `.0`.
pub fn upper_bound(first: Ipv4Addr, span: u16) -> Ipv4Addr {
    let [a, b, c, d] = first.octets();
    let top = (d as u16).saturating_add(span).min(u8::MAX as u16) as u8;
    Ipv4Addr::new(a, b, c, top)
}

/// Fit one CIDR block over `group`.
///
/// # Arguments
/// * `group` - Sorted addresses sharing one third-octet block
///
/// # Returns
/// * `Ok(CidrBlock)` - A block that contains every member of the group
pub fn fit_cidr(group: &AddressGroup) -> Result<CidrBlock, Box<dyn Error>> {
    let first = group.first();
    let span = group.span();
    let upper = upper_bound(first, span);
    let first_octet4 = first.octets()[3];

    let start_prefix = initial_prefix(span);
    let mut block = CidrBlock::new(first, start_prefix)?;

    log::debug!(
        "fit_cidr() first={first} last={last} span={span} start=/{start_prefix} upper={upper}",
        last = group.last()
    );

    for prefix in (1..=start_prefix).rev() {
        if block.addr.octets()[3] >= first_octet4 {
            break;
        }
        block = CidrBlock {
            addr: cut_addr(block.addr, prefix)?,
            prefix,
        };
        log::trace!("fit_cidr() try {block}");
        if block.contains(upper) {
            break;
        }
    }

    if !group.addrs().iter().all(|addr| block.contains(*addr)) {
        return Err(format!(
            "Block {block} does not cover group {}..{}",
            group.first(),
            group.last()
        )
        .into());
    }

    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::group_addresses;

    fn group_of(list: &[&str]) -> AddressGroup {
        let addrs: Vec<Ipv4Addr> = list.iter().map(|s| s.parse().unwrap()).collect();
        let mut groups = group_addresses(&addrs);
        assert_eq!(groups.len(), 1, "fixture must be a single group");
        groups.remove(0)
    }

    fn fit(list: &[&str]) -> String {
        fit_cidr(&group_of(list)).unwrap().to_string()
    }

    #[test]
    fn test_initial_prefix() {
        assert_eq!(initial_prefix(1), 32);
        assert_eq!(initial_prefix(2), 31);
        assert_eq!(initial_prefix(3), 30);
        assert_eq!(initial_prefix(4), 30);
        assert_eq!(initial_prefix(7), 29);
        assert_eq!(initial_prefix(15), 28);
        assert_eq!(initial_prefix(16), 28);
        assert_eq!(initial_prefix(17), 27);
        assert_eq!(initial_prefix(256), 24);
    }

    #[test]
    fn test_upper_bound_saturates() {
        let first = Ipv4Addr::new(10, 0, 0, 200);
        assert_eq!(upper_bound(first, 10), Ipv4Addr::new(10, 0, 0, 210));
        assert_eq!(upper_bound(first, 56), Ipv4Addr::new(10, 0, 0, 255));
        assert_eq!(upper_bound(first, 256), Ipv4Addr::new(10, 0, 0, 255));
    }

    #[test]
    fn test_fit_single_host() {
        assert_eq!(fit(&["1.2.3.4"]), "1.2.3.4/32");
    }

    #[test]
    fn test_fit_reference_groups() {
        assert_eq!(fit(&["94.23.77.73", "94.23.77.74"]), "94.23.77.72/30");
        assert_eq!(
            fit(&[
                "162.221.206.2",
                "162.221.206.3",
                "162.221.206.4",
                "162.221.206.5",
                "162.221.206.6",
                "162.221.206.7",
                "162.221.206.8",
            ]),
            "162.221.206.0/28"
        );
        assert_eq!(
            fit(&["176.31.205.144", "176.31.205.150", "176.31.205.158"]),
            "176.31.205.144/28"
        );
    }

    #[test]
    fn test_fit_aligned_span_is_not_widened() {
        assert_eq!(fit(&["10.0.0.8", "10.0.0.15"]), "10.0.0.8/29");
        assert_eq!(fit(&["10.0.0.0", "10.0.0.255"]), "10.0.0.0/24");
        assert_eq!(fit(&["10.0.0.254", "10.0.0.255"]), "10.0.0.254/31");
    }

    #[test]
    fn test_fit_contiguous_three() {
        assert_eq!(fit(&["10.0.0.1", "10.0.0.2", "10.0.0.3"]), "10.0.0.0/29");
    }

    #[test]
    fn test_fit_near_block_end() {
        // upper bound saturates at .255, so the /30 already reaches it
        assert_eq!(fit(&["10.0.0.253", "10.0.0.255"]), "10.0.0.252/30");
    }

    #[test]
    fn test_fit_always_covers_group() {
        for lo in (0u8..=250).step_by(7) {
            for width in [0u8, 1, 2, 3, 5, 9, 17, 33, 64, 100] {
                let Some(hi) = lo.checked_add(width) else {
                    continue;
                };
                let first = Ipv4Addr::new(192, 0, 2, lo);
                let last = Ipv4Addr::new(192, 0, 2, hi);
                let addrs = if lo == hi { vec![first] } else { vec![first, last] };
                let groups = group_addresses(&addrs);
                let block = fit_cidr(&groups[0]).expect("fit must succeed");
                assert!(
                    block.contains(first) && block.contains(last),
                    "{block} must cover {first}..{last}"
                );
                assert!(block.prefix >= 24, "{block} must stay inside the /24");
            }
        }
    }
}
