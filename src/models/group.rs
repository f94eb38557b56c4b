//! A run of sorted addresses sharing one third-octet block.

use std::net::Ipv4Addr;

/// Addresses from one /24 block, ascending and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressGroup {
    addrs: Vec<Ipv4Addr>,
}

/// Grouping key: the first three octets, the third being the one that varies between
/// neighbouring groups of a sorted list.
pub fn group_key(addr: Ipv4Addr) -> [u8; 3] {
    let [a, b, c, _] = addr.octets();
    [a, b, c]
}

impl AddressGroup {
    pub(crate) fn new(first: Ipv4Addr) -> AddressGroup {
        AddressGroup { addrs: vec![first] }
    }

    pub(crate) fn push(&mut self, addr: Ipv4Addr) {
        debug_assert_eq!(group_key(addr), self.key());
        debug_assert!(addr > self.last());
        self.addrs.push(addr);
    }

    pub fn first(&self) -> Ipv4Addr {
        self.addrs[0]
    }

    pub fn last(&self) -> Ipv4Addr {
        self.addrs[self.addrs.len() - 1]
    }

    /// Third octet shared by every member.
    pub fn third_octet(&self) -> u8 {
        self.first().octets()[2]
    }

    pub fn key(&self) -> [u8; 3] {
        group_key(self.first())
    }

    /// Inclusive distance between the last octets of the first and last member (1..=256).
    pub fn span(&self) -> u16 {
        let lo = self.first().octets()[3] as u16;
        let hi = self.last().octets()[3] as u16;
        hi.saturating_sub(lo) + 1
    }

    pub fn len(&self) -> usize {
        self.addrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }

    pub fn addrs(&self) -> &[Ipv4Addr] {
        &self.addrs
    }
}
