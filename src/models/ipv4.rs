//! IPv4 address encoding and CIDR block utilities.
//!
//! Provides [`CidrBlock`] for representing a network range as `addr/prefix`,
//! along with the big-endian `u32` conversions the range fitting relies on.

use std::error::Error;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Numeric value of an address, most significant octet first.
pub fn addr_to_u32(addr: Ipv4Addr) -> u32 {
    u32::from_be_bytes(addr.octets())
}

/// Inverse of [`addr_to_u32`].
pub fn u32_to_addr(bits: u32) -> Ipv4Addr {
    let [a, b, c, d] = bits.to_be_bytes();
    Ipv4Addr::new(a, b, c, d)
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use spf_ip4_summary::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0).unwrap(), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let mask = get_cidr_mask(len)?;
    Ok(u32_to_addr(addr_to_u32(addr) & mask))
}

/// Calculate the broadcast (highest) address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let mask = get_cidr_mask(len)?;
    Ok(u32_to_addr((addr_to_u32(addr) & mask) | !mask))
}

/// A network range in CIDR notation.
///
/// `addr` is always stored as the network address of the block.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct CidrBlock {
    /// The network address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub prefix: u8,
}

impl CidrBlock {
    /// Build the block of length `prefix` that contains `addr`.
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<CidrBlock, Box<dyn Error>> {
        Ok(CidrBlock {
            addr: cut_addr(addr, prefix)?,
            prefix,
        })
    }

    /// A single host block (`/32`).
    pub fn host(addr: Ipv4Addr) -> CidrBlock {
        CidrBlock {
            addr,
            prefix: MAX_LENGTH,
        }
    }

    /// Lowest (network) address in the block.
    pub fn lo(&self) -> Ipv4Addr {
        self.addr
    }

    /// Highest (broadcast) address in the block.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.prefix)
            .unwrap_or_else(|e| panic!("Error calculating broadcast address for {}: {}", self, e))
    }

    /// Number of addresses the block spans.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix)
    }

    /// Every address in the block, ascending.
    pub fn hosts(&self) -> impl Iterator<Item = Ipv4Addr> {
        (addr_to_u32(self.lo())..=addr_to_u32(self.hi())).map(u32_to_addr)
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.lo() <= addr && addr <= self.hi()
    }

    /// Render as an SPF `ip4:` mechanism.
    ///
    /// A `/32` suffix is left out, RFC 7208 section 5.6 allows a bare host address.
    pub fn to_spf_mechanism(&self) -> String {
        if self.prefix == MAX_LENGTH {
            format!("ip4:{}", self.addr)
        } else {
            format!("ip4:{}/{}", self.addr, self.prefix)
        }
    }
}

impl FromStr for CidrBlock {
    type Err = Box<dyn Error>;

    /// Parse `a.b.c.d/p`, or a bare address as a `/32`.
    fn from_str(addr_cidr: &str) -> Result<CidrBlock, Self::Err> {
        let addr_cidr = addr_cidr.trim();
        let (addr, prefix) = match addr_cidr.split_once('/') {
            Some((addr, prefix)) => (addr, prefix),
            None => (addr_cidr, "32"),
        };
        let addr: Ipv4Addr = addr
            .parse()
            .map_err(|_| format!("Invalid address {addr}"))?;
        let prefix: u8 = prefix
            .parse()
            .map_err(|_| format!("Invalid prefix length {prefix}"))?;
        CidrBlock::new(addr, prefix)
    }
}

impl std::fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl PartialEq for CidrBlock {
    fn eq(&self, other: &CidrBlock) -> bool {
        self.addr == other.addr && self.prefix == other.prefix
    }
}

impl PartialOrd for CidrBlock {
    fn partial_cmp(&self, other: &CidrBlock) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
