//! Domain models for SPF range summarisation.
//!
//! - [`CidrBlock`] - IPv4 network range with CIDR notation support
//! - [`AddressGroup`] - sorted addresses sharing one third-octet block

mod group;
mod ipv4;

// Re-export public types
pub use group::{group_key, AddressGroup};
pub use ipv4::{
    addr_to_u32, broadcast_addr, cut_addr, get_cidr_mask, u32_to_addr, CidrBlock, MAX_LENGTH,
};
