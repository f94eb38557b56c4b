//! Output formatting for fitted ranges.
//!
//! This module handles formatting and outputting range data:
//! - [`spf`] - SPF `ip4:` mechanism string
//! - [`terminal`] - Terminal report with colors

mod spf;
pub mod terminal;

pub use spf::format_spf_mechanisms;
pub use terminal::{format_field, print_summary};
