//! Address range processing logic.
//!
//! This module contains the pipeline stages between parsing and formatting:
//! - [`dedup`] - De-duplication and numeric ordering of addresses
//! - [`grouper`] - Splitting sorted addresses into third-octet groups
//! - [`fitter`] - Choosing one CIDR block per group
//! - [`summary`] - Running the stages together

mod dedup;
mod fitter;
mod grouper;
mod summary;

// Re-export public functions
pub use dedup::{de_duplicate_addresses, sort_addresses, unique_sorted_addresses};
pub use fitter::{fit_cidr, initial_prefix, upper_bound};
pub use grouper::group_addresses;
pub use summary::{summarize, RangeSummary};
