//! Terminal output utilities.
//!
//! Provides formatting helpers and the per-range report written to stderr.

use crate::processing::RangeSummary;
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Build one report row for a fitted range.
pub fn summary_row(i: usize, range: &RangeSummary) -> String {
    format!(
        "{j},{first},{last},{count},{block},{size},{extra}",
        j = format_field(i + 1, 5),
        first = format_field(range.group.first(), 18),
        last = format_field(range.group.last(), 18),
        count = format_field(range.group.len(), 6),
        block = format_field(range.block, 21),
        size = format_field(range.block.size(), 8),
        extra = format_field(range.over_inclusion(), 8),
    )
}

/// Print the per-range report to stderr, highlighting ranges that include extra addresses.
pub fn print_summary(ranges: &[RangeSummary]) {
    eprintln!(
        r#"  "cnt",             "first",              "last", "ips",               "block",  "size", "extra""#
    );
    for (i, range) in ranges.iter().enumerate() {
        let row = summary_row(i, range);
        if range.over_inclusion() > 0 {
            eprintln!("{}", row.yellow());
        } else {
            eprintln!("{}", row.green());
        }
    }
    let extra: u64 = ranges.iter().map(|r| r.over_inclusion()).sum();
    eprintln!(
        "#{}# {} range(s), {} address(es) outside the input list",
        "NOTE".on_blue(),
        ranges.len(),
        extra
    );
}
