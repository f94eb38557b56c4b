//! SPF mechanism string formatting.

use crate::models::CidrBlock;

/// Render blocks as space separated `ip4:` mechanisms.
///
/// Host blocks are written without `/32`. The result has no leading or trailing
/// whitespace, so an empty input gives an empty string.
pub fn format_spf_mechanisms(blocks: &[CidrBlock]) -> String {
    let mut out = String::new();
    for block in blocks {
        out.push(' ');
        out.push_str(&block.to_spf_mechanism());
    }
    out.trim().to_string()
}
