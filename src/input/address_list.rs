//! Address parsing and plain-text address lists.
//!
//! Reads any text that mentions dotted-quad addresses: one address per line, an SPF
//! record, or a DNS zone dump. CIDR ranges such as `ip4:10.0.0.0/29` are expanded to
//! their hosts so re-summarising a record keeps every authorised sender.

use crate::models::CidrBlock;
use regex::Regex;
use std::error::Error;
use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;
use std::sync::OnceLock;

/// Shortest prefix expanded into hosts; a /16 yields 65536 addresses.
pub const MIN_EXPAND_PREFIX: u8 = 16;

/// Regex matching dotted-quad candidates with an optional prefix, validated later by
/// [`parse_entry`].
static DOTTED_QUAD_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_dotted_quad_regex() -> &'static Regex {
    DOTTED_QUAD_REGEX.get_or_init(|| {
        Regex::new(r"\b(?:\d{1,3}\.){3}\d{1,3}(?:/\d{1,2})?\b").expect("Invalid Regex")
    })
}

/// Parse one address.
///
/// IPv4-mapped IPv6 text (`::ffff:a.b.c.d`) is reduced to its IPv4 part. Anything else
/// that is not IPv4 gives `None`.
pub fn parse_address(input: &str) -> Option<Ipv4Addr> {
    match input.trim().parse::<IpAddr>() {
        Ok(IpAddr::V4(addr)) => Some(addr),
        Ok(IpAddr::V6(addr)) => addr.to_ipv4_mapped(),
        Err(_) => None,
    }
}

/// Parse one entry: a single address, or `a.b.c.d/p` expanded to every host it covers.
///
/// Invalid entries and ranges wider than [`MIN_EXPAND_PREFIX`] give an empty list and a
/// warning.
pub fn parse_entry(input: &str) -> Vec<Ipv4Addr> {
    if !input.contains('/') {
        return match parse_address(input) {
            Some(addr) => vec![addr],
            None => {
                log::warn!("Skipping invalid IPv4 address: {input:?}");
                vec![]
            }
        };
    }
    match input.parse::<CidrBlock>() {
        Ok(block) if block.prefix >= MIN_EXPAND_PREFIX => block.hosts().collect(),
        Ok(block) => {
            log::warn!(
                "Skipping {block}: ranges wider than /{MIN_EXPAND_PREFIX} are not expanded"
            );
            vec![]
        }
        Err(e) => {
            log::warn!("Skipping invalid IPv4 range {input:?}: {e}");
            vec![]
        }
    }
}

/// Parse every entry, dropping the ones that are not IPv4 addresses or ranges.
pub fn parse_addresses<I, S>(inputs: I) -> Vec<Ipv4Addr>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inputs
        .into_iter()
        .flat_map(|input| parse_entry(input.as_ref()))
        .collect()
}

/// Pull dotted-quad tokens out of free text, ignoring `#` and `;` comments.
pub fn extract_addresses(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.split(['#', ';']).next().unwrap_or(""))
        .flat_map(|line| {
            get_dotted_quad_regex()
                .find_iter(line)
                .map(|m| m.as_str().to_string())
                .collect::<Vec<String>>()
        })
        .collect()
}

/// Read a plain-text address list.
///
/// # Returns
/// * `Ok(Vec<String>)` - Dotted-quad tokens in file order, not yet validated
/// * `Err` - If the file does not exist or cannot be read
pub fn read_address_list(path: &str) -> Result<Vec<String>, Box<dyn Error>> {
    if !Path::new(path).exists() {
        return Err(format!("Address list does not exist: {path}").into());
    }
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading address list {path}: {e}"))?;
    let addresses = extract_addresses(&text);
    log::info!("Read {} address token(s) from {path}", addresses.len());
    Ok(addresses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address() {
        assert_eq!(parse_address("1.2.3.4"), Some(Ipv4Addr::new(1, 2, 3, 4)));
        assert_eq!(parse_address(" 1.2.3.4 "), Some(Ipv4Addr::new(1, 2, 3, 4)));
        assert_eq!(
            parse_address("::ffff:176.31.205.144"),
            Some(Ipv4Addr::new(176, 31, 205, 144))
        );
        assert_eq!(parse_address("2001:db8::1"), None);
        assert_eq!(parse_address("1.2.3.256"), None);
        assert_eq!(parse_address("1.2.3"), None);
        assert_eq!(parse_address(""), None);
    }

    #[test]
    fn test_parse_addresses_drops_invalid() {
        let parsed = parse_addresses(["10.0.0.1", "bogus", "10.0.0.300", "10.0.0.2"]);
        assert_eq!(
            parsed,
            vec![Ipv4Addr::new(10, 0, 0, 1), Ipv4Addr::new(10, 0, 0, 2)]
        );
    }

    #[test]
    fn test_extract_addresses() {
        let text = "v=spf1 ip4:1.2.3.4 ip4:10.0.0.0/29 -all\n\
                    # 9.9.9.9 is commented out\n\
                    mail IN A 94.23.77.73 ; 8.8.8.8\n\
                    version 1.2.3\n";
        assert_eq!(
            extract_addresses(text),
            vec!["1.2.3.4", "10.0.0.0/29", "94.23.77.73"]
        );
    }

    #[test]
    fn test_parse_entry_expands_ranges() {
        let hosts = parse_entry("10.0.0.0/29");
        assert_eq!(hosts.len(), 8, "a /29 keeps all of its hosts");
        assert_eq!(hosts[0], Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(hosts[7], Ipv4Addr::new(10, 0, 0, 7));
        assert_eq!(parse_entry("10.0.0.9/32"), vec![Ipv4Addr::new(10, 0, 0, 9)]);
        assert_eq!(parse_entry("10.0.0.0/16").len(), 65536);
        assert!(parse_entry("10.0.0.0/8").is_empty(), "too wide to expand");
        assert!(parse_entry("10.0.0.0/40").is_empty());
        assert!(parse_entry("10.0.0.300/24").is_empty());
    }

    #[test]
    fn test_spf_record_round_trip_keeps_ranges() {
        let tokens = extract_addresses("v=spf1 ip4:10.0.0.0/29 ip4:1.2.3.4 -all");
        let spf = crate::convert_ips_to_short_mode(&tokens, 40).unwrap();
        assert_eq!(spf, "ip4:1.2.3.4 ip4:10.0.0.0/29");
    }

    #[test]
    fn test_read_address_list() {
        let addrs = read_address_list("src/tests/test_data/zone_dump.txt")
            .expect("Error reading address list");
        assert_eq!(addrs.len(), 22, "Expected 21 addresses plus one bad entry");
        assert!(addrs.contains(&"999.1.1.1".to_string()));
        assert_eq!(parse_addresses(&addrs).len(), 21);
    }

    #[test]
    fn test_read_address_list_missing() {
        assert!(read_address_list("src/tests/test_data/does_not_exist.txt").is_err());
    }
}
