/*!
Turning raw address-list lines into IPv6 addresses.
*/
use crate::error::PrefixFinderError;
use ipnet::Ipv6Net;
use std::net::Ipv6Addr;
use std::str::FromStr;

/// Extracts the candidate address token from a raw line.
///
/// Blank lines, `#` comments and lines without a `:` are discarded. Otherwise the token is the
/// first whitespace-delimited field with any inline `#comment` cut off. A `/len` suffix is left
/// in place for [normalize_address] to handle.
pub fn candidate_token(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || !line.contains(':') {
        return None;
    }

    let token = line.split_whitespace().next()?;
    let token = match token.split_once('#') {
        Some((head, _)) => head,
        None => token,
    };

    match token.is_empty() {
        true => None,
        false => Some(token),
    }
}

/// Parses a single token into the address it stands for.
///
/// A bare address is returned as is. An `address/len` literal is reduced to its network
/// address, with every bit past `len` cleared.
///
/// # Example
///
/// ```rust
/// use ipv6_prefix_finder::parser::normalize_address;
///
/// let addr = normalize_address("2001:db8:1::ff/112").unwrap();
/// assert_eq!(addr.to_string(), "2001:db8:1::");
/// assert!(normalize_address("not-an-address").is_err());
/// ```
pub fn normalize_address(token: &str) -> Result<Ipv6Addr, PrefixFinderError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(PrefixFinderError::invalid_address(token, "empty token"));
    }

    match token.contains('/') {
        true => Ipv6Net::from_str(token)
            .map(|net| net.network())
            .map_err(|e| PrefixFinderError::invalid_address(token, e)),
        false => {
            Ipv6Addr::from_str(token).map_err(|e| PrefixFinderError::invalid_address(token, e))
        }
    }
}

/// [candidate_token] followed by [normalize_address].
///
/// `Ok(None)` means the line carries no candidate at all; `Err` means it has one that failed
/// to parse.
pub fn parse_line(line: &str) -> Result<Option<Ipv6Addr>, PrefixFinderError> {
    candidate_token(line).map(normalize_address).transpose()
}
