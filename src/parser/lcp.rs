/*!
Longest common prefix over a set of IPv6 addresses.

Addresses are compared as 128-bit integers: two addresses share exactly as many leading bits as
there are leading zeros in their XOR. For a whole set, the differences of every address against
the first one are OR-ed together and the leading zeros of that fold give the shared length.
*/
use crate::models::NetworkPrefix;
use std::net::Ipv6Addr;

/// Number of leading bits shared by `a` and `b`, in `0..=128`.
#[inline]
pub fn common_prefix_len(a: Ipv6Addr, b: Ipv6Addr) -> u8 {
    (u128::from(a) ^ u128::from(b)).leading_zeros() as u8
}

/// Computes the longest prefix shared by every address in `addresses`.
///
/// The returned prefix is built from the first address truncated to the shared length. A single
/// address, or a run of identical ones, yields a `/128`. Addresses that differ at the very first
/// bit yield `::/0`; callers decide whether that is informative.
///
/// Returns `None` only when `addresses` is empty.
///
/// # Example
///
/// ```rust
/// use std::net::Ipv6Addr;
/// use ipv6_prefix_finder::parser::compute_lcp;
///
/// let addrs: Vec<Ipv6Addr> = ["2001:db8:1::1", "2001:db8:1::2", "2001:db8:1::ff"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// let prefix = compute_lcp(&addrs).unwrap();
/// assert_eq!(prefix.to_string(), "2001:db8:1::/120");
/// ```
pub fn compute_lcp(addresses: &[Ipv6Addr]) -> Option<NetworkPrefix> {
    let (first, rest) = addresses.split_first()?;
    let reference = u128::from(*first);

    let diff = rest
        .iter()
        .fold(0u128, |acc, addr| acc | (reference ^ u128::from(*addr)));
    let prefix_len = diff.leading_zeros() as u8;

    // prefix_len is at most 128 by construction
    NetworkPrefix::new(*first, prefix_len).ok()
}
