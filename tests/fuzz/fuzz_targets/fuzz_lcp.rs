#![no_main]
use ipv6_prefix_finder::compute_lcp;
use libfuzzer_sys::fuzz_target;
use std::net::Ipv6Addr;

fuzz_target!(|data: &[u8]| {
    let addresses: Vec<Ipv6Addr> = data
        .chunks_exact(16)
        .map(|chunk| {
            let mut octets = [0u8; 16];
            octets.copy_from_slice(chunk);
            Ipv6Addr::from(octets)
        })
        .collect();

    match compute_lcp(&addresses) {
        None => assert!(addresses.is_empty()),
        Some(prefix) => assert!(addresses.iter().all(|a| prefix.contains(a))),
    }
});
