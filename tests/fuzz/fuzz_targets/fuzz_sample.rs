#![no_main]
use ipv6_prefix_finder::Sample;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let sample = Sample::from_lines(s.lines(), 30);
        if let Some(prefix) = sample.infer().prefix() {
            assert!(sample.addresses().iter().all(|a| prefix.contains(a)));
        }
    }
});
