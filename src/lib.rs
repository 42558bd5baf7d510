/*!
ipv6-prefix-finder infers the aggregate IPv6 network prefix implied by an address list.

Given the first lines of a file of IPv6 addresses (one per line, optionally followed by other
fields or a `#` comment), the inferencer parses every candidate address, computes the longest
run of leading bits shared by all of them and reports the result in CIDR notation.

# Example

```rust
use ipv6_prefix_finder::{PrefixInferencer, PrefixOutcome};

let lines = [
    "# scan results",
    "2001:db8:1::1",
    "2001:db8:1::2 tcp/443",
    "2001:db8:1::ff",
];
let outcome = PrefixInferencer::new().infer_lines(lines);
assert_eq!(outcome.to_field(), "2001:db8:1::/120");

// addresses that disagree on the very first bit carry no common prefix
let outcome = PrefixInferencer::new().infer_lines(["2001:db8::1", "fe80::1"]);
assert_eq!(outcome, PrefixOutcome::NoCommonPrefix { sample_size: 2 });
```

# Scanning a result tree

[scan::scan_rows] walks a directory for address lists laid out as
`<root>/<country>/<group>/uniq_ips.txt`, infers one prefix per file and returns report rows;
with the `report` feature, [report::ReportWriter] writes them as CSV.
*/

pub mod error;
pub mod inferencer;
mod io;
pub mod models;
pub mod parser;
#[cfg(feature = "report")]
pub mod report;
pub mod scan;
pub mod scanner;

pub use error::PrefixFinderError;
pub use inferencer::PrefixInferencer;
pub use models::{DiscoveredFile, NetworkPrefix, PrefixOutcome, ReportRow};
pub use parser::{compute_lcp, normalize_address, Sample};
pub use scan::{scan_rows, ScanConfig, ScanSummary};
pub use scanner::FileScanner;
