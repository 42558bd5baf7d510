/*!
parser module turns address-list lines into addresses and reduces them to a network prefix.
*/
pub mod address;
pub mod lcp;
pub mod sample;

pub use address::{candidate_token, normalize_address, parse_line};
pub use lcp::{common_prefix_len, compute_lcp};
pub use sample::{Sample, DEFAULT_SAMPLE_LINES};
