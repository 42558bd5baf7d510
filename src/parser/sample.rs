use crate::error::PrefixFinderError;
use crate::models::PrefixOutcome;
use crate::parser::{compute_lcp, parse_line};
use log::debug;
use std::io::BufRead;
use std::net::Ipv6Addr;

/// Default number of leading lines read from an address list.
pub const DEFAULT_SAMPLE_LINES: usize = 30;

/// The addresses parsed out of the first lines of an address list.
///
/// The window counts raw lines, blank and comment lines included. Lines whose candidate token
/// does not parse are skipped and counted, never fatal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sample {
    addresses: Vec<Ipv6Addr>,
    skipped: usize,
}

impl Sample {
    /// Builds a sample from at most `sample_lines` lines of `lines`.
    pub fn from_lines<I, S>(lines: I, sample_lines: usize) -> Sample
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sample = Sample::default();
        for line in lines.into_iter().take(sample_lines) {
            sample.push_line(line.as_ref());
        }
        sample
    }

    /// Reads at most `sample_lines` lines from `reader`. Nothing past the window is read.
    ///
    /// A line that is not valid UTF-8 is skipped like a malformed token; only read failures of
    /// the underlying reader are errors.
    pub fn from_reader<R: BufRead>(
        mut reader: R,
        sample_lines: usize,
    ) -> Result<Sample, PrefixFinderError> {
        let mut sample = Sample::default();
        let mut buf = Vec::new();
        for _ in 0..sample_lines {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            match std::str::from_utf8(&buf) {
                Ok(line) => sample.push_line(line),
                Err(e) => {
                    debug!("skipping non UTF-8 sample line: {}", e);
                    sample.skipped += 1;
                }
            }
        }
        Ok(sample)
    }

    fn push_line(&mut self, line: &str) {
        match parse_line(line) {
            Ok(Some(addr)) => self.addresses.push(addr),
            Ok(None) => {}
            Err(e) => {
                debug!("skipping sample line: {}", e);
                self.skipped += 1;
            }
        }
    }

    pub fn addresses(&self) -> &[Ipv6Addr] {
        &self.addresses
    }

    /// Lines that looked like IPv6 literals but failed to parse.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// Infers the aggregate prefix implied by this sample.
    pub fn infer(&self) -> PrefixOutcome {
        let sample_size = self.addresses.len();
        match compute_lcp(&self.addresses) {
            None => PrefixOutcome::EmptySample,
            Some(prefix) if prefix.prefix_len() == 0 => {
                PrefixOutcome::NoCommonPrefix { sample_size }
            }
            Some(prefix) => PrefixOutcome::Found {
                prefix,
                sample_size,
            },
        }
    }
}
