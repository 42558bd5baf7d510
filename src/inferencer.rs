/*!
PrefixInferencer: the entry point that samples an address list and infers its prefix.
*/
use crate::error::PrefixFinderError;
use crate::io::get_reader;
use crate::models::PrefixOutcome;
use crate::parser::{Sample, DEFAULT_SAMPLE_LINES};
use log::debug;
use std::io::BufRead;
use std::path::Path;

/// Infers the network prefix implied by the first lines of an address list.
///
/// The inferencer holds only its settings, so one instance can be shared across threads and
/// reused for any number of files.
///
/// ```rust
/// use ipv6_prefix_finder::PrefixInferencer;
///
/// let inferencer = PrefixInferencer::new().with_sample_lines(10);
/// let outcome = inferencer.infer_lines(["2001:db8:1::1", "2001:db8:1::2", "# end"]);
/// assert_eq!(outcome.to_field(), "2001:db8:1::/126");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixInferencer {
    sample_lines: usize,
}

impl Default for PrefixInferencer {
    fn default() -> Self {
        PrefixInferencer {
            sample_lines: DEFAULT_SAMPLE_LINES,
        }
    }
}

impl PrefixInferencer {
    pub fn new() -> PrefixInferencer {
        PrefixInferencer::default()
    }

    /// Sets how many leading lines of each file are sampled.
    pub fn with_sample_lines(self, sample_lines: usize) -> PrefixInferencer {
        PrefixInferencer { sample_lines }
    }

    pub fn sample_lines(&self) -> usize {
        self.sample_lines
    }

    /// Collects the sample window of `lines` without reducing it.
    pub fn sample<I, S>(&self, lines: I) -> Sample
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Sample::from_lines(lines, self.sample_lines)
    }

    pub fn infer_lines<I, S>(&self, lines: I) -> PrefixOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.sample(lines).infer()
    }

    pub fn infer_reader<R: BufRead>(
        &self,
        reader: R,
    ) -> Result<PrefixOutcome, PrefixFinderError> {
        Ok(Sample::from_reader(reader, self.sample_lines)?.infer())
    }

    /// Opens `path` (plain, `.gz` or `.bz2`) and infers its prefix.
    ///
    /// Only failing to open or read the file is an error; unparsable lines are skipped.
    pub fn infer_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<PrefixOutcome, PrefixFinderError> {
        let path = path.as_ref();
        let sample = Sample::from_reader(get_reader(path)?, self.sample_lines)?;
        debug!(
            "{}: {} addresses sampled, {} lines skipped",
            path.display(),
            sample.len(),
            sample.skipped()
        );
        Ok(sample.infer())
    }
}
