/*!
Scan orchestration: discover address lists, infer a prefix for each, produce report rows.
*/
use crate::error::PrefixFinderError;
use crate::inferencer::PrefixInferencer;
use crate::models::{PrefixOutcome, ReportRow, DEFAULT_BATCH_SIZE};
use crate::parser::DEFAULT_SAMPLE_LINES;
use crate::scanner::FileScanner;
use log::{info, warn};
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Default name of the per-group address list written by the scanners.
pub const DEFAULT_TARGET_FILENAME: &str = "uniq_ips.txt";

/// Everything a scan needs, passed in explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Directory tree to search.
    pub root: PathBuf,
    /// Exact file name of the address lists.
    pub target_filename: String,
    /// Leading lines of each file sampled for inference.
    pub sample_lines: usize,
    /// Batch size recorded in every report row.
    pub batch_size: u32,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            root: PathBuf::from("."),
            target_filename: DEFAULT_TARGET_FILENAME.to_string(),
            sample_lines: DEFAULT_SAMPLE_LINES,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub files: usize,
    pub found: usize,
    pub no_common_prefix: usize,
    pub empty: usize,
    pub unreadable: usize,
}

impl ScanSummary {
    fn record(&mut self, outcome: Option<&PrefixOutcome>) {
        self.files += 1;
        match outcome {
            Some(PrefixOutcome::Found { .. }) => self.found += 1,
            Some(PrefixOutcome::NoCommonPrefix { .. }) => self.no_common_prefix += 1,
            Some(PrefixOutcome::EmptySample) => self.empty += 1,
            None => self.unreadable += 1,
        }
    }
}

impl Display for ScanSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} files: {} with prefix, {} without common prefix, {} empty, {} unreadable",
            self.files, self.found, self.no_common_prefix, self.empty, self.unreadable
        )
    }
}

/// Runs discovery and inference over `config.root`.
///
/// Only an unusable scan root is an error. A file that cannot be read still gets a row, with an
/// empty prefix, so the report lists every discovered file.
pub fn scan_rows(
    config: &ScanConfig,
) -> Result<(Vec<ReportRow>, ScanSummary), PrefixFinderError> {
    info!(
        "searching '{}' under '{}'",
        config.target_filename,
        config.root.display()
    );
    let files = FileScanner::new(&config.root, &config.target_filename).scan()?;
    info!("found {} files", files.len());

    let inferencer = PrefixInferencer::new().with_sample_lines(config.sample_lines);
    let mut summary = ScanSummary::default();
    let mut rows = Vec::with_capacity(files.len());

    for file in &files {
        let outcome = match inferencer.infer_file(&file.path) {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                warn!("error processing {}: {}", file.path.display(), e);
                None
            }
        };
        summary.record(outcome.as_ref());

        let outcome = outcome.unwrap_or(PrefixOutcome::EmptySample);
        if outcome.is_weak() {
            info!(
                "{}: /128 from {} addresses is a host route, not an aggregate",
                file.path.display(),
                outcome.sample_size()
            );
        }
        rows.push(ReportRow::from_outcome(file, &outcome, config.batch_size));
    }

    Ok((rows, summary))
}
