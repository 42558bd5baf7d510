use crate::models::{NetworkPrefix, PrefixOutcome};
use std::path::{Path, PathBuf};

/// Number of addresses per insert batch recorded in each report row.
pub const DEFAULT_BATCH_SIZE: u32 = 1000;

/// Address-list file found during a directory scan.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DiscoveredFile {
    /// Two-letter (or otherwise operator-defined) country identifier taken from the path.
    pub country_id: String,
    /// Absolute path of the address list.
    pub path: PathBuf,
}

impl DiscoveredFile {
    /// Derives the country identifier from the directory two levels above the file, following
    /// the `<root>/<country>/<group>/<file>` layout of scan results.
    ///
    /// Returns `None` when the path is too shallow to carry one.
    pub fn from_path(path: &Path) -> Option<DiscoveredFile> {
        let country_id = path
            .parent()?
            .parent()?
            .file_name()?
            .to_string_lossy()
            .into_owned();
        Some(DiscoveredFile {
            country_id,
            path: path.to_path_buf(),
        })
    }
}

/// One line of the scan report: `country,asn,prefix,file,batch`.
///
/// The ASN column is left empty by the scan and filled in by later review.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportRow {
    pub country: String,
    pub asn: Option<u32>,
    pub prefix: Option<NetworkPrefix>,
    pub file: String,
    pub batch: u32,
}

impl ReportRow {
    pub fn from_outcome(file: &DiscoveredFile, outcome: &PrefixOutcome, batch: u32) -> ReportRow {
        ReportRow {
            country: file.country_id.clone(),
            asn: None,
            prefix: outcome.prefix().copied(),
            file: file.path.to_string_lossy().into_owned(),
            batch,
        }
    }

    pub fn get_csv_header() -> [&'static str; 5] {
        ["country", "asn", "prefix", "file", "batch"]
    }
}
