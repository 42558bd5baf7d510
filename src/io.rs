use crate::error::PrefixFinderError;
use log::debug;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// create a [BufRead] on heap from a given path to a local file.
///
/// `.gz` and `.bz2` files are decompressed on the fly; any other extension is read as plain text.
pub(crate) fn get_reader(path: &Path) -> Result<Box<dyn BufRead + Send>, PrefixFinderError> {
    let path_str = path.to_string_lossy();
    debug!("opening address list {}", path_str);
    let raw_reader = oneio::get_reader(path_str.as_ref())?;
    Ok(Box::new(BufReader::new(raw_reader)))
}

/// create a writer for the given path, compressing by extension the same way [get_reader] reads.
#[cfg(feature = "report")]
pub(crate) fn get_writer(path: &Path) -> Result<Box<dyn std::io::Write>, PrefixFinderError> {
    let path_str = path.to_string_lossy();
    debug!("creating report {}", path_str);
    Ok(oneio::get_writer(path_str.as_ref())?)
}
