/*!
error module defines the error types used in ipv6-prefix-finder.
*/
use oneio::OneIoError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrefixFinderError {
    /// A token that is not a syntactically valid IPv6 literal, with or without a CIDR suffix.
    ///
    /// ## Occurs during:
    ///  - Normalizing a sampled line into an address. The sampling loop skips the line and
    ///    keeps going, so this never escapes [crate::Sample] construction.
    #[error("invalid IPv6 address {token:?}: {reason}")]
    InvalidAddress { token: String, reason: String },
    /// This error represents a [ipnet::PrefixLenError] error. It occurs if a prefix length is
    /// larger than 128.
    ///
    /// ## Occurs during:
    ///  - Building a [crate::models::NetworkPrefix] from an address and a length
    #[error("invalid network prefix length")]
    InvalidPrefixLength(#[from] ipnet::PrefixLenError),
    /// A general IO error triggered while reading an address list or walking a directory.
    #[error(transparent)]
    IoError(#[from] io::Error),
    /// Opening a local, possibly compressed, file failed.
    #[error(transparent)]
    OneIoError(#[from] OneIoError),
    #[cfg(feature = "report")]
    #[error(transparent)]
    CsvError(#[from] csv::Error),
    #[error("scan root {0} is not a readable directory")]
    InvalidScanRoot(String),
}

impl PrefixFinderError {
    pub(crate) fn invalid_address(token: &str, reason: impl ToString) -> Self {
        PrefixFinderError::InvalidAddress {
            token: token.to_string(),
            reason: reason.to_string(),
        }
    }
}
