use crate::models::NetworkPrefix;
use std::fmt::{Display, Formatter};

/// Result of inferring a prefix from one address sample.
///
/// "The sample was empty" and "the sample disagrees on the very first bit" are kept apart here,
/// even though both end up as a blank prefix field in the scan report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "outcome", rename_all = "snake_case"))]
pub enum PrefixOutcome {
    /// All sampled addresses share at least one leading bit.
    Found {
        prefix: NetworkPrefix,
        sample_size: usize,
    },
    /// Addresses were parsed but they differ at bit 0, so the only shared prefix is `::/0`.
    NoCommonPrefix { sample_size: usize },
    /// No line in the sample window parsed as an IPv6 address.
    EmptySample,
}

impl PrefixOutcome {
    pub fn prefix(&self) -> Option<&NetworkPrefix> {
        match self {
            PrefixOutcome::Found { prefix, .. } => Some(prefix),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PrefixOutcome::Found { .. })
    }

    /// Number of addresses the outcome was computed from.
    pub fn sample_size(&self) -> usize {
        match self {
            PrefixOutcome::Found { sample_size, .. } => *sample_size,
            PrefixOutcome::NoCommonPrefix { sample_size } => *sample_size,
            PrefixOutcome::EmptySample => 0,
        }
    }

    /// A `/128` is a host route rather than an aggregate, e.g. from a one-address sample.
    pub fn is_weak(&self) -> bool {
        self.prefix().is_some_and(|p| p.is_host_route())
    }

    /// Value for the `prefix` column of a scan report: the CIDR string, or empty.
    pub fn to_field(&self) -> String {
        self.prefix().map(|p| p.to_string()).unwrap_or_default()
    }
}

impl Display for PrefixOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PrefixOutcome::Found { prefix, .. } => write!(f, "{}", prefix),
            PrefixOutcome::NoCommonPrefix { sample_size } => {
                write!(f, "no common prefix among {} addresses", sample_size)
            }
            PrefixOutcome::EmptySample => write!(f, "no valid addresses in sample"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_fields() {
        let prefix = NetworkPrefix::from_str("2001:db8:1::/112").unwrap();
        let found = PrefixOutcome::Found {
            prefix,
            sample_size: 3,
        };
        assert!(found.is_found());
        assert!(!found.is_weak());
        assert_eq!(found.prefix(), Some(&prefix));
        assert_eq!(found.sample_size(), 3);
        assert_eq!(found.to_field(), "2001:db8:1::/112");

        let none = PrefixOutcome::NoCommonPrefix { sample_size: 2 };
        assert!(!none.is_found());
        assert_eq!(none.to_field(), "");
        assert_eq!(none.sample_size(), 2);

        assert_eq!(PrefixOutcome::EmptySample.to_field(), "");
        assert_eq!(PrefixOutcome::EmptySample.sample_size(), 0);
        assert_ne!(none, PrefixOutcome::EmptySample);
    }

    #[test]
    fn test_weak() {
        let host = NetworkPrefix::from_str("2001:db8::1/128").unwrap();
        let single = PrefixOutcome::Found {
            prefix: host,
            sample_size: 1,
        };
        assert!(single.is_weak());

        let duplicates = PrefixOutcome::Found {
            prefix: host,
            sample_size: 5,
        };
        assert!(duplicates.is_weak());
        assert!(!PrefixOutcome::EmptySample.is_weak());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            PrefixOutcome::NoCommonPrefix { sample_size: 2 }.to_string(),
            "no common prefix among 2 addresses"
        );
        assert_eq!(
            PrefixOutcome::EmptySample.to_string(),
            "no valid addresses in sample"
        );
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serialization() {
        let found = PrefixOutcome::Found {
            prefix: NetworkPrefix::from_str("2001:db8::/32").unwrap(),
            sample_size: 4,
        };
        assert_eq!(
            serde_json::to_string(&found).unwrap(),
            r#"{"outcome":"found","prefix":"2001:db8::/32","sample_size":4}"#
        );
        assert_eq!(
            serde_json::to_string(&PrefixOutcome::EmptySample).unwrap(),
            r#"{"outcome":"empty_sample"}"#
        );
    }
}
