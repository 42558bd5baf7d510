use crate::error::PrefixFinderError;
use ipnet::Ipv6Net;
use std::fmt::{Debug, Display, Formatter};
use std::net::Ipv6Addr;
use std::str::FromStr;

/// An IPv6 network prefix: base address plus prefix length.
///
/// The base address is always stored truncated, i.e. every bit beyond `prefix_len` is zero, so
/// two prefixes covering the same network compare equal regardless of how they were built.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct NetworkPrefix {
    prefix: Ipv6Net,
}

// Attempt to reduce the size of the debug output
impl Debug for NetworkPrefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prefix)
    }
}

impl FromStr for NetworkPrefix {
    type Err = PrefixFinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let prefix =
            Ipv6Net::from_str(s).map_err(|e| PrefixFinderError::invalid_address(s, e))?;
        Ok(NetworkPrefix {
            prefix: prefix.trunc(),
        })
    }
}

impl From<Ipv6Net> for NetworkPrefix {
    fn from(prefix: Ipv6Net) -> Self {
        NetworkPrefix {
            prefix: prefix.trunc(),
        }
    }
}

impl NetworkPrefix {
    /// Builds the network of length `prefix_len` that contains `addr`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::net::Ipv6Addr;
    /// use ipv6_prefix_finder::models::NetworkPrefix;
    ///
    /// let addr: Ipv6Addr = "2001:db8:1::ff".parse().unwrap();
    /// let prefix = NetworkPrefix::new(addr, 112).unwrap();
    /// assert_eq!(prefix.to_string(), "2001:db8:1::/112");
    /// ```
    pub fn new(addr: Ipv6Addr, prefix_len: u8) -> Result<NetworkPrefix, PrefixFinderError> {
        let prefix = Ipv6Net::new(addr, prefix_len)?;
        Ok(NetworkPrefix {
            prefix: prefix.trunc(),
        })
    }

    /// The prefix as an [Ipv6Net].
    pub fn net(&self) -> Ipv6Net {
        self.prefix
    }

    /// Network base address, host bits cleared.
    pub fn addr(&self) -> Ipv6Addr {
        self.prefix.addr()
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix.prefix_len()
    }

    pub fn contains(&self, addr: &Ipv6Addr) -> bool {
        self.prefix.contains(addr)
    }

    /// A `/128`, covering exactly one address.
    pub fn is_host_route(&self) -> bool {
        self.prefix.prefix_len() == 128
    }
}

impl Display for NetworkPrefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prefix)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for NetworkPrefix {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_str(&self.prefix)
        }
    }

    impl<'de> Deserialize<'de> for NetworkPrefix {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            NetworkPrefix::from_str(&s).map_err(D::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fromstr() {
        let network_prefix = NetworkPrefix::from_str("2001:db8:1::/48").unwrap();
        assert_eq!(
            network_prefix.net(),
            Ipv6Net::from_str("2001:db8:1::/48").unwrap()
        );
        assert_eq!(network_prefix.prefix_len(), 48);
    }

    #[test]
    fn test_from_ipv6net_truncates() {
        let net = Ipv6Net::from_str("2001:db8:1::ff/112").unwrap();
        let network_prefix = NetworkPrefix::from(net);
        assert_eq!(network_prefix.net(), net.trunc());
        assert_eq!(network_prefix.addr(), Ipv6Addr::from_str("2001:db8:1::").unwrap());
        assert_eq!(
            network_prefix,
            NetworkPrefix::from_str("2001:db8:1::/112").unwrap()
        );
    }

    #[test]
    fn test_fromstr_truncates_host_bits() {
        let network_prefix = NetworkPrefix::from_str("2001:db8:1::ff/112").unwrap();
        assert_eq!(network_prefix.to_string(), "2001:db8:1::/112");
        assert_eq!(
            network_prefix,
            NetworkPrefix::from_str("2001:db8:1::/112").unwrap()
        );
    }

    #[test]
    fn test_fromstr_rejects_garbage() {
        assert!(matches!(
            NetworkPrefix::from_str("2001:db8::/129"),
            Err(PrefixFinderError::InvalidAddress { .. })
        ));
        assert!(NetworkPrefix::from_str("192.0.2.0/24").is_err());
        assert!(NetworkPrefix::from_str("2001:db8::").is_err());
    }

    #[test]
    fn test_new() {
        let addr = Ipv6Addr::from_str("2001:db8:abcd:12::1").unwrap();
        let prefix = NetworkPrefix::new(addr, 32).unwrap();
        assert_eq!(prefix.addr(), Ipv6Addr::from_str("2001:db8::").unwrap());
        assert!(prefix.contains(&addr));
        assert!(!prefix.is_host_route());

        assert!(NetworkPrefix::new(addr, 128).unwrap().is_host_route());
        assert!(matches!(
            NetworkPrefix::new(addr, 129),
            Err(PrefixFinderError::InvalidPrefixLength(_))
        ));
    }

    #[test]
    fn test_display() {
        let prefix = NetworkPrefix::new(Ipv6Addr::UNSPECIFIED, 0).unwrap();
        assert_eq!(prefix.to_string(), "::/0");
        assert_eq!(format!("{prefix:?}"), "::/0");
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serialization() {
        let network_prefix = NetworkPrefix::from_str("2001:db8::/32").unwrap();
        let serialized = serde_json::to_string(&network_prefix).unwrap();
        assert_eq!(serialized, "\"2001:db8::/32\"");

        let deserialized: NetworkPrefix = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, network_prefix);

        assert!(serde_json::from_str::<NetworkPrefix>("\"not-a-prefix\"").is_err());
    }
}
