//! Product identifiers.
//!
//! Ids are issued by the catalog from a monotonic counter so that two
//! products created back-to-back can never collide.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    /// Create an ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Issues product ids for a single catalog.
///
/// The counter only moves forward, so an id is never reissued even after the
/// product carrying it has been deleted.
#[derive(Debug, Clone)]
pub struct IdSequence {
    prefix: &'static str,
    last: u64,
}

impl IdSequence {
    /// Sequence producing `prod-1`, `prod-2`, ...
    pub fn products() -> Self {
        Self {
            prefix: "prod",
            last: 0,
        }
    }

    /// Issue the next id.
    pub fn next_id(&mut self) -> ProductId {
        self.last += 1;
        ProductId(format!("{}-{}", self.prefix, self.last))
    }

    /// Number of ids issued so far.
    pub fn issued(&self) -> u64 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("prod-123");
        assert_eq!(id.as_str(), "prod-123");
        assert_eq!(id.into_inner(), "prod-123".to_string());
    }

    #[test]
    fn test_sequence_is_monotonic() {
        let mut seq = IdSequence::products();
        let a = seq.next_id();
        let b = seq.next_id();
        assert_eq!(a.as_str(), "prod-1");
        assert_eq!(b.as_str(), "prod-2");
        assert_ne!(a, b);
        assert_eq!(seq.issued(), 2);
    }

    #[test]
    fn test_id_from_str() {
        let id: ProductId = "prod-456".into();
        assert_eq!(format!("{}", id), "prod-456");
    }
}
