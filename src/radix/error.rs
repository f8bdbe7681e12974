//! Error types for the radix map.

use thiserror::Error;

/// Error returned by [`RadixMap::fetch`](super::RadixMap::fetch) when the
/// requested key has no stored value and no fallback was supplied.
///
/// The map is left unmodified by a failed fetch.
///
/// # Examples
///
/// ```rust
/// use radixmap::radix::RadixMap;
///
/// let map: RadixMap<i32> = RadixMap::new();
/// let error = map.fetch("missing").unwrap_err();
/// assert_eq!(error.key(), b"missing");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("key not found: \"{}\"", .key.escape_ascii())]
pub struct KeyNotFound {
    key: Box<[u8]>,
}

impl KeyNotFound {
    pub(crate) fn new(key: &[u8]) -> Self {
        Self { key: key.into() }
    }

    /// The key that was looked up.
    #[must_use]
    pub fn key(&self) -> &[u8] {
        &self.key
    }
}

// =============================================================================
// Tests
// =============================================================================
