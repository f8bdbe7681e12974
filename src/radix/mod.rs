//! Radix-tree-backed mapping types.
//!
//! This module provides [`RadixMap`], a mutable byte-keyed map whose
//! operations cost O(k) in the key length k rather than depending on hash
//! bucket distribution:
//!
//! - [`RadixMap`]: the container, with a hash-map-compatible surface
//! - [`StrictEq`]: the stricter of the map's two value-comparison
//!   capabilities
//! - [`KeyNotFound`]: the error returned by [`RadixMap::fetch`] on a miss
//!
//! # Prefix Compression
//!
//! Edges carry byte-string labels rather than single bytes, so a chain of
//! keys sharing a prefix collapses into one node per divergence point. The
//! structural invariant is that no valueless node (other than the root)
//! ever has fewer than two children; insertion splits nodes mid-label and
//! deletion merges them back to keep it.
//!
//! # Examples
//!
//! ## Basic mapping
//!
//! ```rust
//! use radixmap::radix::RadixMap;
//!
//! let mut map = RadixMap::new();
//! map.insert("aa", 1);
//! map.insert("ab", 2);
//!
//! assert_eq!(map.get("aa"), Some(&1));
//! assert_eq!(map.get("ac"), None);
//! assert_eq!(map.len(), 2);
//! ```
//!
//! ## Default fallback
//!
//! ```rust
//! use radixmap::radix::RadixMap;
//!
//! let map: RadixMap<i32> = RadixMap::with_default(42);
//! assert_eq!(map.get_or_default("missing").as_deref(), Some(&42));
//! ```
//!
//! ## Filtering derivatives
//!
//! ```rust
//! use radixmap::radix::RadixMap;
//!
//! let mut map: RadixMap<i32> = [("aa", 1), ("ab", 2), ("bb", 3)]
//!     .into_iter()
//!     .collect();
//!
//! let small = map.reject(|_, value| *value > 2);
//! assert_eq!(map.len(), 3);   // Original unchanged
//! assert_eq!(small.len(), 2); // Filtered copy
//!
//! map.delete_if(|_, value| *value > 2);
//! assert_eq!(map.len(), 2);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod error;
mod map;
mod node;
mod strict;

pub use error::KeyNotFound;
pub use map::RadixMap;
pub use map::RadixMapIntoIterator;
pub use map::RadixMapIterator;
pub use strict::StrictEq;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::ReferenceCounter;

    #[test]
    fn reference_counter_clones_share_allocation() {
        let reference_counter: ReferenceCounter<[u8]> = ReferenceCounter::from(&b"abc"[..]);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
        let shared = ReferenceCounter::clone(&reference_counter);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 2);
        assert!(std::ptr::eq(reference_counter.as_ptr(), shared.as_ptr()));
    }
}
