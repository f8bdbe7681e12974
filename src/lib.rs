//! # radixmap
//!
//! A byte-keyed associative container backed by a radix tree
//! (compressed-prefix trie) instead of a hash table.
//!
//! ## Overview
//!
//! Hash maps degrade to linear bucket scans when an attacker floods them
//! with colliding keys. [`RadixMap`](radix::RadixMap) sidesteps the problem
//! entirely: every lookup, insertion, and deletion walks at most one tree
//! level per byte of the key, so cost is bounded by key length regardless
//! of what else is stored. The surface stays hash-map-compatible:
//!
//! - **Basic mapping**: `insert`, `get`, `remove`, `contains_key`, `clear`
//! - **Default fallback**: a fixed default value, or a generator invoked
//!   fresh on every miss
//! - **Iteration**: restartable iterators over entries, keys, and values
//! - **Derivatives**: `delete_if`, `retain`, `reject`, `reject_in_place`
//! - **Equality**: value equality via `PartialEq` and a stricter,
//!   representation-distinguishing `strict_equals`
//!
//! Keys are raw byte sequences; comparison is byte-wise, never locale- or
//! encoding-aware.
//!
//! ## Feature Flags
//!
//! - `arc`: use `Arc` instead of `Rc` for the internally shared key buffers
//!
//! ## Example
//!
//! ```rust
//! use radixmap::prelude::*;
//!
//! let mut map = RadixMap::new();
//! map.insert("romane", 1);
//! map.insert("romanus", 2);
//! map.insert("romulus", 3);
//!
//! assert_eq!(map.get("romanus"), Some(&2));
//! assert_eq!(map.len(), 3);
//!
//! assert_eq!(map.remove("romane"), Some(1));
//! assert_eq!(map.get("romane"), None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use radixmap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::radix::*;
}

pub mod radix;

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn prelude_exposes_the_map() {
        let mut map = RadixMap::new();
        map.insert("smoke", 1);
        assert_eq!(map.get("smoke"), Some(&1));
        assert_eq!(map.fetch("gone").map_err(|error| error.key().to_vec()), Err(b"gone".to_vec()));
    }
}
