//! Property-based tests for RadixMap.
//!
//! This module verifies that RadixMap satisfies various laws and
//! invariants using proptest, checking it against `std::collections::HashMap`
//! as the reference model.

use proptest::prelude::*;
use radixmap::radix::RadixMap;
use std::collections::{HashMap, HashSet};

// =============================================================================
// Strategy for generating test data
// =============================================================================

/// Keys drawn from a four-byte alphabet collide on prefixes constantly,
/// which is exactly what exercises splitting and reaping.
fn narrow_key() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..4, 0..8)
}

fn wide_key() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..12)
}

fn arbitrary_key() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![narrow_key(), wide_key()]
}

fn arbitrary_value() -> impl Strategy<Value = i32> {
    any::<i32>()
}

fn arbitrary_entry() -> impl Strategy<Value = (Vec<u8>, i32)> {
    (arbitrary_key(), arbitrary_value())
}

fn arbitrary_entries() -> impl Strategy<Value = Vec<(Vec<u8>, i32)>> {
    prop::collection::vec(arbitrary_entry(), 0..50)
}

/// An insert (`true`) or remove (`false`) step against one key.
fn arbitrary_steps() -> impl Strategy<Value = Vec<(bool, Vec<u8>, i32)>> {
    prop::collection::vec((any::<bool>(), narrow_key(), arbitrary_value()), 0..60)
}

fn build(entries: &[(Vec<u8>, i32)]) -> (RadixMap<i32>, HashMap<Vec<u8>, i32>) {
    let mut map = RadixMap::new();
    let mut model = HashMap::new();
    for (key, value) in entries {
        map.insert(key, *value);
        model.insert(key.clone(), *value);
    }
    (map, model)
}

// =============================================================================
// Get-Insert Law: after insert(k, v), get(k) == Some(&v)
// =============================================================================

proptest! {
    #[test]
    fn prop_get_insert_law(
        entries in arbitrary_entries(),
        key in arbitrary_key(),
        value in arbitrary_value()
    ) {
        let (mut map, _) = build(&entries);
        map.insert(&key, value);

        prop_assert_eq!(map.get(&key), Some(&value));
        prop_assert!(map.contains_key(&key));
    }
}

// =============================================================================
// Get-Insert-Other Law: k1 != k2 => insert(k1, v) leaves get(k2) unchanged
// =============================================================================

proptest! {
    #[test]
    fn prop_get_insert_other_law(
        entries in arbitrary_entries(),
        key1 in arbitrary_key(),
        key2 in arbitrary_key(),
        value in arbitrary_value()
    ) {
        prop_assume!(key1 != key2);

        let (mut map, _) = build(&entries);
        let before = map.get(&key2).copied();
        map.insert(&key1, value);

        prop_assert_eq!(map.get(&key2).copied(), before);
    }
}

// =============================================================================
// Remove-Get Law: after remove(k), get(k) == None
// =============================================================================

proptest! {
    #[test]
    fn prop_remove_get_law(
        entries in arbitrary_entries(),
        key in arbitrary_key()
    ) {
        let (mut map, model) = build(&entries);
        let removed = map.remove(&key);

        prop_assert_eq!(removed, model.get(&key).copied());
        prop_assert_eq!(map.get(&key), None);
        prop_assert!(!map.contains_key(&key));
    }
}

// =============================================================================
// Remove-Other Law: k1 != k2 => remove(k1) leaves get(k2) unchanged
// =============================================================================

proptest! {
    #[test]
    fn prop_remove_other_law(
        entries in arbitrary_entries(),
        key1 in arbitrary_key(),
        key2 in arbitrary_key()
    ) {
        prop_assume!(key1 != key2);

        let (mut map, _) = build(&entries);
        let before = map.get(&key2).copied();
        map.remove(&key1);

        prop_assert_eq!(map.get(&key2).copied(), before);
    }
}

// =============================================================================
// Model Equivalence: an insert/remove script agrees with HashMap throughout
// =============================================================================

proptest! {
    #[test]
    fn prop_model_equivalence_under_interleaving(steps in arbitrary_steps()) {
        let mut map = RadixMap::new();
        let mut model: HashMap<Vec<u8>, i32> = HashMap::new();

        for (is_insert, key, value) in steps {
            if is_insert {
                prop_assert_eq!(map.insert(&key, value), model.insert(key, value));
            } else {
                prop_assert_eq!(map.remove(&key), model.remove(&key));
            }
            prop_assert_eq!(map.len(), model.len());
        }

        prop_assert_eq!(map.to_hash_map(), model);
    }
}

// =============================================================================
// Length Law: len counts distinct keys; is_empty agrees with len
// =============================================================================

proptest! {
    #[test]
    fn prop_length_counts_distinct_keys(entries in arbitrary_entries()) {
        let (map, model) = build(&entries);

        prop_assert_eq!(map.len(), model.len());
        prop_assert_eq!(map.is_empty(), model.is_empty());
    }
}

// =============================================================================
// Iteration Law: one visit per entry, values matching the model
// =============================================================================

proptest! {
    #[test]
    fn prop_iteration_visits_each_entry_once(entries in arbitrary_entries()) {
        let (map, model) = build(&entries);

        let visited: Vec<(Vec<u8>, i32)> = map
            .iter()
            .map(|(key, value)| (key.to_vec(), *value))
            .collect();
        prop_assert_eq!(visited.len(), model.len());
        prop_assert_eq!(map.iter().len(), map.len());

        let keys: HashSet<Vec<u8>> = visited.iter().map(|(key, _)| key.clone()).collect();
        prop_assert_eq!(keys.len(), visited.len());
        for (key, value) in &visited {
            prop_assert_eq!(model.get(key), Some(value));
        }
    }
}

// =============================================================================
// Owning Iteration Law: into_iter yields the same entries as iter
// =============================================================================

proptest! {
    #[test]
    fn prop_into_iterator_matches_borrowed_iteration(entries in arbitrary_entries()) {
        let (map, _) = build(&entries);

        let borrowed: Vec<(Vec<u8>, i32)> = map
            .iter()
            .map(|(key, value)| (key.to_vec(), *value))
            .collect();
        let owned: Vec<(Vec<u8>, i32)> = map.into_iter().collect();

        prop_assert_eq!(owned, borrowed);
    }
}

// =============================================================================
// Pop-First Law: pop_first removes exactly the first iterated entry
// =============================================================================

proptest! {
    #[test]
    fn prop_pop_first_removes_the_first_entry(entries in arbitrary_entries()) {
        let (mut map, _) = build(&entries);
        let expected = map
            .iter()
            .next()
            .map(|(key, value)| (key.to_vec(), *value));
        let length = map.len();

        let popped = map.pop_first();
        prop_assert_eq!(&popped, &expected);
        match popped {
            Some((key, _)) => {
                prop_assert_eq!(map.len(), length - 1);
                prop_assert!(!map.contains_key(&key));
            }
            None => prop_assert!(map.is_empty()),
        }
    }
}

// =============================================================================
// Clone Independence Law: mutating a clone never touches the original
// =============================================================================

proptest! {
    #[test]
    fn prop_clone_is_independent(
        entries in arbitrary_entries(),
        key in arbitrary_key(),
        value in arbitrary_value()
    ) {
        let (map, model) = build(&entries);
        let mut copy = map.clone();
        prop_assert_eq!(&map, &copy);

        copy.insert(&key, value);
        copy.remove(&key);
        copy.clear();

        prop_assert!(copy.is_empty());
        prop_assert_eq!(map.to_hash_map(), model);
    }
}

// =============================================================================
// Delete-If Law: delete_if agrees with the model's retain complement
// =============================================================================

proptest! {
    #[test]
    fn prop_delete_if_matches_model(entries in arbitrary_entries()) {
        let (mut map, mut model) = build(&entries);
        let before = model.len();

        let removed = map.delete_if(|_, value| value % 2 == 0);
        model.retain(|_, value| *value % 2 != 0);

        prop_assert_eq!(removed, before - model.len());
        prop_assert_eq!(map.to_hash_map(), model);
    }
}

// =============================================================================
// Equality Law: contents decide equality, insertion order does not
// =============================================================================

proptest! {
    #[test]
    fn prop_equality_ignores_insertion_order(entries in arbitrary_entries()) {
        let (map, _) = build(&entries);
        let mut reversed = RadixMap::new();
        for (key, value) in entries.iter().rev() {
            // Rev replays duplicates in reverse, so keep the first
            // occurrence only (the last write in original order).
            if !reversed.contains_key(key) {
                reversed.insert(key, *value);
            }
        }

        prop_assert_eq!(&map, &reversed);
        prop_assert!(map.strict_equals(&reversed));
    }
}

// =============================================================================
// Compaction Law: the rendered tree never exceeds 2n nodes
// =============================================================================

proptest! {
    #[test]
    fn prop_tree_stays_compact_under_interleaving(steps in arbitrary_steps()) {
        let mut map = RadixMap::new();
        for (is_insert, key, value) in steps {
            if is_insert {
                map.insert(&key, value);
            } else {
                map.remove(&key);
            }

            // One line per node. Valued nodes number exactly len (the
            // root itself when the empty key is stored); every valueless
            // non-root node has at least two children, so at most
            // len - 1 of them exist.
            let nodes = map.dump_tree().lines().count();
            if map.is_empty() {
                prop_assert_eq!(nodes, 1);
            } else {
                prop_assert!(nodes >= map.len());
                prop_assert!(nodes <= 2 * map.len());
            }
        }
    }
}
