//! Property-based tests for test method name generation
//!
//! These tests use `proptest` to generate batches of overloaded methods and
//! verify the properties every assignment must satisfy.
//!
//! # Coverage
//!
//! - uniqueness and alignment with the input
//! - disjointness from reserved names
//! - no escalation of names that are already unique
//! - determinism
//! - type identifiers never shared by different types

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};
use testgen_naming::{
    MethodItem, MethodNameGenerator, ReservedNames, TypeDescriptor, TypeIdGenerator,
};

const SEEDS: &[&str] = &["add", "remove", "get", "process", "add_int"];
const TYPES: &[&str] = &[
    "int",
    "long[]",
    "String",
    "java.lang.String",
    "java.util.List<String>",
    "java.awt.List",
    "List",
    "java.util.Map.Entry<K, V>",
    "Object...",
];
const RESERVABLE: &[&str] = &[
    "testAdd",
    "testAdd_0args",
    "testAdd_int",
    "testGet_0args_1",
    "testProcess_String",
    "testRemove_2args",
    "setUp",
];

fn method_item() -> impl Strategy<Value = MethodItem> {
    (
        prop::sample::select(SEEDS),
        prop::collection::vec(prop::sample::select(TYPES), 0..4),
    )
        .prop_map(|(seed, params)| MethodItem::new(seed, params))
}

fn batch() -> impl Strategy<Value = Vec<MethodItem>> {
    prop::collection::vec(method_item(), 0..12)
}

fn reserved() -> impl Strategy<Value = ReservedNames> {
    prop::sample::subsequence(RESERVABLE, 0..RESERVABLE.len())
        .prop_map(|names| names.into_iter().collect())
}

proptest! {
    /// Property: exactly one name per item, all pairwise distinct
    #[test]
    fn prop_one_distinct_name_per_item(items in batch(), reserved in reserved()) {
        let names = MethodNameGenerator::default().generate(&items, &reserved).unwrap();
        prop_assert_eq!(names.len(), items.len());

        let distinct: HashSet<&String> = names.iter().collect();
        prop_assert_eq!(distinct.len(), names.len(), "duplicate names in {:?}", names);
    }

    /// Property: no produced name is reserved
    #[test]
    fn prop_reserved_names_never_produced(items in batch(), reserved in reserved()) {
        let names = MethodNameGenerator::default().generate(&items, &reserved).unwrap();
        for name in &names {
            prop_assert!(!reserved.contains(name), "reserved name '{}' produced", name);
        }
    }

    /// Property: a plain name that is unique and free is kept as is
    #[test]
    fn prop_unique_plain_names_not_escalated(items in batch(), reserved in reserved()) {
        let generator = MethodNameGenerator::default();
        let names = generator.generate(&items, &reserved).unwrap();

        let mut seed_counts: HashMap<String, usize> = HashMap::new();
        for item in &items {
            *seed_counts.entry(generator.base_name(&item.name)).or_default() += 1;
        }

        for (item, name) in items.iter().zip(&names) {
            let base = generator.base_name(&item.name);
            if seed_counts[&base] == 1 && !reserved.contains(&base) {
                prop_assert_eq!(name, &base);
            }
        }
    }

    /// Property: escalation only ever appends to the plain name
    #[test]
    fn prop_names_extend_plain_name(items in batch(), reserved in reserved()) {
        let generator = MethodNameGenerator::default();
        let names = generator.generate(&items, &reserved).unwrap();
        for (item, name) in items.iter().zip(&names) {
            prop_assert!(name.starts_with(&generator.base_name(&item.name)));
        }
    }

    /// Property: same batch and reserved set = same names
    #[test]
    fn prop_deterministic(items in batch(), reserved in reserved()) {
        let generator = MethodNameGenerator::default();
        let first = generator.generate(&items, &reserved).unwrap();
        let second = generator.generate(&items, &reserved).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: different erased types never share an identifier
    #[test]
    fn prop_type_ids_injective(texts in prop::collection::vec(prop::sample::select(TYPES), 0..10)) {
        let types: Vec<TypeDescriptor> = texts.iter().map(|t| t.parse().unwrap()).collect();
        let ids = TypeIdGenerator::new(1).generate(&types);

        let mut seen: HashMap<&str, &TypeDescriptor> = HashMap::new();
        for ty in &types {
            let id = ids.get(ty).unwrap();
            if let Some(previous) = seen.insert(id, ty) {
                prop_assert_eq!(previous, ty, "identifier '{}' shared", id);
            }
        }
    }
}
