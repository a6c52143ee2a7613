#![cfg(test)]

use std::collections::HashMap;
use std::hash::{BuildHasherDefault, DefaultHasher};

use super::*;

fn sorted<T: Ord>(mut items: Vec<T>) -> Vec<T> {
    items.sort();
    items
}

#[test]
fn test_keys_and_values() {
    let m = HashMap::from([(1, "a"), (2, "b"), (3, "c")]);
    assert_eq!(sorted(keys(&m)), [1, 2, 3], "Every key should be returned exactly once.");
    assert_eq!(sorted(values(&m)), ["a", "b", "c"], "Every value should be returned once.");

    let dupes = HashMap::from([(1, "x"), (2, "x")]);
    assert_eq!(values(&dupes), ["x", "x"], "Equal values under different keys are all kept.");

    let empty: HashMap<i32, &str> = HashMap::new();
    assert!(keys(&empty).is_empty());
    assert!(values(&empty).is_empty());
}

#[test]
fn test_map() {
    let m = HashMap::from([(1, "one"), (2, "two")]);
    let swapped = map(&m, |k, v| (*v, *k));
    assert_eq!(swapped, HashMap::from([("one", 1), ("two", 2)]));
    assert_eq!(m.len(), 2, "The input should be left untouched.");

    let collapsed = map(&m, |_, v| (0, v.len()));
    assert_eq!(collapsed.len(), 1, "Entries mapped to the same key should collapse.");
    assert_eq!(collapsed[&0], 3);
}

#[test]
fn test_map_in_place() {
    let mut m = HashMap::from([(1, 10), (2, 20)]);
    map_in_place(&mut m, |k, v| (k * 10, v + 1));
    assert_eq!(m, HashMap::from([(10, 11), (20, 21)]));

    map_in_place(&mut m, |_, v| (0, v));
    assert_eq!(m.len(), 1, "Entries mapped to the same key should collapse.");
    assert!(m[&0] == 11 || m[&0] == 21);
}

#[test]
fn test_merge() {
    let m1 = HashMap::from([(1, "a"), (2, "b")]);
    let m2 = HashMap::from([(3, "c"), (4, "d")]);
    assert_eq!(
        merge([&m1, &m2]),
        HashMap::from([(1, "a"), (2, "b"), (3, "c"), (4, "d")])
    );

    let m3 = HashMap::from([(2, "x"), (3, "y")]);
    assert_eq!(
        merge([&m1, &m2, &m3]),
        HashMap::from([(1, "a"), (2, "x"), (3, "y"), (4, "d")]),
        "Later maps should overwrite earlier ones."
    );
    assert_eq!(
        merge([&m3, &m1, &m2]),
        HashMap::from([(1, "a"), (2, "b"), (3, "c"), (4, "d")]),
        "Later maps should overwrite earlier ones."
    );

    let none: [&HashMap<i32, i32>; 0] = [];
    assert!(merge(none).is_empty());
}

#[test]
fn test_merge_custom_hasher() {
    let mut custom: HashMap<&str, i32, BuildHasherDefault<DefaultHasher>> = HashMap::default();
    custom.insert("a", 1);
    let mut other = HashMap::default();
    other.insert("a", 2);
    other.insert("b", 3);

    assert_eq!(merge([&custom, &other]), HashMap::from([("a", 2), ("b", 3)]));
}

#[test]
fn test_clear() {
    let mut m = HashMap::from([(1, "a"), (2, "b")]);
    let cap = m.capacity();
    clear(&mut m);
    assert!(m.is_empty());
    assert_eq!(m.capacity(), cap, "Clearing should keep the allocation.");
}

#[test]
fn test_clone() {
    let m = HashMap::from([(1, String::from("a")), (2, String::from("b"))]);
    let mut copy = clone(&m);
    assert_eq!(copy, m);

    copy.insert(3, String::from("c"));
    assert_eq!(m.len(), 2, "Changes to the copy should not affect the original.");
}

#[test]
fn test_get_or_default() {
    let m = HashMap::from([(1, "a")]);
    assert_eq!(get_or_default(&m, &1, "default"), "a");
    assert_eq!(get_or_default(&m, &2, "default"), "default");

    let counts: HashMap<&str, usize> = HashMap::new();
    assert_eq!(get_or_default(&counts, &"missing", 0), 0);
}
