use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Returns the keys of `map` as a Vec, in no particular order.
///
/// # Examples
/// ```
/// # use std::collections::HashMap;
/// # use gkit::map;
/// let m = HashMap::from([(1, "a"), (2, "b"), (3, "c")]);
/// let mut keys = map::keys(&m);
/// keys.sort();
/// assert_eq!(keys, [1, 2, 3]);
/// ```
pub fn keys<K: Clone, V, S>(map: &HashMap<K, V, S>) -> Vec<K> {
    map.keys().cloned().collect()
}

/// Returns the values of `map` as a Vec, in no particular order.
///
/// # Examples
/// ```
/// # use std::collections::HashMap;
/// # use gkit::map;
/// let m = HashMap::from([(1, "a"), (2, "b"), (3, "c")]);
/// let mut values = map::values(&m);
/// values.sort();
/// assert_eq!(values, ["a", "b", "c"]);
/// ```
pub fn values<K, V: Clone, S>(map: &HashMap<K, V, S>) -> Vec<V> {
    map.values().cloned().collect()
}

/// Builds a new map from the key-value pairs that `f` produces for each entry of `map`.
///
/// If `f` sends two entries to the same key, only one of their values is kept, and which one
/// depends on the iteration order of `map`, which is unspecified.
///
/// # Examples
/// ```
/// # use std::collections::HashMap;
/// # use gkit::map;
/// let stock = HashMap::from([("apple", 3), ("pear", 0)]);
/// let labels = map::map(&stock, |name, qty| (name.to_uppercase(), *qty > 0));
/// assert_eq!(labels, HashMap::from([("APPLE".to_string(), true), ("PEAR".to_string(), false)]));
/// ```
pub fn map<K, V, S, K2, V2, F>(map: &HashMap<K, V, S>, mut f: F) -> HashMap<K2, V2>
where
    K2: Eq + Hash,
    F: FnMut(&K, &V) -> (K2, V2),
{
    map.iter().map(|(k, v)| f(k, v)).collect()
}

/// Rewrites every entry of `map` through `f`, in place.
///
/// This is the in-place counterpart to [`map()`], restricted to the same key and value types so
/// that the existing map can hold the result. Key collisions are resolved the same way, with an
/// unspecified winner. The map's allocation and hasher are reused.
///
/// # Examples
/// ```
/// # use std::collections::HashMap;
/// # use gkit::map;
/// let mut prices = HashMap::from([("apple", 100), ("pear", 250)]);
/// map::map_in_place(&mut prices, |name, cents| (name, cents * 2));
/// assert_eq!(prices, HashMap::from([("apple", 200), ("pear", 500)]));
/// ```
pub fn map_in_place<K, V, S, F>(map: &mut HashMap<K, V, S>, mut f: F)
where
    K: Eq + Hash,
    S: BuildHasher,
    F: FnMut(K, V) -> (K, V),
{
    let entries: Vec<(K, V)> = map.drain().collect();
    map.extend(entries.into_iter().map(|(k, v)| f(k, v)));
}

/// Merges all of `maps` into a single new map.
///
/// Maps are applied left to right, so when a key appears in more than one of them, the value
/// from the last map containing it wins.
///
/// # Examples
/// ```
/// # use std::collections::HashMap;
/// # use gkit::map;
/// let m1 = HashMap::from([("a", 1), ("b", 2)]);
/// let m2 = HashMap::from([("b", 3), ("c", 4)]);
/// let m3 = HashMap::from([("c", 5), ("d", 6)]);
///
/// let merged = map::merge([&m1, &m2, &m3]);
/// assert_eq!(merged, HashMap::from([("a", 1), ("b", 3), ("c", 5), ("d", 6)]));
///
/// let all = vec![m1, m2, m3];
/// assert_eq!(map::merge(&all), merged);
/// ```
pub fn merge<'a, K, V, S, I>(maps: I) -> HashMap<K, V>
where
    K: Eq + Hash + Clone + 'a,
    V: Clone + 'a,
    S: 'a,
    I: IntoIterator<Item = &'a HashMap<K, V, S>>,
{
    let mut result = HashMap::new();
    for map in maps {
        result.extend(map.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    result
}

/// Removes every entry from `map`, in place. The map keeps its allocated capacity.
///
/// # Examples
/// ```
/// # use std::collections::HashMap;
/// # use gkit::map;
/// let mut m = HashMap::from([(1, "a"), (2, "b")]);
/// map::clear(&mut m);
/// assert!(m.is_empty());
/// ```
pub fn clear<K, V, S>(map: &mut HashMap<K, V, S>) {
    map.clear();
}

/// Creates a shallow copy of `map`: the entries are cloned, but nothing they point to is.
///
/// # Examples
/// ```
/// # use std::collections::HashMap;
/// # use std::rc::Rc;
/// # use gkit::map;
/// let shared = Rc::new(String::from("shared"));
/// let m = HashMap::from([(1, Rc::clone(&shared))]);
/// let copy = map::clone(&m);
/// assert_eq!(copy, m);
/// assert!(Rc::ptr_eq(&copy[&1], &shared));
/// ```
pub fn clone<K, V, S>(map: &HashMap<K, V, S>) -> HashMap<K, V, S>
where
    K: Clone,
    V: Clone,
    S: Clone,
{
    map.clone()
}

/// Returns a clone of the value stored under `key`, or `default` if there is none.
///
/// # Examples
/// ```
/// # use std::collections::HashMap;
/// # use gkit::map;
/// let m = HashMap::from([(1, "a")]);
/// assert_eq!(map::get_or_default(&m, &1, "default"), "a");
/// assert_eq!(map::get_or_default(&m, &2, "default"), "default");
/// ```
pub fn get_or_default<K, V, S>(map: &HashMap<K, V, S>, key: &K, default: V) -> V
where
    K: Eq + Hash,
    V: Clone,
    S: BuildHasher,
{
    map.get(key).cloned().unwrap_or(default)
}
