//! OrderedMap: sorted key-value storage on a left-leaning red-black tree
//!
//! The tree is the 2-3 form of an LLRB: every red link leans left and no node
//! has two red children once an operation returns. Insertion descends to a new
//! red leaf and repairs leaning links and splits 4-nodes on the way back up.
//! Deletion borrows a red link from a sibling before each descent so the node
//! finally unlinked is always red, then runs the same fix-up pass upward. Both
//! share the rotation and color-flip primitives in the `node` module.
//!
//! Height is bounded by `2 * log2(n + 1)`, so insert, find and delete are
//! O(log n) and recursion depth stays small.

mod invariants;
mod iter;
mod node;
mod stats;

use std::fmt;

use crate::compare::{CaseFolded, Comparator, FloatOrder, Natural};
use crate::config::{Config, OrderedMapConfig, TraversalStrategy};
use crate::error::Result;

pub use iter::Iter;
pub use stats::MapStats;

use node::{Color, Link, Node, Rebalancer};

/// Ordered associative container backed by a left-leaning red-black tree
///
/// Keys are ordered by a [`Comparator`] fixed at construction. Keys that the
/// comparator deems equivalent are the same key: inserting one overwrites the
/// stored value. The map is a plain single-threaded value with no internal
/// locking; wrap it in a mutex to share it between writers.
///
/// # Examples
///
/// ```rust
/// use omap::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// assert!(map.insert(10, "ten"));
/// assert!(map.insert(5, "five"));
/// assert!(!map.insert(10, "TEN")); // overwrite
///
/// assert_eq!(map.find(&10), Some(&"TEN"));
/// assert_eq!(map.len(), 2);
///
/// let mut keys = Vec::new();
/// map.for_each(|k, _| keys.push(*k));
/// assert_eq!(keys, vec![5, 10]);
///
/// assert!(map.delete(&5));
/// assert!(!map.delete(&5));
/// ```
pub struct OrderedMap<K, V, C = Natural> {
    root: Link<K, V>,
    cmp: C,
    len: usize,
    config: OrderedMapConfig,
    stats: Option<MapStats>,
}

impl<K: Ord, V> OrderedMap<K, V, Natural> {
    /// Creates an empty map ordered by the keys' `Ord` implementation
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<V> OrderedMap<String, V, Natural> {
    /// Creates an empty map with plain string ordering
    pub fn string_keyed() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<V> OrderedMap<i64, V, Natural> {
    /// Creates an empty map with integer ordering
    pub fn int_keyed() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<V> OrderedMap<String, V, CaseFolded> {
    /// Creates an empty map whose string keys compare case-insensitively
    ///
    /// ```rust
    /// use omap::OrderedMap;
    ///
    /// let mut map = OrderedMap::case_folded_keyed();
    /// map.insert("Zebra".to_string(), 1);
    /// map.insert("apple".to_string(), 2);
    /// assert_eq!(map.find(&"ZEBRA".to_string()), Some(&1));
    /// assert_eq!(map.first().map(|(k, _)| k.as_str()), Some("apple"));
    /// ```
    pub fn case_folded_keyed() -> Self {
        Self::with_comparator(CaseFolded)
    }
}

impl<V> OrderedMap<f64, V, FloatOrder> {
    /// Creates an empty map with floating-point key ordering
    pub fn float64_keyed() -> Self {
        Self::with_comparator(FloatOrder)
    }
}

impl<K, V, C: Comparator<K>> OrderedMap<K, V, C> {
    /// Creates an empty map ordered by `cmp`
    ///
    /// ```rust
    /// use omap::OrderedMap;
    ///
    /// let mut desc = OrderedMap::with_comparator(|a: &i32, b: &i32| b < a);
    /// desc.insert(1, ());
    /// desc.insert(3, ());
    /// desc.insert(2, ());
    /// let keys: Vec<i32> = desc.iter().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, vec![3, 2, 1]);
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self::from_parts(cmp, OrderedMapConfig::default())
    }

    /// Creates an empty map ordered by `cmp` with the given configuration
    ///
    /// Fails when the configuration does not validate.
    pub fn with_config(cmp: C, config: OrderedMapConfig) -> Result<Self> {
        config.validate()?;
        log::debug!("Creating ordered map with config: {:?}", config);
        Ok(Self::from_parts(cmp, config))
    }

    fn from_parts(cmp: C, config: OrderedMapConfig) -> Self {
        let stats = config.enable_statistics.then(MapStats::new);
        Self {
            root: None,
            cmp,
            len: 0,
            config,
            stats,
        }
    }

    /// Returns the number of entries in the map
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the map holds no entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The comparator fixed at construction
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// The configuration the map was built with
    pub fn config(&self) -> &OrderedMapConfig {
        &self.config
    }

    /// Operation counters, when statistics are enabled
    pub fn stats(&self) -> Option<&MapStats> {
        self.stats.as_ref()
    }

    /// Inserts `value` under `key`
    ///
    /// Returns `true` when a new entry was created and `false` when an
    /// equivalent key was already present; in that case the stored value is
    /// replaced and the stored key is kept.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let root = self.root.take();
        let (root, inserted) = self.insert_at(root, key, value);
        self.root = Some(root);
        self.blacken_root();
        if inserted {
            self.len += 1;
        }
        if let Some(stats) = &self.stats {
            stats.record_insert(inserted);
        }
        self.verify("insert");
        inserted
    }

    fn insert_at(&self, link: Link<K, V>, key: K, value: V) -> (Box<Node<K, V>>, bool) {
        let Some(mut h) = link else {
            return (Node::leaf(key, value), true);
        };

        let inserted = if self.cmp.less(&key, &h.key) {
            let (left, inserted) = self.insert_at(h.left.take(), key, value);
            h.left = Some(left);
            inserted
        } else if self.cmp.less(&h.key, &key) {
            let (right, inserted) = self.insert_at(h.right.take(), key, value);
            h.right = Some(right);
            inserted
        } else {
            h.value = value;
            false
        };

        (self.rebalancer().fix_up(h), inserted)
    }

    /// Returns a reference to the value stored under `key`
    pub fn find(&self, key: &K) -> Option<&V> {
        let found = self.find_node(key).map(|node| &node.value);
        if let Some(stats) = &self.stats {
            stats.record_find(found.is_some());
        }
        found
    }

    /// Returns a mutable reference to the value stored under `key`
    pub fn find_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut cur = self.root.as_deref_mut();
        let mut found = None;
        while let Some(node) = cur {
            if self.cmp.less(key, &node.key) {
                cur = node.left.as_deref_mut();
            } else if self.cmp.less(&node.key, key) {
                cur = node.right.as_deref_mut();
            } else {
                found = Some(&mut node.value);
                break;
            }
        }
        if let Some(stats) = &self.stats {
            stats.record_find(found.is_some());
        }
        found
    }

    /// Returns the stored key and value equivalent to `key`
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        let found = self.find_node(key).map(|node| (&node.key, &node.value));
        if let Some(stats) = &self.stats {
            stats.record_find(found.is_some());
        }
        found
    }

    /// Returns true if an equivalent key is present
    pub fn contains_key(&self, key: &K) -> bool {
        let found = self.find_node(key).is_some();
        if let Some(stats) = &self.stats {
            stats.record_find(found);
        }
        found
    }

    fn find_node(&self, key: &K) -> Option<&Node<K, V>> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            if self.cmp.less(key, &node.key) {
                cur = node.left.as_deref();
            } else if self.cmp.less(&node.key, key) {
                cur = node.right.as_deref();
            } else {
                return Some(node);
            }
        }
        None
    }

    /// Removes the entry stored under `key`
    ///
    /// Returns `true` if an entry was removed. Deleting an absent key leaves
    /// the map untouched.
    ///
    /// When the matching node has a right subtree, its in-order successor's
    /// entry is moved into it and the successor's node is unlinked instead, so
    /// node identity does not survive the delete.
    pub fn delete(&mut self, key: &K) -> bool {
        // The borrowing descent assumes the key is present
        let deleted = self.find_node(key).is_some();
        if deleted {
            if let Some(root) = self.root.take() {
                let root = self.remove_at(Self::redden_two_node(root), key);
                self.root = root;
                self.blacken_root();
            }
            self.len -= 1;
        }
        if let Some(stats) = &self.stats {
            stats.record_delete(deleted);
        }
        self.verify("delete");
        deleted
    }

    fn remove_at(&self, mut h: Box<Node<K, V>>, key: &K) -> Link<K, V> {
        let rb = self.rebalancer();

        if self.cmp.less(key, &h.key) {
            if h.left_needs_red() {
                h = rb.move_red_left(h);
            }
            h.left = h.left.take().and_then(|left| self.remove_at(left, key));
        } else {
            if h.left_is_red() {
                h = rb.rotate_right(h);
            }
            if h.right.is_none() && self.cmp.equivalent(key, &h.key) {
                return None;
            }
            if h.right_needs_red() {
                h = rb.move_red_right(h);
            }
            if let Some(right) = h.right.take() {
                if self.cmp.equivalent(key, &h.key) {
                    let (rest, (succ_key, succ_value)) = rb.delete_min(right);
                    h.right = rest;
                    h.key = succ_key;
                    h.value = succ_value;
                } else {
                    h.right = self.remove_at(right, key);
                }
            }
        }

        Some(rb.fix_up(h))
    }

    /// Removes and returns the entry with the smallest key
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let root = Self::redden_two_node(self.root.take()?);
        let (root, min) = self.rebalancer().delete_min(root);
        self.root = root;
        self.blacken_root();
        self.len -= 1;
        if let Some(stats) = &self.stats {
            stats.record_delete(true);
        }
        self.verify("pop_first");
        Some(min)
    }

    /// Calls `visit` once for every entry, in ascending key order
    ///
    /// Each call is an independent walk over the current contents.
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&K, &V),
    {
        match self.config.traversal {
            TraversalStrategy::Recursive => visit_in_order(&self.root, &mut visit),
            TraversalStrategy::Iterative => {
                for (key, value) in self.iter() {
                    visit(key, value);
                }
            }
        }
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        log::trace!("Clearing ordered map with {} entries", self.len);
        self.root = None;
        self.len = 0;
    }

    /// A root with two black children is a 2-node; coloring it red gives the
    /// first borrow of a deletion a red link to move down
    fn redden_two_node(mut root: Box<Node<K, V>>) -> Box<Node<K, V>> {
        if !root.left_is_red() && !root.right_is_red() {
            root.color = Color::Red;
        }
        root
    }

    fn blacken_root(&mut self) {
        if let Some(root) = self.root.as_mut() {
            root.color = Color::Black;
        }
    }

    #[inline]
    fn rebalancer(&self) -> Rebalancer<'_> {
        Rebalancer::new(self.stats.as_ref())
    }

    /// Run the structural checker when the configuration asks for it
    ///
    /// # Panics
    ///
    /// Panics if an invariant does not hold, which indicates an inconsistent
    /// comparator or a bug in the rebalancing code.
    fn verify(&self, operation: &str) {
        if !self.config.verify_invariants {
            return;
        }
        if let Err(e) = self.check_invariants() {
            log::error!("Ordered map invariant broken after {}: {}", operation, e);
            panic!("ordered map invariant broken after {}: {}", operation, e);
        }
    }
}

impl<K, V, C> OrderedMap<K, V, C> {
    /// Returns an iterator over the entries in ascending key order
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.root, self.len, self.config.stack_capacity_hint)
    }

    /// Returns an iterator over the keys in ascending order
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    /// Returns an iterator over the values in ascending key order
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    /// Returns the entry with the smallest key
    pub fn first(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some((&node.key, &node.value))
    }

    /// Returns the entry with the largest key
    pub fn last(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some((&node.key, &node.value))
    }
}

fn visit_in_order<K, V, F>(link: &Link<K, V>, visit: &mut F)
where
    F: FnMut(&K, &V),
{
    if let Some(node) = link {
        visit_in_order(&node.left, visit);
        visit(&node.key, &node.value);
        visit_in_order(&node.right, visit);
    }
}

impl<K: Ord, V> Default for OrderedMap<K, V, Natural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedMap<K, V, Natural> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for OrderedMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a OrderedMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for OrderedMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;

    fn keys_of<K: Clone, V, C: Comparator<K>>(map: &OrderedMap<K, V, C>) -> Vec<K> {
        let mut keys = Vec::new();
        map.for_each(|k, _| keys.push(k.clone()));
        keys
    }

    fn scenario_map() -> OrderedMap<i32, &'static str> {
        let mut map = OrderedMap::new();
        for (k, v) in [(10, "ten"), (5, "five"), (20, "twenty"), (3, "three"), (7, "seven")] {
            assert!(map.insert(k, v));
        }
        map
    }

    #[test]
    fn test_insert_visits_in_order() {
        let map = scenario_map();
        assert_eq!(keys_of(&map), vec![3, 5, 7, 10, 20]);
        assert_eq!(map.len(), 5);
        map.check_invariants().unwrap();
    }

    #[test]
    fn test_delete_inner_node() {
        let mut map = scenario_map();
        assert!(map.delete(&5));
        assert_eq!(keys_of(&map), vec![3, 7, 10, 20]);
        assert_eq!(map.find(&5), None);
        assert_eq!(map.find(&7), Some(&"seven"));
        assert_eq!(map.len(), 4);
        map.check_invariants().unwrap();
    }

    #[test]
    fn test_overwrite_keeps_len() {
        let mut map = OrderedMap::new();
        assert!(map.insert(10, "a"));
        assert!(!map.insert(10, "b"));
        assert_eq!(map.len(), 1);
        assert_eq!(map.find(&10), Some(&"b"));
    }

    #[test]
    fn test_delete_on_empty_map() {
        let mut map: OrderedMap<i32, ()> = OrderedMap::new();
        assert!(!map.delete(&42));
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
    }

    #[test]
    fn test_delete_absent_key() {
        let mut map = scenario_map();
        assert!(!map.delete(&6));
        assert!(!map.delete(&100));
        assert!(!map.delete(&-1));
        assert_eq!(map.len(), 5);
        map.check_invariants().unwrap();
    }

    #[test]
    fn test_delete_absent_key_beside_three_node_run() {
        let mut map = OrderedMap::new();
        for k in [1, 2, 3] {
            map.insert(k, ());
        }
        assert!(!map.delete(&4));
        assert_eq!(map.len(), 3);
        map.check_invariants().unwrap();
        assert_eq!(keys_of(&map), vec![1, 2, 3]);
    }

    #[test]
    fn test_every_small_tree_survives_each_delete() {
        for n in 1..=40 {
            let orders: [Vec<i32>; 2] = [(0..n).collect(), (0..n).rev().collect()];
            for order in &orders {
                let build = || {
                    let mut map = OrderedMap::new();
                    for &k in order {
                        map.insert(k, k);
                    }
                    map
                };

                let mut map = build();
                assert!(!map.delete(&-1));
                assert!(!map.delete(&n));
                map.check_invariants().unwrap();
                assert_eq!(map.len(), n as usize);

                for k in 0..n {
                    let mut map = build();
                    assert!(map.delete(&k));
                    map.check_invariants().unwrap();
                    assert_eq!(map.find(&k), None);
                    assert_eq!(map.len(), n as usize - 1);
                }
            }
        }
    }

    #[test]
    fn test_pop_first_from_four_node_root() {
        let leaf = |key: i32| {
            Some(Box::new(Node {
                key,
                value: (),
                color: Color::Red,
                left: None,
                right: None,
            }))
        };
        let mut map = OrderedMap::new();
        map.root = Some(Box::new(Node {
            key: 2,
            value: (),
            color: Color::Black,
            left: leaf(1),
            right: leaf(3),
        }));
        map.len = 3;

        assert_eq!(map.pop_first(), Some((1, ())));
        map.check_invariants().unwrap();
        assert_eq!(map.pop_first(), Some((2, ())));
        map.check_invariants().unwrap();
        assert_eq!(map.pop_first(), Some((3, ())));
        assert!(map.is_empty());
    }

    #[test]
    fn test_pop_first_drains_shuffled_trees() {
        for seed in 0..30u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut keys: Vec<i32> = (0..64).collect();
            keys.shuffle(&mut rng);

            let mut map = OrderedMap::new();
            for &k in &keys {
                map.insert(k, ());
            }
            for expected in 0..64 {
                assert_eq!(map.pop_first(), Some((expected, ())));
                map.check_invariants().unwrap();
            }
            assert!(map.is_empty());
        }
    }

    #[test]
    fn test_random_insert_delete_keeps_balance() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut keys: Vec<i32> = (0..50).collect();
        keys.shuffle(&mut rng);

        let mut map = OrderedMap::new();
        for &k in &keys {
            map.insert(k, k * 10);
            map.check_invariants().unwrap();
        }
        assert_eq!(map.len(), 50);

        keys.shuffle(&mut rng);
        for (removed, &k) in keys.iter().enumerate() {
            assert!(map.delete(&k));
            map.check_invariants().unwrap();
            assert_eq!(map.len(), 50 - removed - 1);
        }
        assert!(map.is_empty());
        for k in 0..50 {
            assert_eq!(map.find(&k), None);
        }
    }

    #[test]
    fn test_sequential_keys() {
        let mut map = OrderedMap::new();
        for i in 0..500 {
            map.insert(i, ());
        }
        map.check_invariants().unwrap();
        for i in (0..500).rev().step_by(2) {
            assert!(map.delete(&i));
        }
        map.check_invariants().unwrap();
        assert_eq!(map.len(), 250);
        assert_eq!(keys_of(&map), (0..500).step_by(2).collect::<Vec<_>>());
    }

    #[test]
    fn test_find_mut() {
        let mut map = scenario_map();
        if let Some(v) = map.find_mut(&20) {
            *v = "TWENTY";
        }
        assert_eq!(map.find(&20), Some(&"TWENTY"));
        assert!(map.find_mut(&21).is_none());
    }

    #[test]
    fn test_first_last_pop_first() {
        let mut map = scenario_map();
        assert_eq!(map.first(), Some((&3, &"three")));
        assert_eq!(map.last(), Some((&20, &"twenty")));

        assert_eq!(map.pop_first(), Some((3, "three")));
        assert_eq!(map.pop_first(), Some((5, "five")));
        assert_eq!(map.len(), 3);
        map.check_invariants().unwrap();

        let mut empty: OrderedMap<i32, i32> = OrderedMap::new();
        assert_eq!(empty.first(), None);
        assert_eq!(empty.last(), None);
        assert_eq!(empty.pop_first(), None);
    }

    #[test]
    fn test_custom_comparator() {
        let mut map = OrderedMap::with_comparator(|a: &i32, b: &i32| b < a);
        for k in [4, 1, 9, 7] {
            map.insert(k, ());
        }
        assert_eq!(keys_of(&map), vec![9, 7, 4, 1]);
        assert!(map.delete(&7));
        assert_eq!(keys_of(&map), vec![9, 4, 1]);
        map.check_invariants().unwrap();
    }

    #[test]
    fn test_case_folded_keys() {
        let mut map = OrderedMap::case_folded_keyed();
        assert!(map.insert("banana".to_string(), 1));
        assert!(map.insert("Apple".to_string(), 2));
        assert!(map.insert("cherry".to_string(), 3));
        assert!(!map.insert("APPLE".to_string(), 4));

        assert_eq!(map.len(), 3);
        assert_eq!(keys_of(&map), vec!["Apple", "banana", "cherry"]);
        assert_eq!(map.find(&"apple".to_string()), Some(&4));
        assert!(map.delete(&"BANANA".to_string()));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_preset_constructors() {
        let mut strings = OrderedMap::string_keyed();
        strings.insert("b".to_string(), 1);
        strings.insert("B".to_string(), 2);
        assert_eq!(keys_of(&strings), vec!["B", "b"]);

        let mut ints = OrderedMap::int_keyed();
        ints.insert(-3i64, "neg");
        ints.insert(2, "pos");
        assert_eq!(keys_of(&ints), vec![-3, 2]);

        let mut floats = OrderedMap::float64_keyed();
        floats.insert(2.5, 'b');
        floats.insert(-1.0, 'a');
        floats.insert(f64::INFINITY, 'c');
        assert_eq!(keys_of(&floats), vec![-1.0, 2.5, f64::INFINITY]);
        assert_eq!(floats.find(&2.5), Some(&'b'));
    }

    #[test]
    fn test_iterative_traversal_matches_recursive() {
        let config = OrderedMapConfig {
            traversal: TraversalStrategy::Iterative,
            ..Default::default()
        };
        let mut iterative = OrderedMap::with_config(Natural, config).unwrap();
        let mut recursive = OrderedMap::new();
        for k in [8, 3, 12, 1, 6, 10, 14, 4, 7] {
            iterative.insert(k, k);
            recursive.insert(k, k);
        }
        assert_eq!(keys_of(&iterative), keys_of(&recursive));
    }

    #[test]
    fn test_statistics() {
        let config = OrderedMapConfig {
            enable_statistics: true,
            ..Default::default()
        };
        let mut map = OrderedMap::with_config(Natural, config).unwrap();
        for k in 0..16 {
            map.insert(k, ());
        }
        map.insert(3, ());
        map.find(&3);
        map.find(&99);
        map.delete(&4);
        map.delete(&99);

        let stats = map.stats().unwrap();
        assert_eq!(stats.inserts(), 16);
        assert_eq!(stats.overwrites(), 1);
        assert_eq!(stats.find_hits(), 1);
        assert_eq!(stats.find_misses(), 1);
        assert_eq!(stats.deletes(), 1);
        assert_eq!(stats.delete_misses(), 1);
        assert!(stats.rotations() > 0);
        assert!(stats.color_flips() > 0);

        let plain: OrderedMap<i32, ()> = OrderedMap::new();
        assert!(plain.stats().is_none());
    }

    #[test]
    fn test_every_lookup_is_counted() {
        let config = OrderedMapConfig {
            enable_statistics: true,
            ..Default::default()
        };
        let mut map = OrderedMap::with_config(Natural, config).unwrap();
        map.insert(1, "one");

        assert!(map.find(&1).is_some());
        assert!(map.find_mut(&1).is_some());
        assert!(map.get_key_value(&1).is_some());
        assert!(map.contains_key(&1));
        assert!(map.get_key_value(&2).is_none());
        assert!(!map.contains_key(&2));

        let stats = map.stats().unwrap();
        assert_eq!(stats.find_hits(), 4);
        assert_eq!(stats.find_misses(), 2);

        // delete looks the key up without counting a find
        map.delete(&1);
        assert_eq!(map.stats().unwrap().find_hits(), 4);
    }

    #[test]
    fn test_verify_invariants_mode() {
        let config = OrderedMapConfig {
            verify_invariants: true,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(2);
        let mut keys: Vec<i32> = (0..200).collect();
        keys.shuffle(&mut rng);

        let mut map = OrderedMap::with_config(Natural, config).unwrap();
        for &k in &keys {
            map.insert(k, ());
        }
        keys.shuffle(&mut rng);
        for (i, &k) in keys.iter().enumerate() {
            if i % 3 == 0 {
                map.pop_first();
                assert!(!map.delete(&1000));
            }
            map.delete(&k);
        }
        assert!(map.is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = OrderedMapConfig {
            stack_capacity_hint: 0,
            ..Default::default()
        };
        assert!(OrderedMap::<i32, (), _>::with_config(Natural, config).is_err());
    }

    #[test]
    fn test_clear() {
        let mut map = scenario_map();
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.first(), None);
        assert!(map.insert(1, "one"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_iter_and_collect() {
        let map: OrderedMap<i32, char> = [(3, 'c'), (1, 'a'), (2, 'b')].into_iter().collect();
        let entries: Vec<(i32, char)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(entries, vec![(1, 'a'), (2, 'b'), (3, 'c')]);
        assert_eq!(map.iter().len(), 3);
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(map.values().copied().collect::<String>(), "abc");

        let mut count = 0;
        for (_k, _v) in &map {
            count += 1;
        }
        assert_eq!(count, 3);
    }

    #[test]
    fn test_debug_format() {
        let map: OrderedMap<i32, &str> = [(2, "b"), (1, "a")].into_iter().collect();
        assert_eq!(format!("{:?}", map), r#"{1: "a", 2: "b"}"#);
    }

    #[test]
    fn test_get_key_value_and_contains() {
        let mut map = OrderedMap::case_folded_keyed();
        map.insert("Key".to_string(), 1);
        let (k, v) = map.get_key_value(&"KEY".to_string()).unwrap();
        assert_eq!(k, "Key");
        assert_eq!(*v, 1);
        assert!(map.contains_key(&"key".to_string()));
        assert!(!map.contains_key(&"other".to_string()));
    }

    #[test]
    fn test_for_each_is_repeatable() {
        let map = scenario_map();
        assert_eq!(keys_of(&map), keys_of(&map));
        assert_eq!(map.len(), 5);
    }
}
