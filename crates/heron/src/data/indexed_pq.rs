//! Indexed binary heap with O(log n) update and removal by key.
//!
//! Each distinct key is assigned a stable *key-index* (an arena slot) the first time it is added.
//! The heap itself only stores key-indices; two translation tables keep the arena and the heap in
//! sync:
//!
//! - `position[key_index]` is the key's current heap position, or `None` once it was removed.
//! - `heap[position]` is the key-index sitting at that heap position.
//!
//! Every swap rewrites both tables, so `position` and `heap` stay inverse bijections over the live
//! entries. Heap positions are never handed out to callers; the public API is keyed by `K`.

use crate::error::{Error, Result};
use rustc_hash::FxBuildHasher;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Ordering strategy over values. The queue surfaces the value that compares `Less` first.
pub type Comparator<V> = Box<dyn Fn(&V, &V) -> Ordering + Send + Sync>;

pub struct IndexedPriorityQueue<K, V>
where
    K: Eq + Hash + Clone,
    V: 'static,
{
    compare: Comparator<V>,

    key_index: HashMap<K, usize>,
    keys: Vec<K>,
    values: Vec<Option<V>>,

    position: Vec<Option<usize>>,
    heap: Vec<usize>,
}

impl<K, V> Default for IndexedPriorityQueue<K, V>
where
    K: Eq + Hash + Clone,
    V: Ord + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> IndexedPriorityQueue<K, V>
where
    K: Eq + Hash + Clone,
    V: Ord + 'static,
{
    /// Min-first queue ordered by `V::cmp`.
    pub fn new() -> Self {
        Self::with_comparator(V::cmp)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut pq = Self::new();
        pq.reserve(capacity);
        pq
    }
}

impl<K, V> IndexedPriorityQueue<K, V>
where
    K: Eq + Hash + Clone,
    V: 'static,
{
    pub fn with_comparator<F>(compare: F) -> Self
    where
        F: Fn(&V, &V) -> Ordering + Send + Sync + 'static,
    {
        Self {
            compare: Box::new(compare),
            key_index: HashMap::default(),
            keys: Vec::new(),
            values: Vec::new(),
            position: Vec::new(),
            heap: Vec::new(),
        }
    }

    /// Reserves room for `additional` more distinct keys.
    pub fn reserve(&mut self, additional: usize) {
        self.key_index.reserve(additional);
        self.keys.reserve(additional);
        self.values.reserve(additional);
        self.position.reserve(additional);
        self.heap.reserve(additional);
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn live(&self, key: &K) -> Option<(usize, usize)> {
        let ki = *self.key_index.get(key)?;
        let pos = self.position[ki]?;
        Some((ki, pos))
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.live(key).is_some()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let (ki, _) = self.live(key)?;
        self.values[ki].as_ref()
    }

    /// Inserts `key` with `value`, or updates it if the key is already queued.
    ///
    /// A key that was removed earlier gets its original key-index back.
    pub fn add(&mut self, key: K, value: V) -> &mut Self {
        if let Some(&ki) = self.key_index.get(&key) {
            let previous = self.values[ki].replace(value);
            match self.position[ki] {
                Some(pos) => {
                    debug_assert!(previous.is_some(), "live key-index without a value");
                    self.restore(pos);
                }
                None => {
                    let pos = self.heap.len();
                    self.heap.push(ki);
                    self.position[ki] = Some(pos);
                    self.swim(pos);
                }
            }
            return self;
        }

        let ki = self.keys.len();
        let pos = self.heap.len();
        self.key_index.insert(key.clone(), ki);
        self.keys.push(key);
        self.values.push(Some(value));
        self.position.push(Some(pos));
        self.heap.push(ki);
        self.swim(pos);
        self
    }

    /// Replaces the value of a queued key and restores heap order, returning the old value.
    pub fn update(&mut self, key: &K, value: V) -> Result<V> {
        let (ki, pos) = self.live(key).ok_or(Error::KeyNotFound)?;
        let previous = self.values[ki]
            .replace(value)
            .ok_or_else(|| Error::InvariantViolation {
                message: format!("key-index {ki} is live at heap position {pos} without a value"),
            })?;
        self.restore(pos);
        Ok(previous)
    }

    pub fn peek(&self) -> Option<(&K, &V)> {
        let &ki = self.heap.first()?;
        Some((&self.keys[ki], self.values[ki].as_ref()?))
    }

    pub fn poll(&mut self) -> Option<(K, V)> {
        if self.heap.is_empty() {
            return None;
        }
        let (ki, value) = self.remove_at(0)?;
        Some((self.keys[ki].clone(), value))
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let (_, pos) = self.live(key)?;
        self.remove_at(pos).map(|(_, value)| value)
    }

    /// Live keys in key-index (first insertion) order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    /// Live `(key, value)` pairs in key-index order. The borrow keeps the queue frozen while the
    /// iterator is alive.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.position
            .iter()
            .zip(&self.values)
            .zip(&self.keys)
            .filter_map(|((pos, value), key)| {
                pos.as_ref()?;
                Some((key, value.as_ref()?))
            })
    }

    pub fn clear(&mut self) {
        self.key_index.clear();
        self.keys.clear();
        self.values.clear();
        self.position.clear();
        self.heap.clear();
    }

    /// Drains the queue in priority order.
    pub fn into_sorted_vec(mut self) -> Vec<(K, V)> {
        let mut out = Vec::with_capacity(self.len());
        while let Some(entry) = self.poll() {
            out.push(entry);
        }
        out
    }

    /// Checks that `position` and `heap` are inverse bijections over the live entries and that
    /// every parent orders before or equal to its children.
    pub fn validate(&self) -> Result<()> {
        let violation = |message: String| Err(Error::InvariantViolation { message });

        let live = self.position.iter().filter(|p| p.is_some()).count();
        if live != self.heap.len() {
            return violation(format!(
                "{live} live key-indices for {} heap slots",
                self.heap.len()
            ));
        }
        for (pos, &ki) in self.heap.iter().enumerate() {
            if self.position.get(ki).copied().flatten() != Some(pos) {
                return violation(format!("heap slot {pos} points at key-index {ki} elsewhere"));
            }
            if self.values[ki].is_none() {
                return violation(format!("key-index {ki} at heap slot {pos} has no value"));
            }
        }
        for pos in 1..self.heap.len() {
            if self.less(pos, (pos - 1) / 2) {
                return violation(format!("heap slot {pos} orders before its parent"));
            }
        }
        Ok(())
    }

    fn remove_at(&mut self, pos: usize) -> Option<(usize, V)> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap(pos, last);
        let ki = self.heap.pop()?;
        self.position[ki] = None;
        let value = self.values[ki].take()?;
        if pos < self.heap.len() {
            self.restore(pos);
        }
        Some((ki, value))
    }

    fn restore(&mut self, pos: usize) {
        if !self.swim(pos) {
            self.sink(pos);
        }
    }

    /// Moves the entry at `pos` toward the root. Returns whether it moved.
    fn swim(&mut self, mut pos: usize) -> bool {
        let mut moved = false;
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.less(pos, parent) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
            moved = true;
        }
        moved
    }

    fn sink(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            // Ties prefer the left child.
            let child = if right < len && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(child, pos) {
                break;
            }
            self.swap(child, pos);
            pos = child;
        }
    }

    fn less(&self, i: usize, j: usize) -> bool {
        let (Some(a), Some(b)) = (
            self.values[self.heap[i]].as_ref(),
            self.values[self.heap[j]].as_ref(),
        ) else {
            debug_assert!(false, "heap slot without a value");
            return false;
        };
        (self.compare)(a, b) == Ordering::Less
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.position[self.heap[i]] = Some(i);
        self.position[self.heap[j]] = Some(j);
    }
}

impl<K, V> Extend<(K, V)> for IndexedPriorityQueue<K, V>
where
    K: Eq + Hash + Clone,
    V: 'static,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl<K, V> fmt::Debug for IndexedPriorityQueue<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: fmt::Debug + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
