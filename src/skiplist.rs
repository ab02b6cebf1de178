//! A skiplist ordered by an integer score.
//!
//! Every entry is a `(value, score)` pair. Entries are kept in ascending score
//! order, entries sharing a score stay in insertion order, and a given value
//! is stored at most once.

use std::{fmt, iter, mem};

use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    level_generator::{Binomial, LevelGenerator, binomial::DEFAULT_TOTAL},
    skipnode::{HEAD, Iter, LevelIter, Link, SkipNode, Slot},
};

/// Number of levels of a skiplist created with [`SkipList::new`].
pub const MAX_LEVEL: usize = DEFAULT_TOTAL;

// ////////////////////////////////////////////////////////////////////////////
// Errors
// ////////////////////////////////////////////////////////////////////////////

/// Errors returned by the fallible [`SkipList`] operations.
///
/// None of these leave the skiplist modified.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[expect(
    clippy::module_name_repetitions,
    reason = "Using 'Error' would be too generic and may cause confusion."
)]
#[non_exhaustive]
pub enum SkipListError {
    /// The value supplied was absent.
    #[error("value must not be absent.")]
    InvalidArgument,
    /// The value is already stored in the skiplist.
    #[error("value is already present.")]
    Duplicate,
    /// No entry holds the value at the given score.
    #[error("no entry with this value and score.")]
    NotFound,
}

// ////////////////////////////////////////////////////////////////////////////
// SkipList
// ////////////////////////////////////////////////////////////////////////////

/// A skiplist of values ordered by an `i64` score.
///
/// Insertion, lookup and deletion all descend from the highest active level to
/// level 0, each level acting as an express lane over the one below, which
/// gives an expected `O(log(n))` cost.
///
/// Nodes live in an arena owned by the skiplist and link to one another by
/// index, so splicing a node in or out only rewrites indices. Slots freed by
/// deletions are reused by later insertions.
///
/// # Examples
///
/// ```
/// use datastruct::{SkipList, SkipListError};
///
/// let mut sl: SkipList<&str> = SkipList::new();
/// sl.insert("a", 10)?;
/// sl.insert("b", 5)?;
/// assert_eq!(sl.insert("a", 10), Err(SkipListError::Duplicate));
///
/// assert_eq!(sl.find(&"b", 5).map(|node| node.score()), Some(5));
/// assert_eq!(sl.delete(&"b", 5), Ok("b"));
/// assert_eq!(sl.len(), 1);
/// # Ok::<(), SkipListError>(())
/// ```
pub struct SkipList<V, G = Binomial> {
    // Arena of nodes. The head is always the occupied slot at `HEAD`.
    slots: Vec<Slot<V>>,
    // First vacant slot, if any.
    free: Link,
    len: usize,
    // Number of levels currently in use, in `1..=total`.
    level: usize,
    // Number of forward links of the head.
    total: usize,
    level_generator: G,
}

// ///////////////////////////////////////////////
// Inherent methods
// ///////////////////////////////////////////////

impl<V> SkipList<V> {
    /// Create a new skiplist with [`MAX_LEVEL`] levels, where each inserted
    /// node is promoted one level for every success among `MAX_LEVEL - 1`
    /// independent trials of probability `1/7`.
    ///
    /// # Examples
    ///
    /// ```
    /// use datastruct::SkipList;
    ///
    /// let sl: SkipList<&str> = SkipList::new();
    /// assert_eq!(sl.level(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_level_generator(Binomial::default())
    }
}

impl<V, G: LevelGenerator> SkipList<V, G> {
    /// Create a new skiplist whose node levels are drawn from
    /// `level_generator`. The skiplist has `level_generator.total()` levels.
    ///
    /// # Examples
    ///
    /// ```
    /// use datastruct::{SkipList, level_generator::Binomial};
    ///
    /// let generator = Binomial::with_seed(8, 0.5, 42)?;
    /// let sl: SkipList<u32, _> = SkipList::with_level_generator(generator);
    /// assert_eq!(sl.max_level(), 8);
    /// # Ok::<(), datastruct::level_generator::BinomialError>(())
    /// ```
    #[inline]
    pub fn with_level_generator(level_generator: G) -> Self {
        let total = level_generator.total().max(1);
        SkipList {
            slots: vec![Slot::Occupied(SkipNode::head(total))],
            free: None,
            len: 0,
            level: 1,
            total,
            level_generator,
        }
    }

    /// Clears the skiplist, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use datastruct::SkipList;
    ///
    /// let mut sl: SkipList<_> = (0..10_i32).map(|i| (i, i64::from(i))).collect();
    /// sl.clear();
    /// assert!(sl.is_empty());
    /// assert_eq!(sl.level(), 1);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.slots = vec![Slot::Occupied(SkipNode::head(self.total))];
        self.free = None;
        self.len = 0;
        self.level = 1;
    }

    /// Returns the number of entries in the skiplist.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the skiplist contains no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of levels currently in use.
    ///
    /// This is the highest level count among the stored nodes, or 1 when the
    /// skiplist is empty.
    #[inline]
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Returns the number of levels the skiplist may grow to.
    #[inline]
    #[must_use]
    pub fn max_level(&self) -> usize {
        self.total
    }

    /// Iterates over the `(value, score)` entries in ascending score order.
    ///
    /// # Examples
    ///
    /// ```
    /// use datastruct::SkipList;
    ///
    /// let sl: SkipList<_> = [("c", 20), ("a", 10), ("b", 5)].into_iter().collect();
    /// assert!(sl.iter().eq([(&"b", 5), (&"a", 10), (&"c", 20)]));
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            slots: &self.slots,
            next: self.link(HEAD, 0),
            size: self.len,
        }
    }

    /// Iterates over the nodes linked on `level`, in ascending score order.
    ///
    /// Level 0 yields every node; higher levels yield a subset of the level
    /// below. Levels past [`max_level`][SkipList::max_level] yield nothing.
    #[inline]
    pub fn iter_level(&self, level: usize) -> LevelIter<'_, V> {
        LevelIter {
            slots: &self.slots,
            level,
            next: self.link(HEAD, level),
        }
    }

    /// Follows the forward link of node `idx` on `level`.
    fn link(&self, idx: usize, level: usize) -> Link {
        self.slots
            .get(idx)?
            .node()?
            .links
            .get(level)
            .copied()
            .flatten()
    }

    /// Returns the node following `idx` on `level`, along with its index.
    fn next_at(&self, idx: usize, level: usize) -> Option<(usize, &SkipNode<V>)> {
        let next = self.link(idx, level)?;
        Some((next, self.slots.get(next)?.node()?))
    }

    fn set_link(&mut self, idx: usize, level: usize, link: Link) {
        if let Some(slot) = self
            .slots
            .get_mut(idx)
            .and_then(Slot::node_mut)
            .and_then(|node| node.links.get_mut(level))
        {
            *slot = link;
        }
    }

    /// Moves `node` into the arena, reusing a vacant slot when there is one.
    fn alloc(&mut self, node: SkipNode<V>) -> usize {
        if let Some(idx) = self.free {
            if let Some(slot) = self.slots.get_mut(idx) {
                if let Slot::Vacant(next) = *slot {
                    self.free = next;
                    *slot = Slot::Occupied(node);
                    return idx;
                }
            }
        }
        self.slots.push(Slot::Occupied(node));
        self.slots.len() - 1
    }

    /// Takes the node out of slot `idx`, leaving the slot vacant.
    fn release(&mut self, idx: usize) -> Option<SkipNode<V>> {
        if idx == HEAD {
            return None;
        }
        let slot = self.slots.get_mut(idx)?;
        match mem::replace(slot, Slot::Vacant(self.free)) {
            Slot::Occupied(node) => {
                self.free = Some(idx);
                Some(node)
            }
            vacant @ Slot::Vacant(_) => {
                *slot = vacant;
                None
            }
        }
    }

    /// Lowers `level` to the highest level the head still links from.
    fn shrink_level(&mut self) {
        let before = self.level;
        while self.level > 1 && self.link(HEAD, self.level - 1).is_none() {
            self.level -= 1;
        }
        if self.level != before {
            debug!(from = before, to = self.level, "skiplist level lowered");
        }
    }
}

impl<V: PartialEq, G: LevelGenerator> SkipList<V, G> {
    /// Inserts `value` at `score`.
    ///
    /// The new node is placed after every node whose score is less than or
    /// equal to `score`. Its level count is drawn once from the level
    /// generator and never changes.
    ///
    /// A value is stored at most once across all scores. Checking this walks
    /// level 0, so an insertion costs `O(n)` rather than `O(log(n))`.
    ///
    /// # Errors
    ///
    /// - [`SkipListError::InvalidArgument`] if `value` is `None`.
    /// - [`SkipListError::Duplicate`] if `value` is already stored, at any
    ///   score.
    ///
    /// The skiplist is left untouched on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use datastruct::{SkipList, SkipListError};
    ///
    /// let mut sl: SkipList<&str> = SkipList::new();
    /// assert_eq!(sl.insert("x", 1), Ok(()));
    /// assert_eq!(sl.insert("x", 1), Err(SkipListError::Duplicate));
    /// assert_eq!(sl.insert("x", 9), Err(SkipListError::Duplicate));
    /// assert_eq!(sl.insert(None::<&str>, 2), Err(SkipListError::InvalidArgument));
    /// assert_eq!(sl.len(), 1);
    /// ```
    pub fn insert(
        &mut self,
        value: impl Into<Option<V>>,
        score: i64,
    ) -> Result<(), SkipListError> {
        let Some(value) = value.into() else {
            trace!(score, "rejected insert of absent value");
            return Err(SkipListError::InvalidArgument);
        };

        if let Some((_, found)) = self.iter().find(|&(stored, _)| *stored == value) {
            trace!(score, found, "rejected duplicate value");
            return Err(SkipListError::Duplicate);
        }

        // update[i] is the last node on level i with a score at most `score`,
        // so equal scores keep insertion order.
        let mut update = vec![HEAD; self.total];
        let mut current = HEAD;
        for i in (0..self.level).rev() {
            while let Some((next, node)) = self.next_at(current, i) {
                if node.score > score {
                    break;
                }
                current = next;
            }
            update[i] = current;
        }

        let levels = (self.level_generator.level() + 1).min(self.total);

        let idx = self.alloc(SkipNode::new(value, score, levels));
        for (i, &prev) in update.iter().enumerate().take(levels) {
            let next = self.link(prev, i);
            self.set_link(idx, i, next);
            self.set_link(prev, i, Some(idx));
        }

        if levels > self.level {
            debug!(from = self.level, to = levels, "skiplist level raised");
            self.level = levels;
        }
        self.len += 1;
        trace!(score, levels, len = self.len, "inserted value");
        Ok(())
    }

    /// Looks up the node holding `value` at `score`.
    ///
    /// Returns `None` if `value` is `None`, if the skiplist is empty, or if no
    /// node holds exactly this pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use datastruct::SkipList;
    ///
    /// let mut sl: SkipList<&str> = SkipList::new();
    /// sl.insert("a", 10)?;
    /// let node = sl.find(&"a", 10).expect("just inserted");
    /// assert_eq!(node.value(), Some(&"a"));
    /// assert!(sl.find(&"a", 11).is_none());
    /// # Ok::<(), datastruct::SkipListError>(())
    /// ```
    pub fn find<'q>(&self, value: impl Into<Option<&'q V>>, score: i64) -> Option<&SkipNode<V>>
    where
        V: 'q,
    {
        let value = value.into()?;
        if self.is_empty() {
            return None;
        }

        let mut current = HEAD;
        for i in (0..self.level).rev() {
            while let Some((next, node)) = self.next_at(current, i) {
                if node.matches(value, score) {
                    return Some(node);
                }
                if node.score >= score {
                    break;
                }
                current = next;
            }
        }

        // The target may sit behind other nodes sharing its score which are
        // linked on fewer levels.
        let mut cursor = current;
        while let Some((next, node)) = self.next_at(cursor, 0) {
            if node.score != score {
                break;
            }
            if node.matches(value, score) {
                return Some(node);
            }
            cursor = next;
        }
        None
    }

    /// Returns `true` if the skiplist holds `value` at `score`.
    #[inline]
    pub fn contains<'q>(&self, value: impl Into<Option<&'q V>>, score: i64) -> bool
    where
        V: 'q,
    {
        self.find(value, score).is_some()
    }

    /// Removes the node holding `value` at `score` and returns its value.
    ///
    /// The node is unlinked from every level it occupies, and the level of the
    /// skiplist drops to the highest level still in use (never below 1).
    ///
    /// # Errors
    ///
    /// - [`SkipListError::InvalidArgument`] if `value` is `None`.
    /// - [`SkipListError::NotFound`] if no node holds this pair; the skiplist
    ///   is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use datastruct::{SkipList, SkipListError};
    ///
    /// let mut sl: SkipList<&str> = SkipList::new();
    /// sl.insert("a", 10)?;
    /// assert_eq!(sl.delete(&"a", 10), Ok("a"));
    /// assert_eq!(sl.delete(&"a", 10), Err(SkipListError::NotFound));
    /// # Ok::<(), SkipListError>(())
    /// ```
    pub fn delete<'q>(
        &mut self,
        value: impl Into<Option<&'q V>>,
        score: i64,
    ) -> Result<V, SkipListError>
    where
        V: 'q,
    {
        let Some(value) = value.into() else {
            trace!(score, "rejected delete of absent value");
            return Err(SkipListError::InvalidArgument);
        };

        let mut update = vec![HEAD; self.level];
        let mut current = HEAD;
        for i in (0..self.level).rev() {
            while let Some((next, node)) = self.next_at(current, i) {
                if node.score >= score {
                    break;
                }
                current = next;
            }
            update[i] = current;
        }

        let mut target = None;
        let mut cursor = current;
        while let Some((next, node)) = self.next_at(cursor, 0) {
            if node.score != score {
                break;
            }
            if node.matches(value, score) {
                target = Some((next, node.level_count()));
                break;
            }
            cursor = next;
        }
        let Some((target, levels)) = target else {
            trace!(score, "nothing to delete");
            return Err(SkipListError::NotFound);
        };

        // On levels where the target is linked, its predecessor may be another
        // node sharing its score.
        for (i, prev) in update.iter_mut().enumerate().take(levels) {
            while let Some((next, _)) = self.next_at(*prev, i) {
                if next == target {
                    break;
                }
                *prev = next;
            }
        }

        let Some(node) = self.release(target) else {
            return Err(SkipListError::NotFound);
        };
        for (i, (&prev, &next)) in update.iter().zip(&node.links).enumerate() {
            self.set_link(prev, i, next);
        }

        self.len -= 1;
        self.shrink_level();
        trace!(score, len = self.len, "deleted value");
        node.value.ok_or(SkipListError::NotFound)
    }
}

impl<V, G: LevelGenerator> SkipList<V, G> {
    /// Checks the integrity of the skiplist.
    #[cfg(test)]
    #[expect(clippy::panic, reason = "Integrity checks are for tests")]
    fn check(&self)
    where
        V: PartialEq + fmt::Debug,
    {
        assert!(
            (1..=self.total).contains(&self.level),
            "level {} out of range",
            self.level
        );

        // Level 0 holds every node, in non-decreasing score order, with no
        // repeated value.
        let nodes: Vec<_> = self.iter_level(0).collect();
        assert_eq!(nodes.len(), self.len, "level 0 length");
        for pair in nodes.windows(2) {
            assert!(pair[0].score <= pair[1].score, "unordered scores: {pair:?}");
        }
        for (i, a) in nodes.iter().enumerate() {
            if let Some(b) = nodes[i + 1..].iter().find(|b| a.value == b.value) {
                panic!(
                    "repeated value {:?} at scores {} and {}",
                    a.value, a.score, b.score
                );
            }
        }

        let highest = nodes.iter().map(|n| n.level_count()).max().unwrap_or(1);
        assert_eq!(self.level, highest, "level is not the highest level in use");

        for level in 1..self.total {
            let expected: Vec<_> = nodes
                .iter()
                .filter(|n| n.level_count() > level)
                .map(|n| (n.score, n.value.as_ref()))
                .collect();
            let actual: Vec<_> = self
                .iter_level(level)
                .map(|n| (n.score, n.value.as_ref()))
                .collect();
            assert_eq!(actual, expected, "level {level} is not the expected subset");
        }

        let occupied = self.slots.iter().filter(|s| s.node().is_some()).count();
        assert_eq!(occupied, self.len + 1, "leaked or lost nodes");
    }
}

// ///////////////////////////////////////////////
// Trait implementation
// ///////////////////////////////////////////////

impl<V> Default for SkipList<V> {
    #[inline]
    fn default() -> SkipList<V> {
        SkipList::new()
    }
}

impl<V: PartialEq, G: LevelGenerator> Extend<(V, i64)> for SkipList<V, G> {
    /// Inserts every `(value, score)` pair, skipping those rejected by
    /// [`insert`][SkipList::insert].
    #[inline]
    fn extend<I: IntoIterator<Item = (V, i64)>>(&mut self, iterable: I) {
        for (value, score) in iterable {
            if let Err(err) = self.insert(value, score) {
                trace!(score, %err, "skipped entry while extending");
            }
        }
    }
}

impl<V: PartialEq> iter::FromIterator<(V, i64)> for SkipList<V> {
    #[inline]
    fn from_iter<I>(iter: I) -> SkipList<V>
    where
        I: IntoIterator<Item = (V, i64)>,
    {
        let mut sl = SkipList::new();
        sl.extend(iter);
        sl
    }
}

impl<'a, V, G: LevelGenerator> iter::IntoIterator for &'a SkipList<V, G> {
    type Item = (&'a V, i64);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}

impl<V, G> fmt::Display for SkipList<V, G> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "level: {}, length: {}", self.level, self.len)
    }
}

impl<V: fmt::Debug, G: LevelGenerator> fmt::Debug for SkipList<V, G> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// ////////////////////////////////////////////////////////////////////////////
// Tests
// ////////////////////////////////////////////////////////////////////////////
