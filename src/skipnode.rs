//! Nodes of the skiplist and the iterators walking them.

use std::iter::FusedIterator;

/// Index of a node within the skiplist's arena.
///
/// The sentinel head always lives at index [`HEAD`].
pub(crate) type Link = Option<usize>;

/// Arena index of the sentinel head node.
pub(crate) const HEAD: usize = 0;

// ////////////////////////////////////////////////////////////////////////////
// SkipNode
// ////////////////////////////////////////////////////////////////////////////

/// SkipNodes make up the SkipList. The SkipList owns every node in an arena
/// and nodes refer to their successors by arena index rather than by pointer.
///
/// A node linked on `n` levels has exactly `n` forward links. `links[0]` is
/// the next node in score order; `links[i]` is the next node which is also
/// linked on level `i`.
///
/// The head node has a forward link for every level of the list, the minimum
/// score, and no value.
#[derive(Clone, Debug)]
pub struct SkipNode<V> {
    // value should never be None, with the sole exception being the head node.
    pub(crate) value: Option<V>,
    pub(crate) score: i64,
    // Vector of links to the next node at the respective level. Its length is
    // the number of levels the node is linked on and never changes.
    pub(crate) links: Vec<Link>,
}

// ///////////////////////////////////////////////
// Inherent methods
// ///////////////////////////////////////////////

impl<V> SkipNode<V> {
    /// Create a new head node.
    pub(crate) fn head(total_levels: usize) -> Self {
        SkipNode {
            value: None,
            score: i64::MIN,
            links: vec![None; total_levels],
        }
    }

    /// Create a new node with the given value, linked on `levels` levels.
    /// All links default to `None`.
    pub(crate) fn new(value: V, score: i64, levels: usize) -> Self {
        SkipNode {
            value: Some(value),
            score,
            links: vec![None; levels],
        }
    }

    /// The value held by the node.
    ///
    /// Nodes handed out by the skiplist always hold a value; only the internal
    /// head node does not.
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// The score used to order the node.
    #[inline]
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// The number of levels this node is linked on, in `1..=MAX_LEVEL`.
    #[inline]
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.links.len()
    }

    /// Returns `true` if the node holds `value` at `score`.
    #[inline]
    pub(crate) fn matches(&self, value: &V, score: i64) -> bool
    where
        V: PartialEq,
    {
        self.score == score && self.value.as_ref() == Some(value)
    }
}

// ////////////////////////////////////////////////////////////////////////////
// Arena slots
// ////////////////////////////////////////////////////////////////////////////

/// A slot of the node arena. Removed nodes leave a vacant slot pointing to the
/// next vacant one so that storage is reused by later insertions.
#[derive(Clone, Debug)]
pub(crate) enum Slot<V> {
    Occupied(SkipNode<V>),
    Vacant(Link),
}

impl<V> Slot<V> {
    #[inline]
    pub(crate) fn node(&self) -> Option<&SkipNode<V>> {
        match self {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant(_) => None,
        }
    }

    #[inline]
    pub(crate) fn node_mut(&mut self) -> Option<&mut SkipNode<V>> {
        match self {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant(_) => None,
        }
    }
}

// ////////////////////////////////////////////////////////////////////////////
// Iterators
// ////////////////////////////////////////////////////////////////////////////

/// Iterator over the `(value, score)` entries of a skiplist, in ascending
/// score order.
pub struct Iter<'a, V> {
    pub(crate) slots: &'a [Slot<V>],
    pub(crate) next: Link,
    pub(crate) size: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a V, i64);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.slots.get(self.next?)?.node()?;
        self.next = node.links[0];
        self.size = self.size.saturating_sub(1);
        node.value.as_ref().map(|value| (value, node.score))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.size, Some(self.size))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}
impl<V> FusedIterator for Iter<'_, V> {}

/// Iterator over the nodes linked on a single level, in ascending score order.
pub struct LevelIter<'a, V> {
    pub(crate) slots: &'a [Slot<V>],
    pub(crate) level: usize,
    pub(crate) next: Link,
}

impl<'a, V> Iterator for LevelIter<'a, V> {
    type Item = &'a SkipNode<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.slots.get(self.next?)?.node()?;
        self.next = node.links.get(self.level).copied().flatten();
        Some(node)
    }
}

impl<V> FusedIterator for LevelIter<'_, V> {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Slot, SkipNode};

    #[test]
    fn head_node() {
        let head: SkipNode<&str> = SkipNode::head(16);
        assert_eq!(head.value(), None);
        assert_eq!(head.score(), i64::MIN);
        assert_eq!(head.level_count(), 16);
        assert!(head.links.iter().all(Option::is_none));
    }

    #[test]
    fn new_node() {
        let node = SkipNode::new("a", 3, 2);
        assert_eq!(node.value(), Some(&"a"));
        assert_eq!(node.score(), 3);
        assert_eq!(node.level_count(), 2);
        assert!(node.matches(&"a", 3));
        assert!(!node.matches(&"a", 4));
        assert!(!node.matches(&"b", 3));
    }

    #[test]
    fn slots() {
        let mut occupied = Slot::Occupied(SkipNode::new(1, 1, 1));
        let mut vacant: Slot<i32> = Slot::Vacant(None);
        assert!(occupied.node().is_some());
        assert!(occupied.node_mut().is_some());
        assert!(vacant.node().is_none());
        assert!(vacant.node_mut().is_none());
    }
}
