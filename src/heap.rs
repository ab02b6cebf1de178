//! Binary heap algorithms over any [`Heap`] collection.
//!
//! A heap is a tree where every node sorts before its children according to
//! [`Sortable::less`]; the first element is therefore the minimum. The tree is
//! stored implicitly in the collection: the children of the element at `i`
//! are at `2i + 1` and `2i + 2`.
//!
//! These functions do not own any storage. They reorder the collection
//! through [`Sortable::swap`] and let it grow or shrink at its end through
//! [`Heap::push`] and [`Heap::pop`], so priority queues with extra
//! bookkeeping (such as tracking where each element sits) can be built on
//! top of them.
//!
//! ```
//! use datastruct::heap;
//!
//! let mut h = vec![5, 2, 8];
//! heap::init(&mut h);
//! heap::push(&mut h, 3);
//! assert_eq!(heap::pop(&mut h), Some(2));
//! assert_eq!(heap::pop(&mut h), Some(3));
//! ```

use crate::sort::Sortable;

/// A collection that can be used as a binary heap.
///
/// [`push`][Heap::push] and [`pop`][Heap::pop] only append to and remove from
/// the end of the collection; the heap functions take care of the ordering.
/// Use [`heap::push`][push] and [`heap::pop`][pop] to add and remove
/// elements while keeping the heap ordered.
pub trait Heap: Sortable {
    /// The type of the elements.
    type Item;

    /// Appends `item` as the last element.
    fn push(&mut self, item: Self::Item);

    /// Removes and returns the last element.
    fn pop(&mut self) -> Option<Self::Item>;
}

impl<T: Ord> Heap for Vec<T> {
    type Item = T;

    #[inline]
    fn push(&mut self, item: T) {
        Vec::push(self, item);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }
}

/// Establishes the heap ordering over the whole collection, in `O(n)`.
#[inline]
pub fn init<H: Heap + ?Sized>(h: &mut H) {
    let n = h.len();
    for i in (0..n / 2).rev() {
        down(h, i, n);
    }
}

/// Pushes `item` onto the heap, in `O(log(n))`.
#[inline]
pub fn push<H: Heap + ?Sized>(h: &mut H, item: H::Item) {
    h.push(item);
    if let Some(last) = h.len().checked_sub(1) {
        up(h, last);
    }
}

/// Removes and returns the minimum element, in `O(log(n))`.
///
/// Returns `None` if the heap is empty.
#[inline]
pub fn pop<H: Heap + ?Sized>(h: &mut H) -> Option<H::Item> {
    let n = h.len().checked_sub(1)?;
    h.swap(0, n);
    down(h, 0, n);
    h.pop()
}

/// Removes and returns the element at index `i`, in `O(log(n))`.
///
/// Returns `None` if `i` is out of range.
#[inline]
pub fn remove<H: Heap + ?Sized>(h: &mut H, i: usize) -> Option<H::Item> {
    let n = h.len().checked_sub(1)?;
    if i > n {
        return None;
    }
    if i != n {
        h.swap(i, n);
        if !down(h, i, n) {
            up(h, i);
        }
    }
    h.pop()
}

/// Restores the heap ordering after the element at index `i` changed, in
/// `O(log(n))`.
///
/// Out-of-range indices are ignored.
#[inline]
pub fn fix<H: Heap + ?Sized>(h: &mut H, i: usize) {
    let n = h.len();
    if i < n && !down(h, i, n) {
        up(h, i);
    }
}

/// Moves the element at `j` towards the root while it sorts before its
/// parent.
fn up<H: Heap + ?Sized>(h: &mut H, mut j: usize) {
    while j > 0 {
        let i = (j - 1) / 2;
        if !h.less(j, i) {
            break;
        }
        h.swap(i, j);
        j = i;
    }
}

/// Moves the element at `i0` towards the leaves of the first `n` elements
/// while one of its children sorts before it.
///
/// Returns `true` if the element moved.
fn down<H: Heap + ?Sized>(h: &mut H, i0: usize, n: usize) -> bool {
    let mut i = i0;
    loop {
        let Some(left) = i.checked_mul(2).and_then(|x| x.checked_add(1)) else {
            break;
        };
        if left >= n {
            break;
        }
        let mut j = left;
        let right = left + 1;
        if right < n && h.less(right, left) {
            j = right;
        }
        if !h.less(j, i) {
            break;
        }
        h.swap(i, j);
        i = j;
    }
    i > i0
}
