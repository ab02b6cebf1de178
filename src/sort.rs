//! Index-based ordering capability shared by the [`heap`][crate::heap]
//! algorithms.

/// A collection whose elements can be compared and swapped by index.
///
/// Implementors are free to store their elements however they like; the
/// algorithms only ever address them by position in `0..len()`.
pub trait Sortable {
    /// The number of elements in the collection.
    #[must_use]
    fn len(&self) -> usize;

    /// Returns `true` if the element at `i` must sort before the element at
    /// `j`.
    #[must_use]
    fn less(&self, i: usize, j: usize) -> bool;

    /// Swaps the elements at `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);

    /// Returns `true` if the collection has no elements.
    #[inline]
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Ord> Sortable for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Sortable;

    #[test]
    fn vec() {
        let mut v = vec![3, 1, 2];
        assert_eq!(Sortable::len(&v), 3);
        assert!(!Sortable::is_empty(&v));
        assert!(v.less(1, 0));
        assert!(!v.less(0, 2));
        Sortable::swap(&mut v, 0, 1);
        assert_eq!(v, vec![1, 3, 2]);
        assert!(Sortable::is_empty(&Vec::<u8>::new()));
    }
}
