//! A skiplist is a way of storing elements in such a way that elements can be
//! efficiently inserted, looked up and removed, all in `O(log(n))` on average.
//!
//! Conceptually, a skiplist resembles something like:
//!
//! ```text
//! <head> ----------> [2] --------------------------------------------------> [9] ---------->
//! <head> ----------> [2] ------------------------------------[7] ----------> [9] ---------->
//! <head> ----------> [2] ----------> [4] ------------------> [7] ----------> [9] --> [10] ->
//! <head> --> [1] --> [2] --> [3] --> [4] --> [5] --> [6] --> [7] --> [8] --> [9] --> [10] ->
//! ```
//!
//! where each node `[x]` has references to nodes further down the list,
//! allowing the algorithm to effectively skip ahead.
//!
//! The [`SkipList`] in this crate orders arbitrary values by an integer score.
//! Each value is stored at most once, whatever its score, and nodes sharing a
//! score keep the order in which they were inserted.
//!
//! Two independent helpers live alongside it:
//!
//! - [`Bitmap`], a fixed-size set of bit positions which silently ignores
//!   out-of-range positions.
//! - [`heap`], binary-heap algorithms (push, pop, remove, fix) over any
//!   collection implementing [`heap::Heap`].
//!
//! None of the structures synchronise internally; share them across threads
//! behind a lock.

pub mod bitmap;
pub mod heap;
pub mod level_generator;
mod skiplist;
mod skipnode;
pub mod sort;

pub use bitmap::Bitmap;
pub use skiplist::{MAX_LEVEL, SkipList, SkipListError};
pub use skipnode::{Iter, LevelIter, SkipNode};
