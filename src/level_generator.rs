//! Skiplists use a probabilistic distribution of nodes over the internal
//! levels, whereby the lowest level (level 0) contains all the nodes, and each
//! level $n > 0$ will contain a random subset of the nodes on level `n - 1`.
//!
//! The default policy used by [`SkipList`][crate::SkipList] is
//! [`Binomial`]: a node starts on level 0 and gains one extra level for each
//! success among `total - 1` independent biased trials. Unlike the classic
//! geometric policy, a failed trial does not stop the remaining ones.
//!
//! It is very unlikely that this will need to be changed as the default should
//! suffice, but if need be custom level generators can be implemented.

pub mod binomial;

pub use binomial::{Binomial, BinomialError};

// ////////////////////////////////////////////////////////////////////////////
// Level Generator
// ////////////////////////////////////////////////////////////////////////////

/// Upon the insertion of a new node in the list, the node is replicated to high
/// levels with a certain probability as determined by a [`LevelGenerator`].
pub trait LevelGenerator {
    /// The total number of levels that are assumed to exist.
    #[must_use]
    fn total(&self) -> usize;

    /// Generate a random level for a new node in the range `[0, total)`.
    ///
    /// This function should _never_ return a level greater or equal to
    /// [`total`][LevelGenerator::total]. A node given level `n` is linked on
    /// levels `0..=n`.
    #[must_use]
    fn level(&mut self) -> usize;
}
