//! Binomial level generator.

use rand::prelude::*;
use thiserror::Error;

use crate::level_generator::LevelGenerator;

/// Number of levels used by the default generator.
pub const DEFAULT_TOTAL: usize = 16;

/// Success probability of each promotion trial used by the default generator.
pub const DEFAULT_P: f64 = 1.0 / 7.0;

#[derive(Error, Debug, PartialEq, Eq)]
/// Errors that can occur when creating a [`Binomial`] level generator.
#[expect(
    clippy::module_name_repetitions,
    reason = "Using 'Error' would be too generic and may cause confusion."
)]
#[non_exhaustive]
pub enum BinomialError {
    /// The maximum number of levels must be non-zero.
    #[error("max must be non-zero.")]
    ZeroMax,
    /// The probability `$p$` must be in the range `$(0, 1)$`.
    #[error("p must be in (0, 1).")]
    InvalidProbability,
}

/// A level generator counting successes among independent biased trials.
///
/// For a generator with `$t$` total levels, every new node performs `$t - 1$`
/// independent trials, each succeeding with probability `$p$`, and is placed
/// on level `$k$` where `$k$` is the number of successes. A failed trial does
/// not stop the subsequent ones, so the level follows a binomial distribution
/// `$B(t - 1, p)$`.
///
/// With the defaults (`$t = 16$`, `$p = 1/7$`) the expected level is a little
/// over 2 and the highest level is reached with negligible probability.
#[derive(Debug)]
pub struct Binomial {
    /// The total number of levels that are assumed to exist.
    total: usize,
    /// The probability that a single trial promotes the node one level.
    p: f64,
    /// The random number generator.
    rng: SmallRng,
}

impl Binomial {
    /// Create a new binomial level generator with `total` number of levels,
    /// and `p` as the success probability of each of the `total - 1` trials.
    ///
    /// # Errors
    ///
    /// `p` must be strictly between 0 and 1, and `total` must be at least 1.
    #[inline]
    pub fn new(total: usize, p: f64) -> Result<Self, BinomialError> {
        Self::validate(total, p)?;
        Ok(Binomial {
            total,
            p,
            rng: SmallRng::from_rng(&mut rand::rng()),
        })
    }

    /// Same as [`new`][Binomial::new], but with a seeded random number
    /// generator so that the produced levels are reproducible.
    ///
    /// # Errors
    ///
    /// See [`new`][Binomial::new].
    #[inline]
    pub fn with_seed(total: usize, p: f64, seed: u64) -> Result<Self, BinomialError> {
        Self::validate(total, p)?;
        Ok(Binomial {
            total,
            p,
            rng: SmallRng::seed_from_u64(seed),
        })
    }

    /// The success probability of a single trial.
    #[inline]
    #[must_use]
    pub fn p(&self) -> f64 {
        self.p
    }

    fn validate(total: usize, p: f64) -> Result<(), BinomialError> {
        if total == 0 {
            return Err(BinomialError::ZeroMax);
        }
        if !(0.0 < p && p < 1.0) {
            return Err(BinomialError::InvalidProbability);
        }
        Ok(())
    }
}

impl Default for Binomial {
    #[inline]
    fn default() -> Self {
        Binomial {
            total: DEFAULT_TOTAL,
            p: DEFAULT_P,
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }
}

impl LevelGenerator for Binomial {
    #[inline]
    fn total(&self) -> usize {
        self.total
    }

    #[inline]
    fn level(&mut self) -> usize {
        let mut level = 0;
        for _ in 1..self.total {
            if self.rng.random_bool(self.p) {
                level += 1;
            }
        }
        level
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{Binomial, BinomialError, DEFAULT_P, DEFAULT_TOTAL, LevelGenerator};

    #[test]
    fn invalid_max() {
        assert_eq!(Binomial::new(0, 0.5).err(), Some(BinomialError::ZeroMax));
    }

    #[rstest]
    #[case(0.0)]
    #[case(1.0)]
    #[case(-0.5)]
    #[case(f64::NAN)]
    fn invalid_p(#[case] p: f64) {
        assert_eq!(
            Binomial::new(4, p).err(),
            Some(BinomialError::InvalidProbability)
        );
    }

    #[test]
    fn defaults() {
        let generator = Binomial::default();
        assert_eq!(generator.total(), DEFAULT_TOTAL);
        assert!((generator.p() - DEFAULT_P).abs() < f64::EPSILON);
    }

    #[test]
    fn single_level_never_promotes() -> Result<()> {
        let mut generator = Binomial::new(1, 0.99)?;
        for _ in 0..1_000 {
            assert_eq!(generator.level(), 0);
        }
        Ok(())
    }

    #[rstest]
    fn in_range(
        #[values(1, 2, 16, 64)] n: usize,
        #[values(0.01, 1.0 / 7.0, 0.5, 0.99)] p: f64,
    ) -> Result<()> {
        let mut generator = Binomial::new(n, p)?;
        assert_eq!(generator.total(), n);
        for _ in 0..10_000 {
            assert!((0..n).contains(&generator.level()));
        }
        Ok(())
    }

    #[test]
    fn seeded_is_reproducible() -> Result<()> {
        let mut a = Binomial::with_seed(16, 0.5, 42)?;
        let mut b = Binomial::with_seed(16, 0.5, 42)?;
        let xs: Vec<_> = (0..100).map(|_| a.level()).collect();
        let ys: Vec<_> = (0..100).map(|_| b.level()).collect();
        assert_eq!(xs, ys);
        Ok(())
    }

    #[test]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        clippy::as_conversions,
        reason = "Sample statistics"
    )]
    fn mean_matches_binomial() -> Result<()> {
        // The mean of B(n, p) is n * p; a geometric policy would give p / (1 - p).
        let mut generator = Binomial::with_seed(DEFAULT_TOTAL, DEFAULT_P, 7)?;
        let samples = 200_000;
        let sum: usize = (0..samples).map(|_| generator.level()).sum();
        let mean = sum as f64 / f64::from(samples);
        let expected = (DEFAULT_TOTAL - 1) as f64 * DEFAULT_P;
        assert!((mean - expected).abs() < 0.05, "mean {mean} vs {expected}");
        Ok(())
    }
}
