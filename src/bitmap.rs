//! A fixed-size set of bit positions.

use std::fmt;

/// A fixed-size bitmap.
///
/// A bitmap created for `length` bits allocates `length / 8 + 1` bytes, so
/// every position in `0..length` is addressable (along with the spare bits of
/// the last byte). Positions past the end are never an error: setting them
/// does nothing and reading them yields `false`.
///
/// # Examples
///
/// ```
/// use datastruct::Bitmap;
///
/// let mut bitmap = Bitmap::new(100);
/// bitmap.set(42);
/// bitmap.set(1_000);
/// assert!(bitmap.get(42));
/// assert!(!bitmap.get(43));
/// assert!(!bitmap.get(1_000));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Bitmap {
    bytes: Vec<u8>,
}

impl Bitmap {
    /// Create a bitmap able to hold at least `length` bits, all unset.
    #[inline]
    #[must_use]
    pub fn new(length: usize) -> Self {
        Bitmap {
            bytes: vec![0; length / 8 + 1],
        }
    }

    /// The number of addressable bit positions.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.bytes.len() * 8
    }

    /// Sets the bit at `position`. Out-of-range positions are ignored.
    #[inline]
    pub fn set(&mut self, position: usize) {
        if let Some(byte) = self.bytes.get_mut(position / 8) {
            *byte |= 1 << (position % 8);
        }
    }

    /// Unsets the bit at `position`. Out-of-range positions are ignored.
    #[inline]
    pub fn clear(&mut self, position: usize) {
        if let Some(byte) = self.bytes.get_mut(position / 8) {
            *byte &= !(1 << (position % 8));
        }
    }

    /// Returns `true` if the bit at `position` is set, and `false` if it is
    /// unset or out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> bool {
        self.bytes
            .get(position / 8)
            .is_some_and(|byte| byte & (1 << (position % 8)) != 0)
    }

    /// The number of set bits.
    #[inline]
    #[must_use]
    #[expect(clippy::as_conversions, reason = "At most 8 ones per byte")]
    pub fn count_ones(&self) -> usize {
        self.bytes.iter().map(|byte| byte.count_ones() as usize).sum()
    }
}

impl fmt::Display for Bitmap {
    /// Writes the bits from position 0 upwards as `0`s and `1`s.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for position in 0..self.capacity() {
            f.write_str(if self.get(position) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("capacity", &self.capacity())
            .field("ones", &self.count_ones())
            .finish()
    }
}
