//! Rotated scan order.

use crate::random::RandomSource;
use std::iter::FusedIterator;

/// Yields `start, start+1, .., len-1, 0, .., start-1`.
///
/// A cyclic rotation of `0..len`. Copying the value before iterating
/// gives a restartable scan.
///
/// # Examples
///
/// ```
/// use u_balance::rotation::RotatedRange;
///
/// let order: Vec<usize> = RotatedRange::new(2, 5).collect();
/// assert_eq!(order, vec![2, 3, 4, 0, 1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotatedRange {
    start: usize,
    len: usize,
    emitted: usize,
}

impl RotatedRange {
    /// Creates the rotation of `0..len` beginning at `start % len`.
    pub fn new(start: usize, len: usize) -> Self {
        let start = if len == 0 { 0 } else { start % len };
        Self {
            start,
            len,
            emitted: 0,
        }
    }

    /// Creates a rotation with a uniformly drawn start. Consumes one draw.
    ///
    /// # Panics
    /// Panics if `len` is zero.
    pub fn random<R: RandomSource>(rng: &mut R, len: usize) -> Self {
        Self::new(rng.next_int(len), len)
    }

    /// First index of the scan.
    pub fn start(&self) -> usize {
        self.start
    }
}

impl Iterator for RotatedRange {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.emitted == self.len {
            return None;
        }
        let mut index = self.start + self.emitted;
        if index >= self.len {
            index -= self.len;
        }
        self.emitted += 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.len - self.emitted;
        (left, Some(left))
    }
}

impl ExactSizeIterator for RotatedRange {}

impl FusedIterator for RotatedRange {}
