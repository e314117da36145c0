//! Fixed-size N×N bit mask packed into an unsigned integer.
//!
//! Used for the attacker's knowledge of the opponent board, where a cell is
//! only ever "hit", "miss" or unknown and a pair of masks is all we need.

use core::fmt;
use core::ops::BitOr;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::GameError;

/// Row or column index is out of bounds [0..N).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds {
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IndexOutOfBounds: row={}, col={}", self.row, self.col)
    }
}

impl From<OutOfBounds> for GameError {
    fn from(_: OutOfBounds) -> Self {
        GameError::InvalidCoordinate
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    // Rejects at compile time any N whose N*N cells do not fit in T.
    const FITS: () = assert!(N * N <= core::mem::size_of::<T>() * 8);

    #[inline]
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let _ = Self::FITS;
        BitBoard { bits: T::zero() }
    }

    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, OutOfBounds> {
        let idx = Self::index(row, col)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Sets the bit at (row, col).
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), OutOfBounds> {
        let idx = Self::index(row, col)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    #[inline]
    fn index(row: usize, col: usize) -> Result<usize, OutOfBounds> {
        if row >= N || col >= N {
            Err(OutOfBounds { row, col })
        } else {
            Ok(row * N + col)
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>:", N)?;
        for r in 0..N {
            for c in 0..N {
                let bit = if self.get(r, c).unwrap_or(false) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}
