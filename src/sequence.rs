use crate::cell::state_char;
use crate::{Error, Result};
use std::convert::TryFrom;
use std::fmt;
use std::ops::{Index, IndexMut};

/// A fixed-length generation of a 1D automaton.
///
/// A sequence always holds at least three cells so that every position has a full
/// left/center/right window. The length never changes after construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<bool>", into = "Vec<bool>")
)]
pub struct Sequence {
    cells: Vec<bool>,
}

impl Sequence {
    /// The shortest sequence that can be stepped.
    pub const MIN_LEN: usize = 3;

    /// Make a sequence of `len` dead cells.
    pub fn new(len: usize) -> Result<Self> {
        Self::from_cells(vec![false; len])
    }

    /// Make a sequence from an iter of cells.
    pub fn from_cells<I>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = bool>,
    {
        let cells: Vec<bool> = iter.into_iter().collect();
        if cells.len() < Self::MIN_LEN {
            return Err(Error::InvalidLength { len: cells.len() });
        }
        Ok(Sequence { cells })
    }

    /// Make a sequence by evaluating each index with a closure.
    pub fn from_fn<F>(len: usize, f: F) -> Result<Self>
    where
        F: FnMut(usize) -> bool,
    {
        Self::from_cells((0..len).map(f))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false, a sequence is never shorter than [`Sequence::MIN_LEN`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Get a cell, or `None` if the index is out of bounds.
    #[inline]
    pub fn get(&self, ix: usize) -> Option<bool> {
        self.cells.get(ix).copied()
    }

    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells[..]
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }
}

impl Index<usize> for Sequence {
    type Output = bool;

    #[inline]
    fn index(&self, ix: usize) -> &bool {
        &self.cells[ix]
    }
}

impl IndexMut<usize> for Sequence {
    #[inline]
    fn index_mut(&mut self, ix: usize) -> &mut bool {
        &mut self.cells[ix]
    }
}

impl TryFrom<Vec<bool>> for Sequence {
    type Error = Error;

    fn try_from(cells: Vec<bool>) -> Result<Self> {
        Sequence::from_cells(cells)
    }
}

impl From<Sequence> for Vec<bool> {
    fn from(sequence: Sequence) -> Self {
        sequence.cells
    }
}

/// Cells are printed side by side with no trailing newline.
impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &cell in &self.cells {
            write!(f, "{}", state_char(cell))?;
        }
        Ok(())
    }
}
