//! Elementary (1D, three-cell window) cellular automata.
//!
//! A rule byte is decoded into an 8-entry [`RuleTable`]. The table is indexed by a window whose
//! *left* cell is the least significant bit:
//!
//! ```text
//! index = (right << 2) | (center << 1) | left
//! ```
//!
//! This is mirrored from the usual textbook reading of Wolfram codes, so rule 110 here is the
//! mirror image of the textbook rule 110 (textbook rule 124).

use crate::{Sequence, Sim};
use log::{debug, trace};
use std::ops::Index;

/// Commonly used rule bytes.
pub mod rules {
    pub const RULE_30: u8 = 30;
    pub const RULE_90: u8 = 90;
    pub const RULE_110: u8 = 110;
    pub const RULE_184: u8 = 184;
}

/// The left/center/right window around one cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Triplet {
    pub left: bool,
    pub center: bool,
    pub right: bool,
}

impl Triplet {
    #[inline]
    pub fn new(left: bool, center: bool, right: bool) -> Self {
        Triplet {
            left,
            center,
            right,
        }
    }

    /// The window around `ix`. Cells past either end are `false`.
    #[inline]
    pub fn around(sequence: &Sequence, ix: usize) -> Self {
        let left = ix.checked_sub(1).and_then(|l| sequence.get(l));
        Triplet {
            left: left.unwrap_or(false),
            center: sequence[ix],
            right: sequence.get(ix + 1).unwrap_or(false),
        }
    }

    /// Position of this window in a [`RuleTable`].
    #[inline]
    pub fn index(self) -> usize {
        (self.right as usize) << 2 | (self.center as usize) << 1 | self.left as usize
    }
}

impl From<(bool, bool, bool)> for Triplet {
    #[inline]
    fn from((left, center, right): (bool, bool, bool)) -> Self {
        Triplet::new(left, center, right)
    }
}

/// Next center state for each of the 8 possible windows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleTable {
    entries: [bool; 8],
}

impl RuleTable {
    /// Entry `i` of the table is bit `i` of `rule`. Every byte is a valid rule.
    pub fn decode(rule: u8) -> Self {
        let mut entries = [false; 8];
        for (i, entry) in entries.iter_mut().enumerate() {
            *entry = (rule >> i) & 1 != 0;
        }
        debug!("decoded rule {} into {:?}", rule, entries);
        RuleTable { entries }
    }

    /// The rule byte this table was decoded from.
    pub fn number(&self) -> u8 {
        self.entries
            .iter()
            .enumerate()
            .filter(|&(_, &entry)| entry)
            .fold(0u8, |rule, (i, _)| rule | 1u8 << i)
    }

    #[inline]
    pub fn entries(&self) -> &[bool; 8] {
        &self.entries
    }

    /// Next state of the center cell of `neighborhood`.
    #[inline]
    pub fn apply(&self, neighborhood: impl Into<Triplet>) -> bool {
        self.entries[neighborhood.into().index()]
    }
}

impl From<u8> for RuleTable {
    #[inline]
    fn from(rule: u8) -> Self {
        RuleTable::decode(rule)
    }
}

impl Index<usize> for RuleTable {
    type Output = bool;

    #[inline]
    fn index(&self, ix: usize) -> &bool {
        &self.entries[ix]
    }
}

impl Sim for RuleTable {
    type Cell = bool;
    type Neighborhood = Triplet;
    type Generation = Sequence;

    #[inline]
    fn compute(&self, window: Triplet) -> bool {
        self.apply(window)
    }

    fn step(&self, sequence: &Sequence) -> Sequence {
        let mut next = sequence.clone();
        for ix in 0..sequence.len() {
            next[ix] = self.compute(Triplet::around(sequence, ix));
        }
        trace!(
            "rule {} step on {} cells, population {} -> {}",
            self.number(),
            sequence.len(),
            sequence.population(),
            next.population()
        );
        next
    }
}
