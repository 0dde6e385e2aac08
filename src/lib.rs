//! Cellsim evaluates discrete cellular automata over generations of fixed size.
//!
//! Two engines are provided. [`Life`] runs Conway's Game of Life (B3/S23) on a [`Grid`], and a
//! [`RuleTable`] runs any of the 256 elementary automata (such as rule 110) on a [`Sequence`].
//! In both cases cells beyond the edge are treated as dead; nothing wraps around.
//!
//! Stepping never mutates its input. Every call to [`Sim::step`] produces a brand new
//! generation, so callers are free to keep or drop previous ones.
//!
//! ```
//! use cellsim::{patterns, Life, RuleTable, Sim};
//!
//! let glider = patterns::glider();
//! let moved = Life.step_n(&glider, 4);
//! assert_eq!(moved.population(), 5);
//!
//! let rule = RuleTable::decode(110);
//! let next = rule.step(&patterns::rule_110_seed());
//! assert_eq!(next.to_string(), "#   ##### ##  ");
//! ```

mod cell;
mod direction;
pub mod elementary;
mod error;
mod grid;
pub mod life;
mod moore;
mod neighborhood;
pub mod patterns;
mod sequence;

pub use cell::*;
pub use direction::*;
pub use elementary::{RuleTable, Triplet};
pub use error::*;
pub use grid::*;
pub use life::Life;
pub use moore::*;
pub use neighborhood::*;
pub use sequence::*;

use std::fmt;

/// Defines a synchronous simulation where every new cell is produced only from the old generation.
///
/// This prevents the update order from breaking the simulation.
pub trait Sim {
    /// The state of a single cell.
    type Cell;
    /// Everything the rule looks at to decide the next state of one cell.
    type Neighborhood;
    /// A full snapshot of all cells.
    type Generation: Clone;

    /// Compute the next state of one cell from its neighborhood.
    fn compute(&self, cells: Self::Neighborhood) -> Self::Cell;

    /// Produce the next generation. The input is left untouched.
    fn step(&self, generation: &Self::Generation) -> Self::Generation;

    /// Advance `n` generations. `n == 0` returns a copy of the input.
    fn step_n(&self, generation: &Self::Generation, n: usize) -> Self::Generation {
        (0..n).fold(generation.clone(), |current, _| self.step(&current))
    }

    /// An endless iterator over `first` and every generation that follows it.
    fn generations(&self, first: Self::Generation) -> Generations<'_, Self>
    where
        Self: Sized,
    {
        Generations {
            sim: self,
            next: first,
        }
    }
}

/// Iterator returned by [`Sim::generations`].
pub struct Generations<'a, S: Sim> {
    sim: &'a S,
    next: S::Generation,
}

impl<'a, S> fmt::Debug for Generations<'a, S>
where
    S: Sim + fmt::Debug,
    S::Generation: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generations")
            .field("sim", &self.sim)
            .field("next", &self.next)
            .finish()
    }
}

impl<'a, S: Sim> Iterator for Generations<'a, S> {
    type Item = S::Generation;

    fn next(&mut self) -> Option<S::Generation> {
        let following = self.sim.step(&self.next);
        Some(std::mem::replace(&mut self.next, following))
    }
}
