//! Conway's Game of Life on a zero-padded [`Grid`].

use crate::{Cell, Direction, GetNeighbors, Grid, MooreDirection, Sim};
use itertools::iproduct;
use log::trace;

/// Conway's Game of Life (B3/S23).
///
/// A live cell survives with two or three live neighbors and a dead cell is born with exactly
/// three. The rule is fixed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Life;

impl Life {
    /// The B3/S23 transition for one cell.
    #[inline]
    pub fn next_state(cell: Cell, live_neighbors: u8) -> Cell {
        match (cell, live_neighbors) {
            (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

impl Sim for Life {
    type Cell = Cell;
    /// The current state of the cell and its number of live neighbors.
    type Neighborhood = (Cell, u8);
    type Generation = Grid;

    #[inline]
    fn compute(&self, (cell, live_neighbors): (Cell, u8)) -> Cell {
        Life::next_state(cell, live_neighbors)
    }

    fn step(&self, grid: &Grid) -> Grid {
        let mut next = grid.clone();
        for pos in iproduct!(0..grid.rows(), 0..grid.cols()) {
            next[pos] = self.compute((grid[pos], count_neighbors(grid, pos)));
        }
        trace!(
            "life step on {}x{} grid, population {} -> {}",
            grid.rows(),
            grid.cols(),
            grid.population(),
            next.population()
        );
        next
    }
}

/// Count the live neighbors of a cell. Positions outside of the grid count as dead.
///
/// Cells away from the edge take the unchecked path, everything else the bounds-checked one.
/// Both always agree.
#[inline]
pub fn count_neighbors(grid: &Grid, pos: (usize, usize)) -> u8 {
    if grid.is_interior(pos) {
        count_interior_neighbors(grid, pos)
    } else {
        count_border_neighbors(grid, pos)
    }
}

/// Count the live neighbors of a cell whose eight neighbors are all inside the grid.
///
/// Panics if `pos` touches the edge.
#[inline]
pub fn count_interior_neighbors(grid: &Grid, (row, col): (usize, usize)) -> u8 {
    MooreDirection::directions()
        .map(|dir| {
            let (dr, dc) = dir.delta();
            grid[((row as isize + dr) as usize, (col as isize + dc) as usize)]
        })
        .filter(|cell| cell.is_alive())
        .count() as u8
}

/// Count the live neighbors of any cell, treating neighbors past the edge as dead.
#[inline]
pub fn count_border_neighbors(grid: &Grid, pos: (usize, usize)) -> u8 {
    grid.get_neighbors(pos).live_count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn survival() {
        for n in 0..=8 {
            let expected = if n == 2 || n == 3 {
                Cell::Alive
            } else {
                Cell::Dead
            };
            assert_eq!(Life::next_state(Cell::Alive, n), expected, "n = {}", n);
        }
    }

    #[test]
    fn birth() {
        for n in 0..=8 {
            let expected = if n == 3 { Cell::Alive } else { Cell::Dead };
            assert_eq!(Life::next_state(Cell::Dead, n), expected, "n = {}", n);
        }
    }

    #[test]
    fn single_cell_sees_nothing() {
        let grid = Grid::from_live_cells(1, 1, vec![(0, 0)]).unwrap();
        assert_eq!(count_neighbors(&grid, (0, 0)), 0);
        assert_eq!(Life.step(&grid), Grid::new(1, 1).unwrap());
    }

    #[test]
    fn corners_see_at_most_three() {
        let grid = Grid::from_fn(4, 5, |_, _| true).unwrap();
        for &corner in &[(0, 0), (0, 4), (3, 0), (3, 4)] {
            assert_eq!(count_neighbors(&grid, corner), 3);
        }
        assert_eq!(count_neighbors(&grid, (0, 2)), 5);
        assert_eq!(count_neighbors(&grid, (2, 2)), 8);
    }

    #[test]
    fn full_row_counts() {
        let grid = Grid::from_fn(1, 4, |_, _| true).unwrap();
        assert_eq!(count_neighbors(&grid, (0, 0)), 1);
        assert_eq!(count_neighbors(&grid, (0, 1)), 2);
    }

    #[test]
    fn interior_matches_border() {
        let grid = Grid::from_fn(6, 7, |row, col| (row * 7 + col) % 3 == 0).unwrap();
        for row in 1..5 {
            for col in 1..6 {
                assert_eq!(
                    count_interior_neighbors(&grid, (row, col)),
                    count_border_neighbors(&grid, (row, col))
                );
            }
        }
    }

    #[test]
    fn block_is_still() {
        let block = Grid::from_live_cells(4, 4, vec![(1, 1), (1, 2), (2, 1), (2, 2)]).unwrap();
        assert_eq!(Life.step(&block), block);
    }

    #[test]
    fn block_in_corner_is_still() {
        let block = Grid::from_live_cells(2, 2, vec![(0, 0), (0, 1), (1, 0), (1, 1)]).unwrap();
        assert_eq!(Life.step(&block), block);
    }
}
