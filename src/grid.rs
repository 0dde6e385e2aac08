use crate::{Cell, Error, Result};
use boolinator::Boolinator;
use itertools::iproduct;
use std::convert::TryFrom;
use std::fmt;
use std::ops::{Index, IndexMut};

/// A fixed-size rectangular generation of a 2D automaton.
///
/// Cells are stored row-major and addressed as `grid[(row, col)]`. The shape is chosen at
/// construction and never changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridRepr")
)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Make a new grid where every cell is dead.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let size = Self::check_shape(rows, cols)?;
        Ok(Grid {
            rows,
            cols,
            cells: vec![Cell::Dead; size],
        })
    }

    /// Make a new grid directly from a row-major iter of cells.
    pub fn from_cells<I, C>(rows: usize, cols: usize, iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let size = Self::check_shape(rows, cols)?;
        let cells: Vec<Cell> = iter.into_iter().map(Into::into).collect();
        if cells.len() != size {
            return Err(Error::ShapeMismatch {
                expected: size,
                actual: cells.len(),
            });
        }
        Ok(Grid { rows, cols, cells })
    }

    /// Make a grid by evaluating each `(row, col)` coordinate to a cell with a closure.
    pub fn from_fn<F, C>(rows: usize, cols: usize, mut coord_map: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> C,
        C: Into<Cell>,
    {
        Self::from_cells(
            rows,
            cols,
            iproduct!(0..rows, 0..cols).map(|(row, col)| coord_map(row, col)),
        )
    }

    /// Make a grid where exactly the given `(row, col)` coordinates are alive.
    pub fn from_live_cells<I>(rows: usize, cols: usize, coords: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::new(rows, cols)?;
        for (row, col) in coords {
            if !grid.contains((row, col)) {
                return Err(Error::OutOfBounds {
                    row,
                    col,
                    rows,
                    cols,
                });
            }
            grid[(row, col)] = Cell::Alive;
        }
        Ok(grid)
    }

    /// Number of cells in a `rows` by `cols` grid.
    fn check_shape(rows: usize, cols: usize) -> Result<usize> {
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyGrid { rows, cols });
        }
        rows.checked_mul(cols)
            .ok_or(Error::ShapeOverflow { rows, cols })
    }

    /// Get the number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the Grid's size.
    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Get the Grid's Cell slice in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells[..]
    }

    /// Iterate over the rows of the grid.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.cols)
    }

    #[inline]
    pub fn contains(&self, (row, col): (usize, usize)) -> bool {
        row < self.rows && col < self.cols
    }

    /// True when all eight neighbors of the position lie inside the grid.
    #[inline]
    pub fn is_interior(&self, (row, col): (usize, usize)) -> bool {
        row > 0 && col > 0 && row + 1 < self.rows && col + 1 < self.cols
    }

    /// Get a cell, or `None` if the position is out of bounds.
    #[inline]
    pub fn get(&self, pos: (usize, usize)) -> Option<Cell> {
        self.contains(pos).as_some_from(|| self.cells[self.flat_index(pos)])
    }

    /// Offset a position by a `(row, col)` delta, returning `None` if it leaves the grid.
    ///
    /// Edges never wrap around.
    #[inline]
    pub fn offset(
        &self,
        (row, col): (usize, usize),
        delta: (isize, isize),
    ) -> Option<(usize, usize)> {
        let row = row as isize + delta.0;
        let col = col as isize + delta.1;
        (row >= 0 && col >= 0)
            .as_some((row as usize, col as usize))
            .filter(|&pos| self.contains(pos))
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    #[inline]
    fn flat_index(&self, (row, col): (usize, usize)) -> usize {
        row * self.cols + col
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Cell;

    /// Panics if the position is out of bounds.
    #[inline]
    fn index(&self, pos: (usize, usize)) -> &Cell {
        assert!(
            self.contains(pos),
            "cellsim::Grid::index: {:?} is outside of the {}x{} grid",
            pos,
            self.rows,
            self.cols
        );
        &self.cells[self.flat_index(pos)]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    /// Panics if the position is out of bounds.
    #[inline]
    fn index_mut(&mut self, pos: (usize, usize)) -> &mut Cell {
        assert!(
            self.contains(pos),
            "cellsim::Grid::index_mut: {:?} is outside of the {}x{} grid",
            pos,
            self.rows,
            self.cols
        );
        let ix = self.flat_index(pos);
        &mut self.cells[ix]
    }
}

/// Each row is printed followed by a newline.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = Error;

    fn try_from(repr: GridRepr) -> Result<Self> {
        Grid::from_cells(repr.rows, repr.cols, repr.cells)
    }
}

impl TryFrom<Vec<Vec<bool>>> for Grid {
    type Error = Error;

    /// Build a grid from nested rows. Every row must have the length of the first.
    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let height = rows.len();
        if let Some(bad) = rows.iter().find(|row| row.len() != cols) {
            return Err(Error::ShapeMismatch {
                expected: cols,
                actual: bad.len(),
            });
        }
        Grid::from_cells(height, cols, rows.into_iter().flatten())
    }
}
