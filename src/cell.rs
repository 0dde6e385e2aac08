use std::fmt;

/// The state of a single cell in a 2D grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// The character a renderer prints for this state.
    #[inline]
    pub fn to_char(self) -> char {
        state_char(self.is_alive())
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Dead
    }
}

impl From<bool> for Cell {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

impl From<Cell> for bool {
    #[inline]
    fn from(cell: Cell) -> Self {
        cell.is_alive()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// `'#'` for a live cell and `' '` for a dead one, shared by both automata.
#[inline]
pub(crate) fn state_char(alive: bool) -> char {
    if alive {
        '#'
    } else {
        ' '
    }
}
