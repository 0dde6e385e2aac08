//! Fixed seed generations.

use crate::{Grid, Sequence};
use log::debug;

pub const GLIDER_ROWS: usize = 80;
pub const GLIDER_COLS: usize = 80;

/// Live `(row, col)` cells of the glider placed by [`glider`].
pub const GLIDER: &[(usize, usize)] = &[(10, 11), (11, 12), (12, 10), (12, 11), (12, 12)];

/// The 14-cell seed used to exercise rule 110.
pub const RULE_110_SEED: [bool; 14] = [
    true, true, true, true, true, false, true, true, false, false, true, false, false, false,
];

/// An 80x80 grid holding a single glider that travels down and to the right.
pub fn glider() -> Grid {
    let grid = Grid::from_live_cells(GLIDER_ROWS, GLIDER_COLS, GLIDER.iter().copied())
        .unwrap_or_else(|e| unreachable!("glider fits its fixed grid: {}", e));
    debug!("built {}x{} glider grid", GLIDER_ROWS, GLIDER_COLS);
    grid
}

/// The sequence `11111011001000`.
pub fn rule_110_seed() -> Sequence {
    let seed = Sequence::from_cells(RULE_110_SEED.iter().copied())
        .unwrap_or_else(|e| unreachable!("rule 110 seed length is fixed: {}", e));
    debug!("built rule 110 seed of {} cells", seed.len());
    seed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn glider_shape() {
        let grid = glider();
        assert_eq!((grid.rows(), grid.cols()), (80, 80));
        assert_eq!(grid.population(), GLIDER.len());
        for &pos in GLIDER {
            assert_eq!(grid[pos], Cell::Alive);
        }
    }

    #[test]
    fn seed_text() {
        assert_eq!(rule_110_seed().to_string(), "##### ##  #   ");
    }
}
