use crate::{Cell, Direction, GetNeighbors, Grid, Neighborhood};
use enum_iterator::IntoEnumIterator;
use std::iter::{once, Chain, Once};
use MooreDirection::*;

/// The eight directions of the Moore neighborhood, rotating counter-clockwise from `Right`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, IntoEnumIterator)]
pub enum MooreDirection {
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Direction for MooreDirection {
    type Directions = <MooreDirection as IntoEnumIterator>::Iterator;

    #[inline]
    fn directions() -> Self::Directions {
        MooreDirection::into_enum_iter()
    }

    /// Rows grow downwards, so `Up` is a negative row offset.
    #[inline]
    fn delta(self) -> (isize, isize) {
        match self {
            Right => (0, 1),
            UpRight => (-1, 1),
            Up => (-1, 0),
            UpLeft => (-1, -1),
            Left => (0, -1),
            DownLeft => (1, -1),
            Down => (1, 0),
            DownRight => (1, 1),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MooreNeighbors<T> {
    pub right: T,
    pub up_right: T,
    pub up: T,
    pub up_left: T,
    pub left: T,
    pub down_left: T,
    pub down: T,
    pub down_right: T,
}

impl MooreNeighbors<Option<Cell>> {
    /// Number of live neighbors, counting cells beyond the edge as dead.
    #[inline]
    pub fn live_count(self) -> u8 {
        self.iter()
            .filter(|&cell| cell == Some(Cell::Alive))
            .count() as u8
    }
}

type NeighborhoodIter<T> = Chain<
    Chain<
        Chain<Chain<Chain<Chain<Chain<Once<T>, Once<T>>, Once<T>>, Once<T>>, Once<T>>, Once<T>>,
        Once<T>,
    >,
    Once<T>,
>;

impl<T> Neighborhood<T> for MooreNeighbors<T> {
    type Direction = MooreDirection;
    type Iter = NeighborhoodIter<T>;

    #[inline]
    fn new<F: FnMut(MooreDirection) -> T>(mut f: F) -> Self {
        Self {
            right: f(Right),
            up_right: f(UpRight),
            up: f(Up),
            up_left: f(UpLeft),
            left: f(Left),
            down_left: f(DownLeft),
            down: f(Down),
            down_right: f(DownRight),
        }
    }

    #[inline]
    fn iter(self) -> Self::Iter {
        once(self.right)
            .chain(once(self.up_right))
            .chain(once(self.up))
            .chain(once(self.up_left))
            .chain(once(self.left))
            .chain(once(self.down_left))
            .chain(once(self.down))
            .chain(once(self.down_right))
    }
}

/// Neighbors that fall outside of the grid are `None`.
impl GetNeighbors<(usize, usize), MooreNeighbors<Option<Cell>>> for Grid {
    #[inline]
    fn get_neighbors(&self, (row, col): (usize, usize)) -> MooreNeighbors<Option<Cell>> {
        MooreNeighbors::new(|dir| {
            self.offset((row, col), dir.delta())
                .and_then(|pos| self.get(pos))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_rotate_and_oppose() {
        let deltas: Vec<(isize, isize)> =
            MooreDirection::directions().map(|d| d.delta()).collect();
        assert_eq!(deltas.len(), 8);
        assert_eq!(deltas[0], (0, 1));
        assert_eq!(deltas[2], (-1, 0));
        for (ix, &(dr, dc)) in deltas.iter().enumerate() {
            assert_ne!((dr, dc), (0, 0));
            let (or, oc) = deltas[(ix + 4) % 8];
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }

    #[test]
    fn iter_follows_direction_order() {
        let neighbors = MooreNeighbors::new(|dir: MooreDirection| dir);
        assert!(neighbors.iter().eq(MooreDirection::directions()));
    }

    #[test]
    fn corner_neighbors_are_padded() {
        let grid = Grid::from_fn(2, 2, |_, _| Cell::Alive).unwrap();
        let neighbors = grid.get_neighbors((0, 0));
        assert_eq!(neighbors.right, Some(Cell::Alive));
        assert_eq!(neighbors.down, Some(Cell::Alive));
        assert_eq!(neighbors.down_right, Some(Cell::Alive));
        assert_eq!(neighbors.up, None);
        assert_eq!(neighbors.left, None);
        assert_eq!(neighbors.live_count(), 3);
    }
}
