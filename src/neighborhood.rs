use crate::Direction;

/// A `Neighborhood` holds one value for each `Direction` around a cell.
pub trait Neighborhood<T> {
    type Direction: Direction;
    type Iter: Iterator<Item = T>;

    /// Build the neighborhood by looking up every direction.
    fn new<F: FnMut(Self::Direction) -> T>(dir_map: F) -> Self;

    /// Iterate over all neighbor cells in direction order.
    fn iter(self) -> Self::Iter;
}

pub trait GetNeighbors<Idx, Neighbors> {
    fn get_neighbors(&self, index: Idx) -> Neighbors;
}
