/// One of the ways to step from a cell to a neighbor.
pub trait Direction: Copy + Sized {
    type Directions: Iterator<Item = Self>;

    /// Every direction, in the order neighbors are enumerated.
    fn directions() -> Self::Directions;

    /// The `(row, col)` offset of the neighbor lying in this direction.
    fn delta(self) -> (isize, isize);
}
