use crate::units::{ColumnIndex, RowIndex};

/// Whether a grid cell is walkable.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CellState {
    Open,
    Blocked,
}

impl CellState {
    #[inline]
    pub fn is_open(self) -> bool {
        self == CellState::Open
    }
}

/// A `(row, column)` position on a square grid, row 0 being the top row.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Coordinate {
    pub row: usize,
    pub column: usize,
}

impl Coordinate {
    #[inline]
    pub fn new(row: usize, column: usize) -> Coordinate {
        Coordinate { row, column }
    }

    #[inline]
    pub fn from_row_column_indices(row_index: RowIndex, col_index: ColumnIndex) -> Coordinate {
        Coordinate::new(row_index.0, col_index.0)
    }

    #[inline]
    pub fn from_row_major_index(index: usize, size: usize) -> Coordinate {
        Coordinate::new(index / size, index % size)
    }

    /// Creates a new `Coordinate` offset `steps` cells away in the given direction.
    ///
    /// Returns None if the result would fall outside a `size` x `size` grid.
    pub fn offset(self, dir: CompassPrimary, steps: usize, size: usize) -> Option<Coordinate> {
        let (row, column) = (self.row, self.column);
        let offset_coord = match dir {
            CompassPrimary::North => row.checked_sub(steps).map(|r| Coordinate::new(r, column)),
            CompassPrimary::South => row.checked_add(steps).map(|r| Coordinate::new(r, column)),
            CompassPrimary::West => column.checked_sub(steps).map(|c| Coordinate::new(row, c)),
            CompassPrimary::East => column.checked_add(steps).map(|c| Coordinate::new(row, c)),
        };

        offset_coord.filter(|coord| coord.row < size && coord.column < size)
    }

    /// The coordinate half way between two coordinates on the same row or column.
    #[inline]
    pub fn midpoint(self, other: Coordinate) -> Coordinate {
        Coordinate::new((self.row + other.row) / 2, (self.column + other.column) / 2)
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from(row_column_pair: (usize, usize)) -> Coordinate {
        Coordinate::new(row_column_pair.0, row_column_pair.1)
    }
}

impl From<Coordinate> for (usize, usize) {
    fn from(coord: Coordinate) -> (usize, usize) {
        (coord.row, coord.column)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CompassPrimary {
    North,
    South,
    West,
    East,
}

impl CompassPrimary {
    /// Up, down, left, right. The generator filters its jump candidates in this order.
    pub const ALL: [CompassPrimary; 4] = [
        CompassPrimary::North,
        CompassPrimary::South,
        CompassPrimary::West,
        CompassPrimary::East,
    ];

    pub fn opposite(self) -> CompassPrimary {
        match self {
            CompassPrimary::North => CompassPrimary::South,
            CompassPrimary::South => CompassPrimary::North,
            CompassPrimary::West => CompassPrimary::East,
            CompassPrimary::East => CompassPrimary::West,
        }
    }

    /// Parse a single `u`, `d`, `l` or `r` move, case insensitive.
    pub fn from_move_char(c: char) -> Option<CompassPrimary> {
        match c.to_ascii_lowercase() {
            'u' => Some(CompassPrimary::North),
            'd' => Some(CompassPrimary::South),
            'l' => Some(CompassPrimary::West),
            'r' => Some(CompassPrimary::East),
            _ => None,
        }
    }
}


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn offset_within_bounds() {
        let c = Coordinate::new(2, 2);
        assert_eq!(c.offset(CompassPrimary::North, 2, 5), Some(Coordinate::new(0, 2)));
        assert_eq!(c.offset(CompassPrimary::South, 2, 5), Some(Coordinate::new(4, 2)));
        assert_eq!(c.offset(CompassPrimary::West, 1, 5), Some(Coordinate::new(2, 1)));
        assert_eq!(c.offset(CompassPrimary::East, 1, 5), Some(Coordinate::new(2, 3)));
    }

    #[test]
    fn offset_out_of_bounds_is_none() {
        let origin = Coordinate::new(0, 0);
        assert_eq!(origin.offset(CompassPrimary::North, 1, 3), None);
        assert_eq!(origin.offset(CompassPrimary::West, 2, 3), None);
        assert_eq!(origin.offset(CompassPrimary::South, 3, 3), None);
        assert_eq!(origin.offset(CompassPrimary::East, 2, 2), None);

        let far = Coordinate::new(usize::MAX, usize::MAX);
        assert_eq!(far.offset(CompassPrimary::South, 1, 3), None);
        assert_eq!(far.offset(CompassPrimary::East, 1, 3), None);
    }

    #[test]
    fn midpoint_of_jump() {
        let a = Coordinate::new(2, 4);
        assert_eq!(a.midpoint(Coordinate::new(0, 4)), Coordinate::new(1, 4));
        assert_eq!(a.midpoint(Coordinate::new(2, 6)), Coordinate::new(2, 5));
    }

    #[test]
    fn row_major_index_round_trip() {
        assert_eq!(Coordinate::from_row_major_index(7, 3), Coordinate::new(2, 1));
        assert_eq!(Coordinate::from_row_major_index(0, 1), Coordinate::new(0, 0));
    }

    #[test]
    fn move_chars() {
        assert_eq!(CompassPrimary::from_move_char('U'), Some(CompassPrimary::North));
        assert_eq!(CompassPrimary::from_move_char('d'), Some(CompassPrimary::South));
        assert_eq!(CompassPrimary::from_move_char('l'), Some(CompassPrimary::West));
        assert_eq!(CompassPrimary::from_move_char('r'), Some(CompassPrimary::East));
        assert_eq!(CompassPrimary::from_move_char('x'), None);
    }

    #[test]
    fn opposites() {
        for dir in CompassPrimary::ALL.iter() {
            assert_ne!(dir.opposite(), *dir);
            assert_eq!(dir.opposite().opposite(), *dir);
        }
    }
}
