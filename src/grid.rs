use std::fmt;

use bit_set::BitSet;
use smallvec::SmallVec;

use crate::cells::{CellState, CompassPrimary, Coordinate};
use crate::errors::*;
use crate::units::{EdgesCount, NodesCount};

pub type CoordinateSmallVec = SmallVec<[Coordinate; 4]>;

/// A square grid of open and blocked cells.
///
/// Callers only ever read a grid, the generators in this crate are the only writers.
/// Open cells are kept as a bit set indexed in row-major order.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    open_cells: BitSet,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: size: {:?}, open cells: {:?}", self.size, self.open_count())
    }
}

impl Grid {
    /// An all blocked `size` x `size` grid.
    pub fn new(size: usize) -> Result<Grid> {
        if size == 0 {
            bail!(ErrorKind::InvalidSize(size));
        }

        Ok(Grid {
            size,
            open_cells: BitSet::with_capacity(size * size),
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn cells_count(&self) -> usize {
        self.size * self.size
    }

    /// Node and edge counts of the passage graph a grid this size could hold.
    pub fn graph_size(&self) -> (NodesCount, EdgesCount) {
        let cells_count = self.cells_count();
        (NodesCount(cells_count), EdgesCount(2 * cells_count - 2 * self.size))
    }

    #[inline]
    pub fn start(&self) -> Coordinate {
        Coordinate::new(0, 0)
    }

    #[inline]
    pub fn target(&self) -> Coordinate {
        Coordinate::new(self.size - 1, self.size - 1)
    }

    /// Does the target land on a cell position of the step 2 carving pattern?
    ///
    /// Only then can a generated maze ever open it, which needs an odd size.
    #[inline]
    pub fn is_target_on_cell_position(&self) -> bool {
        self.size % 2 == 1
    }

    /// The state of a cell, None if the coordinate is outside the grid.
    pub fn state(&self, coord: Coordinate) -> Option<CellState> {
        self.coordinate_to_index(coord).map(|index| {
            if self.open_cells.contains(index) {
                CellState::Open
            } else {
                CellState::Blocked
            }
        })
    }

    #[inline]
    pub fn is_open(&self, coord: Coordinate) -> bool {
        self.state(coord) == Some(CellState::Open)
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: Coordinate) -> bool {
        coord.row < self.size && coord.column < self.size
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.cells_count().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn coordinate_to_index(&self, coord: Coordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.row * self.size + coord.column)
        } else {
            None
        }
    }

    #[inline]
    pub fn index_to_coordinate(&self, index: usize) -> Option<Coordinate> {
        if index < self.cells_count() {
            Some(Coordinate::from_row_major_index(index, self.size))
        } else {
            None
        }
    }

    #[inline]
    pub fn open_count(&self) -> usize {
        self.open_cells.len()
    }

    /// All coordinates in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> {
        let size = self.size;
        (0..self.cells_count()).map(move |index| Coordinate::from_row_major_index(index, size))
    }

    /// Open coordinates in row-major order.
    pub fn iter_open<'a>(&'a self) -> impl Iterator<Item = Coordinate> + 'a {
        let size = self.size;
        self.open_cells
            .iter()
            .map(move |index| Coordinate::from_row_major_index(index, size))
    }

    pub fn neighbour_at_direction(&self,
                                  coord: Coordinate,
                                  direction: CompassPrimary)
                                  -> Option<Coordinate> {
        if self.is_valid_coordinate(coord) {
            coord.offset(direction, 1, self.size)
        } else {
            None
        }
    }

    /// Cells one step North, South, West or East of a cell, whether open or not.
    pub fn neighbours(&self, coord: Coordinate) -> CoordinateSmallVec {
        CompassPrimary::ALL
            .iter()
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
            .collect()
    }

    /// Open cells one step away from a cell.
    pub fn open_neighbours(&self, coord: Coordinate) -> CoordinateSmallVec {
        CompassPrimary::ALL
            .iter()
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
            .filter(|neighbour| self.is_open(*neighbour))
            .collect()
    }

    /// Open a cell. Returns false if the coordinate is outside the grid.
    pub(crate) fn open(&mut self, coord: Coordinate) -> bool {
        match self.coordinate_to_index(coord) {
            Some(index) => {
                self.open_cells.insert(index);
                true
            }
            None => false,
        }
    }

    /// Build a grid from rows of `#` (blocked) and `.` (open).
    #[cfg(test)]
    pub(crate) fn from_text(text: &str) -> Grid {
        let rows: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let mut grid = Grid::new(rows.len()).expect("empty grid text");
        for (row, line) in rows.iter().enumerate() {
            assert_eq!(line.len(), rows.len(), "grid text must be square");
            for (column, c) in line.chars().enumerate() {
                if c == '.' {
                    grid.open(Coordinate::new(row, column));
                }
            }
        }
        grid
    }
}
