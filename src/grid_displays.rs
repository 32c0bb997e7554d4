use std::fmt;

use crate::cells::{CellState, Coordinate};
use crate::grid::Grid;
use crate::utils::{self, FnvHashSet};

const BLOCKED: char = '#';
const OPEN: char = '.';

pub trait GridDisplay {
    /// Render the contents of an open grid cell as a single glyph, None to leave it plain.
    fn render_cell_body(&self, _: Coordinate) -> Option<char> {
        None
    }
}


#[derive(Debug)]
pub struct PathDisplay {
    on_path_coordinates: FnvHashSet<Coordinate>,
}
impl PathDisplay {
    pub fn new(path: &[Coordinate]) -> Self {
        PathDisplay { on_path_coordinates: utils::coordinate_set(path.iter().cloned()) }
    }
}
impl GridDisplay for PathDisplay {
    fn render_cell_body(&self, coord: Coordinate) -> Option<char> {
        if self.on_path_coordinates.contains(&coord) {
            Some('o')
        } else {
            None
        }
    }
}


#[derive(Debug)]
pub struct StartEndPointsDisplay {
    start: Coordinate,
    end: Coordinate,
}
impl StartEndPointsDisplay {
    pub fn new(start: Coordinate, end: Coordinate) -> StartEndPointsDisplay {
        StartEndPointsDisplay { start, end }
    }
}
impl GridDisplay for StartEndPointsDisplay {
    fn render_cell_body(&self, coord: Coordinate) -> Option<char> {
        if coord == self.start {
            Some('S')
        } else if coord == self.end {
            Some('E')
        } else {
            None
        }
    }
}


/// Displays layered on top of each other, earlier layers win.
pub struct LayeredDisplay<'a> {
    layers: Vec<&'a dyn GridDisplay>,
}
impl<'a> LayeredDisplay<'a> {
    pub fn new(layers: Vec<&'a dyn GridDisplay>) -> LayeredDisplay<'a> {
        LayeredDisplay { layers }
    }
}
impl<'a> GridDisplay for LayeredDisplay<'a> {
    fn render_cell_body(&self, coord: Coordinate) -> Option<char> {
        self.layers.iter().filter_map(|layer| layer.render_cell_body(coord)).next()
    }
}


impl Grid {
    /// One line per grid row: `#` for a wall, `.` for a passage unless `display` draws over it.
    pub fn to_text(&self, display: Option<&dyn GridDisplay>) -> String {
        let mut text = String::with_capacity(self.cells_count() + self.size());
        for coord in self.iter() {
            let glyph = match self.state(coord) {
                Some(CellState::Open) => {
                    display.and_then(|d| d.render_cell_body(coord)).unwrap_or(OPEN)
                }
                _ => BLOCKED,
            };
            text.push(glyph);
            if coord.column + 1 == self.size() {
                text.push('\n');
            }
        }
        text
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_text(None))
    }
}
