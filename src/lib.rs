//! **maze_escape** generates perfect mazes on square grids and tracks a player escaping them.

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

pub mod cells;
pub mod errors;
pub mod game;
pub mod generators;
pub mod graph;
pub mod grid;
pub mod grid_displays;
pub mod pathing;
pub mod units;
mod utils;
