use std::fmt::{Debug, Display};
use std::ops::Add;

use num::traits::{Bounded, One, Unsigned, Zero};
use smallvec::SmallVec;

use crate::cells::Coordinate;
use crate::grid::Grid;
use crate::units::{ColumnIndex, RowIndex};
use crate::utils::{self, FnvHashMap};


// Trait (hack) used purely as a generic type parameter alias because it looks ugly to type this out each time
pub trait MaxDistance
    : Zero + One + Bounded + Unsigned + Add<Output = Self> + Debug + Clone + Copy + Display + Ord
    {
}
impl<T: Zero + One + Bounded + Unsigned + Add<Output = T> + Debug + Clone + Copy + Display + Ord> MaxDistance for T {}


/// Flood fill step counts from a start cell to every open cell reachable from it.
#[derive(Debug, Clone)]
pub struct Distances<MaxDistanceT = u32> {
    start_coordinate: Coordinate,
    distances: FnvHashMap<Coordinate, MaxDistanceT>,
    max_distance: MaxDistanceT,
}

impl<MaxDistanceT> Distances<MaxDistanceT>
    where MaxDistanceT: MaxDistance
{
    /// None if the start is off the grid or is a wall.
    pub fn new(grid: &Grid, start_coordinate: Coordinate) -> Option<Distances<MaxDistanceT>> {

        if !grid.is_open(start_coordinate) {
            return None;
        }

        let mut max = Zero::zero();
        let mut distances = utils::fnv_hashmap(grid.open_count());
        distances.insert(start_coordinate, Zero::zero());

        // Every step is one more than the previous cell, so the first time a cell is reached is
        // along a shortest path and the map doubles as the visited set.
        let mut frontier = vec![start_coordinate];
        while !frontier.is_empty() {

            let mut new_frontier = vec![];
            for cell_coord in &frontier {

                let distance_to_cell: MaxDistanceT = distances[cell_coord];
                if distance_to_cell > max {
                    max = distance_to_cell;
                }

                for link_coordinate in grid.open_neighbours(*cell_coord).iter() {
                    if !distances.contains_key(link_coordinate) {
                        distances.insert(*link_coordinate, distance_to_cell + One::one());
                        new_frontier.push(*link_coordinate);
                    }
                }
            }
            frontier = new_frontier;
        }

        Some(Distances {
            start_coordinate,
            distances,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> Coordinate {
        self.start_coordinate
    }

    #[inline(always)]
    pub fn max(&self) -> MaxDistanceT {
        self.max_distance
    }

    /// Number of open cells reachable from the start, the start included.
    #[inline]
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    #[inline(always)]
    pub fn distance_from_start_to(&self, coord: Coordinate) -> Option<MaxDistanceT> {
        self.distances.get(&coord).cloned()
    }

    /// Every cell at the maximum distance, in row-major order.
    pub fn furthest_points_on_grid(&self) -> SmallVec<[Coordinate; 8]> {
        let furthest_distance = self.max();
        let mut furthest = self.distances
            .iter()
            .filter(|&(_, distance)| *distance == furthest_distance)
            .map(|(coord, _)| *coord)
            .collect::<SmallVec<[Coordinate; 8]>>();
        furthest.sort();
        furthest
    }
}

/// Walk back from `end_point` towards the start of `distances_from_start`, always stepping to an
/// open neighbour one closer. Returns the path from start to end inclusive.
pub fn shortest_path<MaxDistanceT>(grid: &Grid,
                                   distances_from_start: &Distances<MaxDistanceT>,
                                   end_point: Coordinate)
                                   -> Option<Vec<Coordinate>>
    where MaxDistanceT: MaxDistance
{
    // Unreachable from the start, or not an open cell at all.
    let mut current_distance = distances_from_start.distance_from_start_to(end_point)?;

    let mut path = vec![end_point];
    let start = distances_from_start.start();
    let mut current_coord = end_point;

    while current_coord != start {

        let closer = grid.open_neighbours(current_coord)
            .iter()
            .cloned()
            .filter_map(|coord| {
                distances_from_start.distance_from_start_to(coord).map(|d| (coord, d))
            })
            .find(|&(_, d)| d + One::one() == current_distance);

        match closer {
            Some((closer_coord, closer_distance)) => {
                current_coord = closer_coord;
                current_distance = closer_distance;
                path.push(current_coord);
            }
            // The distances were not computed on this grid.
            None => return None,
        }
    }

    path.reverse();
    Some(path)
}

/// The shortest route from the start cell to the target cell, if the maze has one.
pub fn escape_path(grid: &Grid) -> Option<Vec<Coordinate>> {
    let distances = Distances::<u32>::new(grid, grid.start())?;
    shortest_path(grid, &distances, grid.target())
}

/// Works only as long as we are looking at a perfect maze, otherwise you get back some arbitrary
/// long path.
pub fn longest_path<MaxDistanceT>(grid: &Grid) -> Option<Vec<Coordinate>>
    where MaxDistanceT: MaxDistance
{
    let arbitrary_start_point = Coordinate::from_row_column_indices(RowIndex(0), ColumnIndex(0));
    let first_distances = Distances::<MaxDistanceT>::new(grid, arbitrary_start_point)?;

    // The start of the longest path is just the point furthest away from an arbitrary initial point
    let long_path_start_coordinate = *first_distances.furthest_points_on_grid().first()?;

    let distances_from_start = Distances::<MaxDistanceT>::new(grid, long_path_start_coordinate)?;
    let end_point = *distances_from_start.furthest_points_on_grid().first()?;

    shortest_path(grid, &distances_from_start, end_point)
}
