use rand::{Rng, SeedableRng};
use rand::seq::SliceRandom;
use rand_xorshift::XorShiftRng;

use crate::cells::{CompassPrimary, Coordinate};
use crate::errors::*;
use crate::grid::{CoordinateSmallVec, Grid};

/// Distance between two cell positions. The cell in between is the wall carved to link them.
const JUMP: usize = 2;

#[derive(Eq, PartialEq, Copy, Clone, Debug, Default)]
pub struct GenerationStats {
    /// Cells pushed onto the visit stack, the start cell included.
    pub pushes: usize,
    /// Cells popped off the visit stack once they had no unvisited cell left to jump to.
    pub backtracks: usize,
}

/// A fast, seedable random source for mazes that do not need reproducing.
pub fn weak_rng() -> XorShiftRng {
    XorShiftRng::seed_from_u64(rand::random())
}

/// A random source that replays the same maze for the same seed.
pub fn seeded_rng(seed: u64) -> XorShiftRng {
    XorShiftRng::seed_from_u64(seed)
}

/// Generate a perfect maze on a `size` x `size` grid with the recursive backtracker.
pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Grid> {
    generate_with_stats(size, rng).map(|(grid, _)| grid)
}

/// Generate a maze that can be regenerated from `seed`.
pub fn generate_seeded(size: usize, seed: u64) -> Result<Grid> {
    generate(size, &mut seeded_rng(seed))
}

/// Apply the recursive backtracker (randomized depth first search) maze generation algorithm.
///
/// Cells sit two steps apart: starting from the open top left cell we jump to a random unvisited
/// cell two steps away, opening it and the wall cell in between, and keep going from there.
/// A cell with nothing left to jump to is popped off the stack, backtracking to the previous cell,
/// until the stack is empty and every cell reachable by jumps has been visited.
///
/// The open cells end up as a spanning tree rooted at the start: a perfect maze.
/// Only odd sizes put the bottom right target on a cell position, even sizes still generate
/// a maze but it never reaches the last row or column.
pub fn generate_with_stats<R: Rng + ?Sized>(size: usize,
                                            rng: &mut R)
                                            -> Result<(Grid, GenerationStats)> {
    let mut grid = Grid::new(size)?;
    if !grid.is_target_on_cell_position() {
        warn!("Even maze size {} leaves the target cell {:?} blocked", size, grid.target());
    }

    let start = grid.start();
    grid.open(start);
    let mut stack = vec![start];
    let mut stats = GenerationStats {
        pushes: 1,
        backtracks: 0,
    };

    while let Some(&current) = stack.last() {

        let candidates = unvisited_jumps(&grid, current);

        if let Some(&next) = candidates.choose(&mut *rng) {
            let passage = current.midpoint(next);
            trace!("Carving {:?} -> {:?} via {:?}", current, next, passage);
            grid.open(passage);
            grid.open(next);
            stack.push(next);
            stats.pushes += 1;
        } else {
            let _ = stack.pop();
            stats.backtracks += 1;
        }
    }

    debug!("Generated {0}x{0} maze: {1} open cells, {2:?}", size, grid.open_count(), stats);
    Ok((grid, stats))
}

/// Cells a jump away from `coord`, in up, down, left, right order, that are inside the grid and
/// not yet visited.
fn unvisited_jumps(grid: &Grid, coord: Coordinate) -> CoordinateSmallVec {
    CompassPrimary::ALL
        .iter()
        .filter_map(|dir| coord.offset(*dir, JUMP, grid.size()))
        .filter(|candidate| !grid.is_open(*candidate))
        .collect()
}


#[cfg(test)]
mod tests {

    use quickcheck::{quickcheck, TestResult};
    use rand::rngs::mock::StepRng;

    use super::*;
    use crate::cells::CellState;
    use crate::pathing::Distances;

    // Always returns zero, so every choice picks the first remaining candidate.
    fn first_candidate_rng() -> StepRng {
        StepRng::new(0, 0)
    }

    /// The open cells as `(row, column)` pairs, row-major.
    fn open_cells(grid: &Grid) -> Vec<(usize, usize)> {
        grid.iter_open().map(<(usize, usize)>::from).collect()
    }

    fn adjacent_open_pairs(grid: &Grid) -> usize {
        grid.iter_open()
            .map(|coord| {
                [CompassPrimary::South, CompassPrimary::East]
                    .iter()
                    .filter_map(|dir| grid.neighbour_at_direction(coord, *dir))
                    .filter(|neighbour| grid.is_open(*neighbour))
                    .count()
            })
            .sum()
    }

    #[test]
    fn zero_size_is_invalid() {
        let result = generate(0, &mut first_candidate_rng());
        match result {
            Err(Error(ErrorKind::InvalidSize(0), _)) => {}
            other => panic!("expected an invalid size error, got {:?}", other),
        }
    }

    #[test]
    fn single_cell_maze() {
        let grid = generate(1, &mut weak_rng()).unwrap();
        assert_eq!(grid.size(), 1);
        assert_eq!(grid.state(Coordinate::new(0, 0)), Some(CellState::Open));
        assert_eq!(open_cells(&grid), vec![(0, 0)]);
    }

    #[test]
    fn first_candidate_three_by_three() {
        // (0,0) jumps down to (2,0), (2,0) jumps right to (2,2), (2,2) jumps up to (0,2),
        // then nothing is left and the stack unwinds.
        let (grid, stats) = generate_with_stats(3, &mut first_candidate_rng()).unwrap();
        assert_eq!(open_cells(&grid),
                   vec![(0, 0), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)]);
        assert_eq!(grid.state(Coordinate::new(0, 1)), Some(CellState::Blocked));
        assert_eq!(grid.state(Coordinate::new(1, 1)), Some(CellState::Blocked));
        assert_eq!(stats, GenerationStats { pushes: 4, backtracks: 4 });
        assert_eq!(format!("{}", grid), ".#.\n.#.\n...\n");
    }

    #[test]
    fn first_candidate_five_by_five() {
        // Down the left side first, then snake right and up.
        let grid = generate(5, &mut first_candidate_rng()).unwrap();
        assert_eq!(format!("{}", grid),
                   concat!(".#...\n",
                           ".#.#.\n",
                           ".#.#.\n",
                           ".#.#.\n",
                           "...#.\n"));
    }

    #[test]
    fn even_size_never_opens_the_last_row_or_column() {
        let grid = generate(4, &mut first_candidate_rng()).unwrap();
        assert!(!grid.is_open(grid.target()));
        for i in 0..4 {
            assert!(!grid.is_open(Coordinate::new(3, i)));
            assert!(!grid.is_open(Coordinate::new(i, 3)));
        }
        assert_eq!(format!("{}", grid), ".#.#\n.#.#\n...#\n####\n");
    }

    #[test]
    fn same_seed_same_maze() {
        let a = generate_seeded(21, 42).unwrap();
        let b = generate_seeded(21, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn odd_mazes_open_every_cell_position() {
        let grid = generate(15, &mut weak_rng()).unwrap();
        for row in (0..15).step_by(2) {
            for column in (0..15).step_by(2) {
                assert!(grid.is_open(Coordinate::new(row, column)));
            }
        }
        // Both indices odd is never carved
        for row in (1..15).step_by(2) {
            for column in (1..15).step_by(2) {
                assert!(!grid.is_open(Coordinate::new(row, column)));
            }
        }
        assert!(grid.is_open(grid.target()));
    }

    #[test]
    fn generated_mazes_are_connected_trees() {
        fn p(size: u8, seed: u64) -> TestResult {
            let size = size as usize % 40;
            if size == 0 {
                return TestResult::discard();
            }
            let grid = generate_seeded(size, seed).unwrap();
            let distances = Distances::<u32>::new(&grid, grid.start()).unwrap();

            let connected = distances.reachable_count() == grid.open_count();
            let acyclic = adjacent_open_pairs(&grid) == grid.open_count() - 1;
            TestResult::from_bool(connected && acyclic)
        }
        quickcheck(p as fn(u8, u64) -> TestResult);
    }

    #[test]
    fn generation_terminates_within_bound() {
        fn p(size: u8, seed: u64) -> TestResult {
            let size = size as usize % 64;
            if size == 0 {
                return TestResult::discard();
            }
            let (grid, stats) = generate_with_stats(size, &mut seeded_rng(seed)).unwrap();
            let cell_positions = ((size + 1) / 2) * ((size + 1) / 2);
            TestResult::from_bool(stats.pushes <= size * size &&
                                  stats.pushes == cell_positions &&
                                  stats.pushes == stats.backtracks &&
                                  grid.open_count() == 2 * stats.pushes - 1)
        }
        quickcheck(p as fn(u8, u64) -> TestResult);
    }

    #[test]
    fn generated_mazes_are_deterministic_for_a_seed() {
        fn p(size: u8, seed: u64) -> TestResult {
            let size = size as usize % 32;
            if size == 0 {
                return TestResult::discard();
            }
            TestResult::from_bool(generate_seeded(size, seed).unwrap() ==
                                  generate_seeded(size, seed).unwrap())
        }
        quickcheck(p as fn(u8, u64) -> TestResult);
    }
}
