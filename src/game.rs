use rand::Rng;

use crate::cells::{CompassPrimary, Coordinate};
use crate::errors::*;
use crate::generators;
use crate::grid::Grid;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GameState {
    Playing,
    Escaped,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum MoveOutcome {
    /// The player stepped onto an open cell.
    Moved(Coordinate),
    /// A wall or the edge of the grid is in the way, the player stays put.
    Blocked,
    /// The player stepped onto the target.
    Escaped,
    /// The maze was already escaped, it needs a restart before moving again.
    AlreadyEscaped,
}

/// A player escaping from the top left corner of a maze to the bottom right.
///
/// The game owns its random source so every restart builds a new maze independent of any
/// other game.
#[derive(Debug)]
pub struct EscapeGame<R: Rng> {
    grid: Grid,
    player: Coordinate,
    state: GameState,
    moves_made: usize,
    rng: R,
}

impl<R: Rng> EscapeGame<R> {
    /// Start a game on a freshly generated `size` x `size` maze.
    ///
    /// Even sizes are refused, their target is never carved open.
    pub fn new(size: usize, mut rng: R) -> Result<EscapeGame<R>> {
        if size == 0 {
            bail!(ErrorKind::InvalidSize(size));
        }
        if size % 2 == 0 {
            bail!(ErrorKind::UnreachableTarget(size));
        }

        let grid = generators::generate(size, &mut rng)?;
        let player = grid.start();
        Ok(EscapeGame {
            grid,
            player,
            state: GameState::Playing,
            moves_made: 0,
            rng,
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn player(&self) -> Coordinate {
        self.player
    }

    #[inline]
    pub fn target(&self) -> Coordinate {
        self.grid.target()
    }

    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    pub fn is_escaped(&self) -> bool {
        self.state == GameState::Escaped
    }

    /// Successful steps since the game (re)started.
    #[inline]
    pub fn moves_made(&self) -> usize {
        self.moves_made
    }

    pub fn try_move(&mut self, direction: CompassPrimary) -> MoveOutcome {
        if self.is_escaped() {
            return MoveOutcome::AlreadyEscaped;
        }

        let destination = self.grid
            .neighbour_at_direction(self.player, direction)
            .filter(|coord| self.grid.is_open(*coord));

        match destination {
            Some(coord) => {
                self.player = coord;
                self.moves_made += 1;

                if coord == self.target() {
                    info!("Escaped the maze in {} moves", self.moves_made);
                    self.state = GameState::Escaped;
                    MoveOutcome::Escaped
                } else {
                    MoveOutcome::Moved(coord)
                }
            }
            None => MoveOutcome::Blocked,
        }
    }

    /// Throw away the maze and start again on a new one of the same size.
    pub fn restart(&mut self) -> Result<()> {
        self.grid = generators::generate(self.grid.size(), &mut self.rng)?;
        self.player = self.grid.start();
        self.state = GameState::Playing;
        self.moves_made = 0;
        debug!("Restarted on a new {0}x{0} maze", self.grid.size());
        Ok(())
    }
}
