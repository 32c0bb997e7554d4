use docopt::Docopt;
use log::{info, warn};
use maze_escape::{
    cells::CompassPrimary,
    errors as maze_errors,
    game::{EscapeGame, MoveOutcome},
    generators,
    graph,
    grid::Grid,
    grid_displays::{GridDisplay, LayeredDisplay, PathDisplay, StartEndPointsDisplay},
    pathing,
};
use serde_derive::Deserialize;
use std::{
    fs::File,
    io,
    io::prelude::*,
};

const USAGE: &str = "Maze Escape

Usage:
    mazes_driver -h | --help
    mazes_driver [--size=<n>] [--seed=<s>] [--show-path] [--text-out=<path>] [--save-edges=<path>] [--moves=<moves>]

Options:
    -h --help              Show this screen.
    --size=<n>             The maze is n * n cells, odd sizes put the exit in the bottom right corner [default: 15].
    --seed=<s>             Seed for the maze generator, the same seed always builds the same maze.
    --show-path            Mark the shortest escape route from the top left to the bottom right.
    --text-out=<path>      Output file path for the textual rendering of the maze instead of stdout.
    --save-edges=<path>    Serialize the maze passages to a text file: each line is a pair of numbers. Line 1: n(#cells) m(#passages). Line 2+ passage between cells. Uses 1-based row-major cell indices.
    --moves=<moves>        Play the maze: a string of u, d, l and r steps taken from the top left corner.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_size: usize,
    flag_seed: Option<u64>,
    flag_show_path: bool,
    flag_text_out: String,
    flag_save_edges: String,
    flag_moves: String,
}

// `error_chain!` creates the Error, ErrorKind, ResultExt and Result types for the driver,
// linking in the library's own errors so `?` works across both.
mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::maze_escape::errors::Error, ::maze_escape::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let seed = args.flag_seed.unwrap_or_else(rand::random);
    info!("Maze size {} seed {}", args.flag_size, seed);

    let maze_grid = generators::generate_seeded(args.flag_size, seed)?;

    if !args.flag_save_edges.is_empty() {
        write_text_to_file(&graph::edge_list_text(&maze_grid), &args.flag_save_edges)
            .chain_err(|| format!("Failed to write maze graph to text file {}", args.flag_save_edges))?;
    }

    let maze_text = render_text(&maze_grid, args.flag_show_path);
    if args.flag_text_out.is_empty() {
        print!("{}", maze_text);
    } else {
        write_text_to_file(&maze_text, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    if !args.flag_moves.is_empty() {
        let directions = parse_moves(&args.flag_moves)?;
        let mut game = EscapeGame::new(args.flag_size, generators::seeded_rng(seed))?;
        println!("{}", play(&mut game, &directions));
    }

    Ok(())
}

/// Start and end markers always, the escape route on request.
fn render_text(maze_grid: &Grid, show_path: bool) -> String {

    let start_end = StartEndPointsDisplay::new(maze_grid.start(), maze_grid.target());

    let path_display = if show_path {
        let path = pathing::escape_path(maze_grid);
        if path.is_none() {
            warn!("No escape route to show, the target cell {:?} is walled off", maze_grid.target());
        }
        path.map(|p| PathDisplay::new(&p))
    } else {
        None
    };

    let mut layers = vec![&start_end as &dyn GridDisplay];
    if let Some(ref display) = path_display {
        layers.push(display);
    }
    maze_grid.to_text(Some(&LayeredDisplay::new(layers)))
}

fn parse_moves(moves: &str) -> Result<Vec<CompassPrimary>> {
    moves.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            CompassPrimary::from_move_char(c)
                .ok_or_else(|| maze_errors::Error::from(maze_errors::ErrorKind::InvalidMove(c)).into())
        })
        .collect()
}

/// Replay moves against the game, stopping at the first escape.
fn play<R: rand::Rng>(game: &mut EscapeGame<R>, directions: &[CompassPrimary]) -> String {

    let mut blocked = 0;
    for direction in directions {
        match game.try_move(*direction) {
            MoveOutcome::Escaped | MoveOutcome::AlreadyEscaped => break,
            MoveOutcome::Blocked => blocked += 1,
            MoveOutcome::Moved(_) => {}
        }
    }

    if game.is_escaped() {
        format!("Escaped in {} moves ({} bumps into walls)", game.moves_made(), blocked)
    } else {
        format!("Still inside at {:?} after {} moves ({} bumps into walls)",
                game.player(),
                game.moves_made(),
                blocked)
    }
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
