//! Two-phase coordinate solver for the 3x3x3 Rubik's cube.
//!
//! Any solvable cube, given as a 54-character facelet string, is solved in
//! at most 31 face turns (typically 18..24) within milliseconds once the
//! lookup tables exist.
//!
//! # Architecture
//!
//! The cube is carried through three representations:
//!
//! - [`FaceletCube`]: the human-facing sticker string;
//! - [`CubieCube`]: permutations and orientations of the 20 movable
//!   pieces, with a composition operator and the 18 face turns as
//!   pre-composed values;
//! - [`CoordCube`]: small integer coordinates (orientations, slice
//!   occupancy, partial permutations) that index the pre-computed tables.
//!
//! [`tables`] holds the transition tables (coordinate x move) and the
//! 4-bit pruning tables that lower-bound the remaining distance; both are
//! built once, persisted to a cache directory and shared read-only by any
//! number of concurrent solves.
//!
//! [`TwoPhase`] runs iterative-deepening DFS into the subgroup where all
//! orientations are zero and the middle-slice edges are home, pivots to a
//! second IDDFS over the ten subgroup-preserving moves, and backtracks out
//! of failed pivots until a solution fits the move budget.

pub mod cube;
pub mod error;
pub mod r#move;
pub mod scramble;
pub mod solver;
pub mod tables;

mod prelude;
#[cfg(test)]
mod test;

pub use cube::{CoordCube, Corner, CubieCube, Edge, Face, FaceletCube};
pub use error::{Error, VerifyError};
pub use r#move::{Amount, Move};
pub use scramble::{random_cube, random_moves};
pub use solver::{SolveOptions, TwoPhase, MAX_DEPTH_CAP};

/// Solve a facelet string to a whitespace-separated move sequence. Empty
/// string iff the cube is already solved.
pub fn solve(facelets: &str, options: &SolveOptions) -> Result<String, Error> {
    let cube = parse(facelets)?;
    let moves = TwoPhase::new(tables::global()).solve(&cube, options)?;
    Ok(Move::format_sequence(&moves))
}

/// Check that a facelet string denotes a solvable cube.
pub fn verify(facelets: &str) -> Result<(), Error> {
    parse(facelets).map(|_| ())
}

fn parse(facelets: &str) -> Result<CubieCube, Error> {
    let cube = facelets.parse::<FaceletCube>()?.to_cubie()?;
    cube.verify().map_err(Error::InvalidCube)?;
    Ok(cube)
}
