//! Error types surfaced by parsing, validation and the solver.

use std::fmt;

/// Structural invariant violated by a cubie-level cube. `code()` gives the
/// classic negative return value, ordered by which check runs first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyError {
    /// Not every edge cubie appears exactly once.
    EdgeCount,
    /// An edge orientation outside {0, 1}.
    EdgeOrient,
    /// Not every corner cubie appears exactly once.
    CornerCount,
    /// A corner orientation outside {0, 1, 2}.
    CornerOrient,
    /// Corner and edge permutation parities disagree.
    PermutationParity,
    /// Corner twists do not sum to 0 mod 3.
    TwistSum,
    /// Edge flips do not sum to 0 mod 2.
    FlipSum,
}

impl VerifyError {
    pub fn code(self) -> i8 {
        match self {
            VerifyError::EdgeCount => -1,
            VerifyError::EdgeOrient => -2,
            VerifyError::CornerCount => -3,
            VerifyError::CornerOrient => -4,
            VerifyError::PermutationParity => -5,
            VerifyError::TwistSum => -6,
            VerifyError::FlipSum => -7,
        }
    }
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyError::EdgeCount => write!(f, "not all 12 edges exist exactly once"),
            VerifyError::EdgeOrient => write!(f, "edge orientation out of range"),
            VerifyError::CornerCount => write!(f, "not all 8 corners exist exactly once"),
            VerifyError::CornerOrient => write!(f, "corner orientation out of range"),
            VerifyError::PermutationParity => {
                write!(f, "two corners or two edges have to be exchanged")
            }
            VerifyError::TwistSum => write!(f, "one corner has to be twisted"),
            VerifyError::FlipSum => write!(f, "one edge has to be flipped"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The facelet string is not 54 characters long.
    BadFaceletCount(usize),
    /// A character outside {U, R, F, D, L, B}.
    BadFaceletChar(char),
    /// Some colour does not appear exactly nine times.
    BadStickerCount,
    /// A centre sticker is not in its canonical position.
    BadCenter,
    /// A corner slot's sticker triple matches no corner cubie.
    CornerNotFound,
    /// An edge slot's sticker pair matches no edge cubie.
    EdgeNotFound,
    /// The cube parsed but is not solvable.
    InvalidCube(VerifyError),
    /// A transition or pruning table could not be loaded or built.
    TableUnavailable(String),
    /// The wall-clock budget elapsed before a solution was found.
    Timeout,
    /// No solution within the requested move bound.
    NoSolution,
    /// Self-verification of a found solution failed; a logic bug.
    Internal(String),
}

impl Error {
    /// The printable `"Error N"` string of the thin wrapper interface.
    pub fn wrapper_code(&self) -> u8 {
        match self {
            Error::BadFaceletCount(_) => 1,
            Error::BadFaceletChar(_) | Error::BadStickerCount | Error::BadCenter => 2,
            Error::CornerNotFound | Error::EdgeNotFound => 2,
            Error::InvalidCube(v) => match v {
                VerifyError::EdgeCount => 3,
                VerifyError::CornerCount => 4,
                VerifyError::PermutationParity => 5,
                VerifyError::CornerOrient | VerifyError::TwistSum => 6,
                VerifyError::EdgeOrient | VerifyError::FlipSum => 7,
            },
            Error::NoSolution | Error::Timeout => 8,
            Error::TableUnavailable(_) | Error::Internal(_) => 8,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BadFaceletCount(n) => write!(f, "expected 54 facelets, got {}", n),
            Error::BadFaceletChar(c) => write!(f, "facelet character {:?} is not in URFDLB", c),
            Error::BadStickerCount => write!(f, "each colour must appear exactly 9 times"),
            Error::BadCenter => write!(f, "centre stickers must spell URFDLB in order"),
            Error::CornerNotFound => write!(f, "a corner sticker triple matches no corner"),
            Error::EdgeNotFound => write!(f, "an edge sticker pair matches no edge"),
            Error::InvalidCube(v) => write!(f, "unsolvable cube: {}", v),
            Error::TableUnavailable(why) => write!(f, "lookup tables unavailable: {}", why),
            Error::Timeout => write!(f, "time budget exhausted"),
            Error::NoSolution => write!(f, "no solution within the move bound"),
            Error::Internal(why) => write!(f, "internal error: {}", why),
        }
    }
}

impl std::error::Error for Error {}
