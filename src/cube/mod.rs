use crate::prelude::*;

mod coord;
pub(crate) mod cubie;
mod facelet;

pub use coord::CoordCube;
pub use cubie::{move_cube, CubieCube};
pub use facelet::FaceletCube;

/// The six face colours, in the fixed U, R, F, D, L, B order used by the
/// facelet string and by the move indexing (`Move::index` = face * 3 + turns).
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Debug, enum_iterator::Sequence)]
pub enum Face {
    Up,
    Right,
    Front,
    Down,
    Left,
    Back,
}

pub fn all_faces() -> impl Iterator<Item = Face> {
    enum_iterator::all()
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Axis {
    UD,
    LR,
    FB,
}

impl From<Face> for Axis {
    fn from(face: Face) -> Self {
        match face {
            Face::Up | Face::Down => Axis::UD,
            Face::Left | Face::Right => Axis::LR,
            Face::Front | Face::Back => Axis::FB,
        }
    }
}

impl Face {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn same_axis(a: Face, b: Face) -> bool {
        Axis::from(a) == Axis::from(b)
    }

    pub fn from_char(c: char) -> Option<Face> {
        match c {
            'U' => Some(Face::Up),
            'R' => Some(Face::Right),
            'F' => Some(Face::Front),
            'D' => Some(Face::Down),
            'L' => Some(Face::Left),
            'B' => Some(Face::Back),
            _ => None,
        }
    }
}

impl core::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Face::Up => "U",
                Face::Down => "D",
                Face::Front => "F",
                Face::Back => "B",
                Face::Left => "L",
                Face::Right => "R",
            }
        )
    }
}

/// The eight corner slots, named by their adjacent faces.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Debug, enum_iterator::Sequence)]
pub enum Corner {
    URF,
    UFL,
    ULB,
    UBR,
    DFR,
    DLF,
    DBL,
    DRB,
}

pub fn all_corners() -> impl Iterator<Item = Corner> {
    enum_iterator::all()
}

/// The twelve edge slots. The last four (FR, FL, BL, BR) form the middle
/// slice between the U and D layers.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Debug, enum_iterator::Sequence)]
pub enum Edge {
    UR,
    UF,
    UL,
    UB,
    DR,
    DF,
    DL,
    DB,
    FR,
    FL,
    BL,
    BR,
}

pub fn all_edges() -> impl Iterator<Item = Edge> {
    enum_iterator::all()
}
