use crate::prelude::*;
use crate::tables::{Tables, N_MERGE, N_MOVE, PARITY_MOVE};

/// The cube projected onto the integer coordinates used as table indices.
///
/// Phase 1 reads `flip`, `twist` and the combination part of
/// `slice_sorted`; phase 2 reads the permutation coordinates. `ud_edges`
/// only stays inside its table range while the six U/D-face edges avoid
/// the middle slice, which always holds inside the phase-1 goal subgroup.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CoordCube {
    pub twist: u16,
    pub flip: u16,
    pub slice_sorted: u16,
    pub parity: u8,
    pub corners: u16,
    pub ur_to_ul: u16,
    pub ub_to_df: u16,
    pub ud_edges: u32,
}

impl From<&CubieCube> for CoordCube {
    fn from(c: &CubieCube) -> Self {
        CoordCube {
            twist: c.twist(),
            flip: c.flip(),
            slice_sorted: c.slice_sorted(),
            parity: c.corner_parity(),
            corners: c.corners(),
            ur_to_ul: c.ur_to_ul(),
            ub_to_df: c.ub_to_df(),
            ud_edges: c.ud_edges(),
        }
    }
}

impl CoordCube {
    pub fn slice(&self) -> u16 {
        self.slice_sorted / 24
    }

    /// A move on the coordinate level, through the transition tables.
    pub fn apply(mut self, tables: &Tables, m: Move) -> Self {
        let mv = m.index();
        let row = |coord: u16| coord as usize * N_MOVE + mv;
        self.twist = tables.twist_move[row(self.twist)];
        self.flip = tables.flip_move[row(self.flip)];
        self.slice_sorted = tables.slice_sorted_move[row(self.slice_sorted)];
        self.parity = PARITY_MOVE[self.parity as usize][mv];
        self.corners = tables.corners_move[row(self.corners)];
        self.ur_to_ul = tables.ur_to_ul_move[row(self.ur_to_ul)];
        self.ub_to_df = tables.ub_to_df_move[row(self.ub_to_df)];
        // Valid only while the six U/D edges are outside the middle slice.
        if (self.ur_to_ul as usize) < N_MERGE && (self.ub_to_df as usize) < N_MERGE {
            self.ud_edges = tables.merge_ud_edges
                [self.ur_to_ul as usize * N_MERGE + self.ub_to_df as usize]
                as u32;
        } else {
            self.ud_edges = u32::MAX;
        }
        self
    }

    pub fn is_phase1_solved(&self) -> bool {
        self.flip == 0 && self.twist == 0 && self.slice() == 0
    }

    pub fn is_solved(&self) -> bool {
        self.is_phase1_solved()
            && self.slice_sorted == 0
            && self.corners == 0
            && self.ud_edges == 0
            && self.parity == 0
    }
}
