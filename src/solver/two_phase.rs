use crate::error::Error;
use crate::prelude::*;
use crate::tables::{Tables, N_MERGE, N_MOVE, PARITY_MOVE, PHASE2_MOVES};

use std::time::Instant;

/// Phase 2 never needs more than this many moves before the search falls
/// back to a deeper phase-1 entry point.
const PHASE2_MOVE_CAP: u8 = 10;

/// Iterative-deepening two-phase search.
///
/// Phase 1 drives the cube into the subgroup where all orientations are
/// zero and the middle-slice edges are home, trying all 18 moves; at every
/// subgroup entry it pivots into phase 2, which finishes the solve with the
/// ten subgroup-preserving moves. A failed pivot backtracks into phase 1.
///
/// One mutable move stack plus incrementally updated coordinate and cubie
/// views are the whole search state; nothing else is retained per node.
pub struct TwoPhase<'t> {
    tables: &'t Tables,
    max_depth: u8,
    deadline: Option<Instant>,
    moves: Vec<Move>,
    cubie: CubieCube,
}

impl<'t> TwoPhase<'t> {
    pub fn new(tables: &'t Tables) -> Self {
        TwoPhase {
            tables,
            max_depth: SolveOptions::default().max_depth,
            deadline: None,
            moves: Vec::with_capacity(MAX_DEPTH_CAP as usize),
            cubie: CubieCube::solved(),
        }
    }

    /// Find a move sequence of at most `options.max_depth` moves solving
    /// `cube`. The sequence is the first phase-2 success of the deepening
    /// phase-1 scan, so repeated calls return identical solutions.
    pub fn solve(
        &mut self,
        cube: &CubieCube,
        options: &SolveOptions,
    ) -> Result<Vec<Move>, Error> {
        cube.verify().map_err(Error::InvalidCube)?;
        self.max_depth = options.max_depth.min(MAX_DEPTH_CAP);
        self.deadline = options.timeout.map(|t| Instant::now() + t);

        let start = CoordCube::from(cube);
        let lower = self
            .tables
            .phase1_depth_bound(start.flip, start.twist, start.slice());

        for depth in lower..=self.max_depth {
            log::debug!("searching phase 1 to depth {}", depth);
            self.moves.clear();
            self.cubie = *cube;
            if self.phase1(start.flip, start.twist, start.slice_sorted, depth)? {
                let solution = self.moves.clone();
                if options.verify_solution && !cube.apply_all(solution.iter().copied()).is_solved()
                {
                    let why = format!(
                        "sequence {:?} does not solve its cube",
                        Move::format_sequence(&solution)
                    );
                    log::error!("{}", why);
                    return Err(Error::Internal(why));
                }
                log::info!("solved in {} moves", solution.len());
                return Ok(solution);
            }
        }
        Err(Error::NoSolution)
    }

    /// Depth-limited DFS towards the phase-1 subgroup. The subgroup must be
    /// reached exactly when the budget runs out; hitting it with 1..=4
    /// moves to spare is cut off, since only phase-2 moves could follow and
    /// phase 2 enumerates those itself.
    fn phase1(&mut self, flip: u16, twist: u16, slice_sorted: u16, togo: u8) -> Result<bool, Error> {
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Err(Error::Timeout);
            }
        }
        if togo == 0 {
            return self.pivot();
        }

        let prev = self.moves.last().map(|m| m.face);
        for m in Move::all() {
            if let Some(prev) = prev {
                if m.redundant_after(prev) {
                    continue;
                }
            }
            let mv = m.index();
            let flip1 = self.tables.flip_move[flip as usize * N_MOVE + mv];
            let twist1 = self.tables.twist_move[twist as usize * N_MOVE + mv];
            let slice_sorted1 =
                self.tables.slice_sorted_move[slice_sorted as usize * N_MOVE + mv];

            let bound = self
                .tables
                .phase1_depth_bound(flip1, twist1, slice_sorted1 / 24);
            if bound >= togo {
                continue;
            }
            if bound == 0 && (1..=4).contains(&(togo - 1)) {
                continue;
            }

            self.moves.push(m);
            self.cubie = self.cubie.apply(m);
            if self.phase1(flip1, twist1, slice_sorted1, togo - 1)? {
                return Ok(true);
            }
            self.cubie = self.cubie.apply(m.inverse());
            self.moves.pop();
        }
        Ok(false)
    }

    /// Hand over to phase 2. The phase-2 coordinates are read off the
    /// cubie view carried through phase 1; the six-edge permutation comes
    /// from merging the two three-edge coordinates, which is exact inside
    /// the subgroup.
    fn pivot(&mut self) -> Result<bool, Error> {
        let depth1 = self.moves.len() as u8;
        let budget = PHASE2_MOVE_CAP.min(self.max_depth - depth1);

        let slice_sorted = self.cubie.slice_sorted();
        let corners = self.cubie.corners();
        let parity = self.cubie.corner_parity();
        let ud_edges = self.tables.merge_ud_edges
            [self.cubie.ur_to_ul() as usize * N_MERGE + self.cubie.ub_to_df() as usize];

        let bound = self
            .tables
            .phase2_depth_bound(corners, ud_edges, slice_sorted, parity);
        if bound == 0 {
            return Ok(true);
        }
        if bound > budget {
            return Ok(false);
        }
        for togo in bound..=budget {
            if self.phase2(corners, ud_edges, slice_sorted, parity, togo)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Depth-limited DFS inside the subgroup, restricted to the ten moves
    /// that preserve it.
    fn phase2(
        &mut self,
        corners: u16,
        ud_edges: u16,
        slice_sorted: u16,
        parity: u8,
        togo: u8,
    ) -> Result<bool, Error> {
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Err(Error::Timeout);
            }
        }
        if togo == 0 {
            return Ok(corners == 0 && ud_edges == 0 && slice_sorted == 0 && parity == 0);
        }

        let prev = self.moves.last().map(|m| m.face);
        for &mv in &PHASE2_MOVES {
            let m = Move::from_index(mv);
            if let Some(prev) = prev {
                if m.redundant_after(prev) {
                    continue;
                }
            }
            let corners1 = self.tables.corners_move[corners as usize * N_MOVE + mv];
            let ud_edges1 = self.tables.ud_edges_move[ud_edges as usize * N_MOVE + mv];
            let slice_sorted1 =
                self.tables.slice_sorted_move[slice_sorted as usize * N_MOVE + mv];
            let parity1 = PARITY_MOVE[parity as usize][mv];

            if self
                .tables
                .phase2_depth_bound(corners1, ud_edges1, slice_sorted1, parity1)
                >= togo
            {
                continue;
            }

            self.moves.push(m);
            if self.phase2(corners1, ud_edges1, slice_sorted1, parity1, togo - 1)? {
                return Ok(true);
            }
            self.moves.pop();
        }
        Ok(false)
    }
}
