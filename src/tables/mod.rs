use crate::cube::move_cube;
use crate::prelude::*;

use std::path::{Path, PathBuf};
use std::time::Instant;

pub mod cache;

use cache::TableKind;

pub const N_MOVE: usize = 18;
pub const N_TWIST: usize = 2187;
pub const N_FLIP: usize = 2048;
pub const N_SLICE: usize = 495;
pub const N_SLICE_PERM: usize = 24;
pub const N_SLICE_SORTED: usize = 11880;
pub const N_CORNERS: usize = 20160;
pub const N_UD_EDGES: usize = 20160;
pub const N_PARTIAL: usize = 1320;
pub const N_MERGE: usize = 336;
pub const N_PARITY: usize = 2;

/// The ten move indices that preserve the phase-1 subgroup:
/// U, U2, U', R2, F2, D, D2, D', L2, B2.
pub const PHASE2_MOVES: [usize; 10] = [0, 1, 2, 4, 7, 9, 10, 11, 13, 16];

/// Permutation parity after each move; quarter turns toggle it.
pub const PARITY_MOVE: [[u8; N_MOVE]; N_PARITY] = [
    [1, 0, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1],
    [0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0],
];

/// All pre-computed tables. Built (or loaded from the cache directory) once,
/// then shared read-only between any number of concurrent solves.
///
/// Move tables are flat row-major arrays: `table[coord * 18 + move]` is the
/// coordinate after the move. Pruning tables hold a 4-bit lower bound on the
/// move count to the phase goal, indexed by a coordinate pair.
pub struct Tables {
    pub twist_move: Vec<u16>,
    pub flip_move: Vec<u16>,
    pub slice_sorted_move: Vec<u16>,
    pub corners_move: Vec<u16>,
    pub ud_edges_move: Vec<u16>,
    pub ur_to_ul_move: Vec<u16>,
    pub ub_to_df_move: Vec<u16>,
    pub merge_ud_edges: Vec<u16>,
    pub slice_twist_prune: PruningTable,
    pub slice_flip_prune: PruningTable,
    pub corners_parity_prune: PruningTable,
    pub ud_edges_parity_prune: PruningTable,
}

lazy_static::lazy_static! {
    static ref TABLES: Tables = Tables::load_or_build(&default_cache_dir());
}

/// The process-wide table set, built on first use.
pub fn global() -> &'static Tables {
    &TABLES
}

/// Force the one-shot table build/load up front instead of on first solve.
pub fn init() {
    lazy_static::initialize(&TABLES);
}

fn default_cache_dir() -> PathBuf {
    std::env::var_os("PIVOTCUBE_TABLE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tables"))
}

impl Tables {
    pub fn load_or_build(cache_dir: &Path) -> Tables {
        let start = Instant::now();
        log::info!("Populating transition and pruning tables");

        let twist_move = moves_u16(cache_dir, TableKind::TwistMove, N_TWIST, || {
            build_move_table(N_TWIST, CubieCube::set_twist, |c| c.twist())
        });
        let flip_move = moves_u16(cache_dir, TableKind::FlipMove, N_FLIP, || {
            build_move_table(N_FLIP, CubieCube::set_flip, |c| c.flip())
        });
        let slice_sorted_move =
            moves_u16(cache_dir, TableKind::SliceSortedMove, N_SLICE_SORTED, || {
                build_move_table(N_SLICE_SORTED, CubieCube::set_slice_sorted, |c| {
                    c.slice_sorted()
                })
            });
        let corners_move = moves_u16(cache_dir, TableKind::CornersMove, N_CORNERS, || {
            build_move_table(N_CORNERS, CubieCube::set_corners, |c| c.corners())
        });
        // Entries are only meaningful where the six edges stay out of the
        // middle slice; phase-1 moves can push the raw coordinate past the
        // u16 range, so those cells hold a sentinel. Phase 2 never reads them.
        let ud_edges_move = moves_u16(cache_dir, TableKind::UdEdgesMove, N_UD_EDGES, || {
            build_move_table(N_UD_EDGES, CubieCube::set_ud_edges, |c| {
                let v = c.ud_edges();
                if v < N_UD_EDGES as u32 {
                    v as u16
                } else {
                    u16::MAX
                }
            })
        });
        let ur_to_ul_move = moves_u16(cache_dir, TableKind::UrToUlMove, N_PARTIAL, || {
            build_move_table(N_PARTIAL, CubieCube::set_ur_to_ul, |c| c.ur_to_ul())
        });
        let ub_to_df_move = moves_u16(cache_dir, TableKind::UbToDfMove, N_PARTIAL, || {
            build_move_table(N_PARTIAL, CubieCube::set_ub_to_df, |c| c.ub_to_df())
        });
        let merge_ud_edges = merge_table(cache_dir);

        let slice_twist_prune = prune(
            cache_dir,
            TableKind::SliceTwistPrune,
            N_TWIST * N_SLICE,
            || build_phase1_prune(N_TWIST, &twist_move, &slice_sorted_move),
        );
        let slice_flip_prune = prune(
            cache_dir,
            TableKind::SliceFlipPrune,
            N_FLIP * N_SLICE,
            || build_phase1_prune(N_FLIP, &flip_move, &slice_sorted_move),
        );
        let corners_parity_prune = prune(
            cache_dir,
            TableKind::CornersParityPrune,
            N_CORNERS * N_SLICE_PERM * N_PARITY,
            || build_phase2_prune(&corners_move, &slice_sorted_move),
        );
        let ud_edges_parity_prune = prune(
            cache_dir,
            TableKind::UdEdgesParityPrune,
            N_UD_EDGES * N_SLICE_PERM * N_PARITY,
            || build_phase2_prune(&ud_edges_move, &slice_sorted_move),
        );

        log::info!(
            "Finished populating tables, took {:?}",
            start.elapsed()
        );

        Tables {
            twist_move,
            flip_move,
            slice_sorted_move,
            corners_move,
            ud_edges_move,
            ur_to_ul_move,
            ub_to_df_move,
            merge_ud_edges,
            slice_twist_prune,
            slice_flip_prune,
            corners_parity_prune,
            ud_edges_parity_prune,
        }
    }

    /// Phase-1 heuristic: highest of the two admissible lower bounds.
    pub fn phase1_depth_bound(&self, flip: u16, twist: u16, slice: u16) -> u8 {
        let h_flip = self
            .slice_flip_prune
            .get(flip as usize * N_SLICE + slice as usize);
        let h_twist = self
            .slice_twist_prune
            .get(twist as usize * N_SLICE + slice as usize);
        h_flip.max(h_twist)
    }

    /// Phase-2 heuristic over the corner and edge permutation tables.
    pub fn phase2_depth_bound(
        &self,
        corners: u16,
        ud_edges: u16,
        slice_perm: u16,
        parity: u8,
    ) -> u8 {
        let idx = |coord: u16| {
            (coord as usize * N_SLICE_PERM + slice_perm as usize) * N_PARITY + parity as usize
        };
        let h_corners = self.corners_parity_prune.get(idx(corners));
        let h_edges = self.ud_edges_parity_prune.get(idx(ud_edges));
        h_corners.max(h_edges)
    }
}

fn moves_u16(
    dir: &Path,
    kind: TableKind,
    coords: usize,
    build: impl FnOnce() -> Vec<u16>,
) -> Vec<u16> {
    load_or(dir, kind, coords * N_MOVE, build)
}

fn merge_table(dir: &Path) -> Vec<u16> {
    load_or(dir, TableKind::MergeUdEdges, N_MERGE * N_MERGE, || {
        let mut table = vec![0u16; N_MERGE * N_MERGE];
        for a in 0..N_MERGE {
            for b in 0..N_MERGE {
                table[a * N_MERGE + b] = CubieCube::merge_ud_edges(a as u16, b as u16);
            }
        }
        table
    })
}

fn load_or(
    dir: &Path,
    kind: TableKind,
    len: usize,
    build: impl FnOnce() -> Vec<u16>,
) -> Vec<u16> {
    match cache::load_u16(dir, kind, len) {
        Ok(table) => table,
        Err(why) => {
            log::info!("rebuilding {}: {}", kind.file_name(), why);
            let table = build();
            if let Err(e) = cache::dump_u16(dir, kind, &table) {
                log::warn!("could not persist {}: {}", kind.file_name(), e);
            }
            table
        }
    }
}

fn prune(
    dir: &Path,
    kind: TableKind,
    entries: usize,
    build: impl FnOnce() -> PruningTable,
) -> PruningTable {
    match cache::load_u8(dir, kind, (entries + 1) / 2) {
        Ok(data) => PruningTable { data, entries },
        Err(why) => {
            log::info!("rebuilding {}: {}", kind.file_name(), why);
            let table = build();
            if let Err(e) = cache::dump_u8(dir, kind, &table.data) {
                log::warn!("could not persist {}: {}", kind.file_name(), e);
            }
            table
        }
    }
}

/// Dense array of 4-bit distances, two entries per byte. 0xF marks an
/// entry the flood has not reached yet.
pub struct PruningTable {
    data: Vec<u8>,
    entries: usize,
}

const UNSET: u8 = 0x0F;

impl PruningTable {
    fn unfilled(entries: usize) -> PruningTable {
        PruningTable {
            data: vec![0xFF; (entries + 1) / 2],
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    pub fn get(&self, index: usize) -> u8 {
        let byte = self.data[index >> 1];
        if index & 1 == 0 {
            byte & 0x0F
        } else {
            byte >> 4
        }
    }

    fn set(&mut self, index: usize, value: u8) {
        let byte = &mut self.data[index >> 1];
        if index & 1 == 0 {
            *byte = (*byte & 0xF0) | value;
        } else {
            *byte = (*byte & 0x0F) | (value << 4);
        }
    }
}

/// Transitions of one coordinate under all 18 moves. For each value the
/// canonical cube is synthesised, turned, and re-encoded; the fourth turn
/// of a face restores the cube for the next face.
fn build_move_table(
    coords: usize,
    set: impl Fn(&mut CubieCube, u16),
    get: impl Fn(&CubieCube) -> u16,
) -> Vec<u16> {
    let mut table = vec![0u16; coords * N_MOVE];
    let mut c = CubieCube::solved();
    for i in 0..coords {
        set(&mut c, i as u16);
        for face in 0..6 {
            let generator = move_cube(Move::from_index(face * 3));
            for k in 0..3 {
                c.multiply(generator);
                table[i * N_MOVE + face * 3 + k] = get(&c);
            }
            c.multiply(generator);
        }
    }
    table
}

/// Backward flood from the phase-1 goal (coordinate 0, slice 0): every pair
/// first reached from depth d gets distance d + 1.
fn build_phase1_prune(
    coord_count: usize,
    coord_move: &[u16],
    slice_sorted_move: &[u16],
) -> PruningTable {
    let total = coord_count * N_SLICE;
    let mut table = PruningTable::unfilled(total);
    table.set(0, 0);
    let mut done = 1usize;
    let mut depth = 0u8;
    while done != total {
        for i in 0..total {
            if table.get(i) != depth {
                continue;
            }
            let coord = i / N_SLICE;
            let slice = i % N_SLICE;
            for m in 0..N_MOVE {
                let next_coord = coord_move[coord * N_MOVE + m] as usize;
                let next_slice =
                    (slice_sorted_move[slice * N_SLICE_PERM * N_MOVE + m] / N_SLICE_PERM as u16)
                        as usize;
                let j = next_coord * N_SLICE + next_slice;
                if table.get(j) == UNSET {
                    table.set(j, depth + 1);
                    done += 1;
                }
            }
        }
        depth += 1;
    }
    table
}

/// Backward flood from the solved state through the ten phase-2 moves,
/// over (permutation coordinate, slice permutation, parity) triples.
fn build_phase2_prune(coord_move: &[u16], slice_sorted_move: &[u16]) -> PruningTable {
    let total = N_CORNERS * N_SLICE_PERM * N_PARITY;
    let mut table = PruningTable::unfilled(total);
    table.set(0, 0);
    let mut done = 1usize;
    let mut depth = 0u8;
    while done != total {
        for i in 0..total {
            if table.get(i) != depth {
                continue;
            }
            let parity = i % N_PARITY;
            let slice = (i / N_PARITY) % N_SLICE_PERM;
            let coord = (i / N_PARITY) / N_SLICE_PERM;
            for &m in &PHASE2_MOVES {
                let next_coord = coord_move[coord * N_MOVE + m] as usize;
                let next_slice = slice_sorted_move[slice * N_MOVE + m] as usize;
                let next_parity = PARITY_MOVE[parity][m] as usize;
                let j = (next_coord * N_SLICE_PERM + next_slice) * N_PARITY + next_parity;
                if table.get(j) == UNSET {
                    table.set(j, depth + 1);
                    done += 1;
                }
            }
        }
        depth += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::test_tables;

    #[test]
    fn nibble_packing() {
        let mut t = PruningTable::unfilled(5);
        assert_eq!(t.len(), 5);
        t.set(0, 3);
        t.set(1, 9);
        t.set(4, 1);
        assert_eq!(t.get(0), 3);
        assert_eq!(t.get(1), 9);
        assert_eq!(t.get(2), UNSET);
        assert_eq!(t.get(4), 1);
    }

    #[test]
    fn move_tables_match_the_codec() {
        let tables = test_tables();
        let mut c = CubieCube::solved();
        for v in (0..N_TWIST as u16).step_by(13) {
            c.set_twist(v);
            for m in Move::all() {
                let expected = c.apply(m).twist();
                assert_eq!(tables.twist_move[v as usize * N_MOVE + m.index()], expected);
            }
        }
        for v in (0..N_SLICE_SORTED as u16).step_by(37) {
            c = CubieCube::solved();
            c.set_slice_sorted(v);
            for m in Move::all() {
                let expected = c.apply(m).slice_sorted();
                assert_eq!(
                    tables.slice_sorted_move[v as usize * N_MOVE + m.index()],
                    expected
                );
            }
        }
        for v in (0..N_CORNERS as u16).step_by(101) {
            c = CubieCube::solved();
            c.set_corners(v);
            for m in Move::all() {
                let expected = c.apply(m).corners();
                assert_eq!(
                    tables.corners_move[v as usize * N_MOVE + m.index()],
                    expected
                );
            }
        }
    }

    #[test]
    fn parity_move_matches_the_cubie_level() {
        for parity in 0..2u8 {
            for m in Move::all() {
                // A cube with the given corner parity: identity or one swap.
                let mut c = CubieCube::solved();
                if parity == 1 {
                    c.cp.swap(0, 1);
                    c.ep.swap(0, 1);
                }
                let expected = c.apply(m).corner_parity();
                assert_eq!(PARITY_MOVE[parity as usize][m.index()], expected);
            }
        }
    }

    #[test]
    fn phase1_prune_solved_is_zero() {
        let tables = test_tables();
        assert_eq!(tables.phase1_depth_bound(0, 0, 0), 0);
        // One quarter turn of R leaves the subgroup.
        let c = CubieCube::solved().apply("R".parse().unwrap());
        assert!(tables.phase1_depth_bound(c.flip(), c.twist(), c.slice()) > 0);
    }

    #[test]
    fn phase1_prune_exact_to_depth_three() {
        use std::collections::HashMap;

        let tables = test_tables();
        // Independent BFS over (flip, slice) pairs up to depth 3.
        let mut dist: HashMap<(u16, u16), u8> = HashMap::new();
        let mut frontier = vec![(0u16, 0u16)];
        dist.insert((0, 0), 0);
        for depth in 0..3u8 {
            let mut next = Vec::new();
            for &(flip, slice) in &frontier {
                for m in 0..N_MOVE {
                    let f2 = tables.flip_move[flip as usize * N_MOVE + m];
                    let s2 = tables.slice_sorted_move
                        [slice as usize * N_SLICE_PERM * N_MOVE + m]
                        / N_SLICE_PERM as u16;
                    if !dist.contains_key(&(f2, s2)) {
                        dist.insert((f2, s2), depth + 1);
                        next.push((f2, s2));
                    }
                }
            }
            frontier = next;
        }
        for (&(flip, slice), &d) in &dist {
            assert_eq!(
                tables
                    .slice_flip_prune
                    .get(flip as usize * N_SLICE + slice as usize),
                d
            );
        }
        // No other entry may claim a distance this small.
        let close = (0..N_FLIP * N_SLICE)
            .filter(|&i| tables.slice_flip_prune.get(i) <= 3)
            .count();
        assert_eq!(close, dist.len());
    }

    #[test]
    fn phase2_prune_admissible_on_short_scrambles() {
        let tables = test_tables();
        // Any k-move phase-2 scramble must have a bound of at most k.
        let seqs = ["U", "U D2", "R2 U F2", "U2 R2 U' L2 D", "R2 L2 U2 D2 F2 B2"];
        for (k, seq) in seqs.iter().enumerate() {
            let c = crate::test::cube_with_moves(seq);
            let bound = tables.phase2_depth_bound(
                c.corners(),
                c.ud_edges() as u16,
                c.slice_sorted(),
                c.corner_parity(),
            );
            assert!(
                bound as usize <= k + 1,
                "bound {} for {}-move scramble {}",
                bound,
                k + 1,
                seq
            );
        }
    }
}
