use crate::error::VerifyError;
use crate::prelude::*;

use Corner::*;
use Edge::*;

/// Permutation + orientation representation of the 20 movable cubies.
///
/// `cp[i]` names the corner cubie sitting in slot `i`, `co[i]` counts its
/// clockwise twists relative to the solved reference; `ep`/`eo` do the same
/// for edges with flips instead of twists.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CubieCube {
    pub cp: [Corner; 8],
    pub co: [u8; 8],
    pub ep: [Edge; 12],
    pub eo: [u8; 12],
}

/// The six quarter-turn generators as literal permutation tables. The other
/// twelve moves are compositions of these.
const GENERATORS: [CubieCube; 6] = [
    // U
    CubieCube {
        cp: [UBR, URF, UFL, ULB, DFR, DLF, DBL, DRB],
        co: [0; 8],
        ep: [UB, UR, UF, UL, DR, DF, DL, DB, FR, FL, BL, BR],
        eo: [0; 12],
    },
    // R
    CubieCube {
        cp: [DFR, UFL, ULB, URF, DRB, DLF, DBL, UBR],
        co: [2, 0, 0, 1, 1, 0, 0, 2],
        ep: [FR, UF, UL, UB, BR, DF, DL, DB, DR, FL, BL, UR],
        eo: [0; 12],
    },
    // F
    CubieCube {
        cp: [UFL, DLF, ULB, UBR, URF, DFR, DBL, DRB],
        co: [1, 2, 0, 0, 2, 1, 0, 0],
        ep: [UR, FL, UL, UB, DR, FR, DL, DB, UF, DF, BL, BR],
        eo: [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
    },
    // D
    CubieCube {
        cp: [URF, UFL, ULB, UBR, DLF, DBL, DRB, DFR],
        co: [0; 8],
        ep: [UR, UF, UL, UB, DF, DL, DB, DR, FR, FL, BL, BR],
        eo: [0; 12],
    },
    // L
    CubieCube {
        cp: [URF, ULB, DBL, UBR, DFR, UFL, DLF, DRB],
        co: [0, 1, 2, 0, 0, 2, 1, 0],
        ep: [UR, UF, BL, UB, DR, DF, FL, DB, FR, UL, DL, BR],
        eo: [0; 12],
    },
    // B
    CubieCube {
        cp: [URF, UFL, UBR, DRB, DFR, DLF, ULB, DBL],
        co: [0, 0, 1, 2, 0, 0, 2, 1],
        ep: [UR, UF, UL, BR, DR, DF, DL, BL, FR, FL, UB, DB],
        eo: [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
    },
];

lazy_static::lazy_static! {
    static ref MOVE_CUBES: [CubieCube; 18] = {
        let mut cubes = [CubieCube::solved(); 18];
        for (face, generator) in GENERATORS.iter().enumerate() {
            let mut c = CubieCube::solved();
            for k in 0..3 {
                c.multiply(generator);
                cubes[face * 3 + k] = c;
            }
        }
        cubes
    };
}

/// The cubie-level value of one of the 18 face turns.
pub fn move_cube(m: Move) -> &'static CubieCube {
    &MOVE_CUBES[m.index()]
}

impl CubieCube {
    pub fn solved() -> CubieCube {
        CubieCube {
            cp: [URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB],
            co: [0; 8],
            ep: [UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR],
            eo: [0; 12],
        }
    }

    pub fn is_solved(&self) -> bool {
        *self == CubieCube::solved()
    }

    pub fn apply(mut self, m: Move) -> CubieCube {
        self.multiply(move_cube(m));
        self
    }

    pub fn apply_all(self, moves: impl IntoIterator<Item = Move>) -> CubieCube {
        moves.into_iter().fold(self, |cube, m| cube.apply(m))
    }

    /// Composition "apply `b` after `self`". Not commutative.
    pub fn multiply(&mut self, b: &CubieCube) {
        self.corner_multiply(b);
        self.edge_multiply(b);
    }

    pub fn corner_multiply(&mut self, b: &CubieCube) {
        let mut cp = [URF; 8];
        let mut co = [0u8; 8];
        for i in 0..8 {
            let from = b.cp[i] as usize;
            cp[i] = self.cp[from];
            co[i] = (self.co[from] + b.co[i]) % 3;
        }
        self.cp = cp;
        self.co = co;
    }

    pub fn edge_multiply(&mut self, b: &CubieCube) {
        let mut ep = [UR; 12];
        let mut eo = [0u8; 12];
        for i in 0..12 {
            let from = b.ep[i] as usize;
            ep[i] = self.ep[from];
            eo[i] = (self.eo[from] + b.eo[i]) % 2;
        }
        self.ep = ep;
        self.eo = eo;
    }

    pub fn inverse(&self) -> CubieCube {
        let mut inv = CubieCube::solved();
        for (slot, e) in all_edges().enumerate() {
            inv.ep[self.ep[slot] as usize] = e;
        }
        for slot in 0..12 {
            inv.eo[slot] = self.eo[inv.ep[slot] as usize];
        }
        for (slot, c) in all_corners().enumerate() {
            inv.cp[self.cp[slot] as usize] = c;
        }
        for slot in 0..8 {
            inv.co[slot] = (3 - self.co[inv.cp[slot] as usize]) % 3;
        }
        inv
    }

    /// Check the seven structural invariants, in a fixed order.
    pub fn verify(&self) -> Result<(), VerifyError> {
        let mut edge_count = [0u8; 12];
        for e in &self.ep {
            edge_count[*e as usize] += 1;
        }
        if edge_count.iter().any(|&c| c != 1) {
            return Err(VerifyError::EdgeCount);
        }
        if self.eo.iter().any(|&o| o > 1) {
            return Err(VerifyError::EdgeOrient);
        }
        let mut corner_count = [0u8; 8];
        for c in &self.cp {
            corner_count[*c as usize] += 1;
        }
        if corner_count.iter().any(|&c| c != 1) {
            return Err(VerifyError::CornerCount);
        }
        if self.co.iter().any(|&o| o > 2) {
            return Err(VerifyError::CornerOrient);
        }
        if self.corner_parity() != self.edge_parity() {
            return Err(VerifyError::PermutationParity);
        }
        if self.co.iter().map(|&o| o as u32).sum::<u32>() % 3 != 0 {
            return Err(VerifyError::TwistSum);
        }
        if self.eo.iter().map(|&o| o as u32).sum::<u32>() % 2 != 0 {
            return Err(VerifyError::FlipSum);
        }
        Ok(())
    }

    pub fn corner_parity(&self) -> u8 {
        let mut s = 0;
        for i in (1..8).rev() {
            for j in 0..i {
                if self.cp[j] > self.cp[i] {
                    s += 1;
                }
            }
        }
        s % 2
    }

    pub fn edge_parity(&self) -> u8 {
        let mut s = 0;
        for i in (1..12).rev() {
            for j in 0..i {
                if self.ep[j] > self.ep[i] {
                    s += 1;
                }
            }
        }
        s % 2
    }

    // ------------------------------------------------------------------
    // Coordinate codec. Every pair below is a bijection between one axis
    // of the cube state and a dense integer range; `set_*` builds the
    // canonical cube for a coordinate value, leaving other axes solved.

    /// Corner orientations as a base-3 number, 0..2187.
    pub fn twist(&self) -> u16 {
        (0..7).rev().fold(0, |t, i| 3 * t + self.co[i] as u16)
    }

    pub fn set_twist(&mut self, mut twist: u16) {
        let mut total = 0u16;
        for i in 0..7 {
            self.co[i] = (twist % 3) as u8;
            total += twist % 3;
            twist /= 3;
        }
        self.co[7] = ((3 - total % 3) % 3) as u8;
    }

    /// Edge orientations as a base-2 number, 0..2048.
    pub fn flip(&self) -> u16 {
        (0..11).rev().fold(0, |f, i| 2 * f + self.eo[i] as u16)
    }

    pub fn set_flip(&mut self, mut flip: u16) {
        let mut total = 0u16;
        for i in 0..11 {
            self.eo[i] = (flip & 1) as u8;
            total += flip & 1;
            flip >>= 1;
        }
        self.eo[11] = (total % 2) as u8;
    }

    /// Where the four middle-slice edges sit, ignoring their order: a
    /// combination rank 0..495 that is 0 when they are all in the slice.
    pub fn slice(&self) -> u16 {
        self.slice_sorted() / 24
    }

    /// Positions and order of the four middle-slice edges, 0..11880.
    /// Equals `slice() * 24 + rank of their arrangement`.
    pub fn slice_sorted(&self) -> u16 {
        let mut a = 0u16;
        let mut x = 0usize;
        let mut edge4 = [FR; 4];
        for j in (0..12).rev() {
            if self.ep[j] >= FR {
                a += cnk(11 - j, x + 1) as u16;
                edge4[3 - x] = self.ep[j];
                x += 1;
            }
        }
        let mut b = 0u16;
        for j in (1..4).rev() {
            let mut k = 0u16;
            while edge4[j] as usize != j + 8 {
                rotate_left(&mut edge4, 0, j);
                k += 1;
            }
            b = (j as u16 + 1) * b + k;
        }
        24 * a + b
    }

    pub fn set_slice_sorted(&mut self, idx: u16) {
        let mut slice_edge = [FR, FL, BL, BR];
        let other_edge = [UR, UF, UL, UB, DR, DF, DL, DB];
        let mut b = idx % 24;
        let mut a = (idx / 24) as i32;
        self.ep = [DB; 12];
        for j in 1..4 {
            let mut k = b % (j as u16 + 1);
            b /= j as u16 + 1;
            while k > 0 {
                rotate_right(&mut slice_edge, 0, j);
                k -= 1;
            }
        }
        let mut x = 3i32;
        for j in 0..12 {
            if a - cnk(11 - j, (x + 1) as usize) as i32 >= 0 {
                self.ep[j] = slice_edge[(3 - x) as usize];
                a -= cnk(11 - j, (x + 1) as usize) as i32;
                x -= 1;
            }
        }
        let mut x = 0;
        for j in 0..12 {
            if self.ep[j] == DB {
                self.ep[j] = other_edge[x];
                x += 1;
            }
        }
    }

    /// Permutation of the six corners URF..DLF over the eight corner slots,
    /// 0..20160. The last two corners are pinned by permutation parity.
    pub fn corners(&self) -> u16 {
        let mut a = 0u16;
        let mut x = 0usize;
        let mut corner6 = [URF; 6];
        for j in 0..8 {
            if self.cp[j] <= DLF {
                a += cnk(j, x + 1) as u16;
                corner6[x] = self.cp[j];
                x += 1;
            }
        }
        let mut b = 0u16;
        for j in (1..6).rev() {
            let mut k = 0u16;
            while corner6[j] as usize != j {
                rotate_left(&mut corner6, 0, j);
                k += 1;
            }
            b = (j as u16 + 1) * b + k;
        }
        720 * a + b
    }

    pub fn set_corners(&mut self, idx: u16) {
        let mut corner6 = [URF, UFL, ULB, UBR, DFR, DLF];
        let other_corner = [DBL, DRB];
        let mut b = idx % 720;
        let mut a = (idx / 720) as i32;
        self.cp = [DRB; 8];
        for j in 1..6 {
            let mut k = b % (j as u16 + 1);
            b /= j as u16 + 1;
            while k > 0 {
                rotate_right(&mut corner6, 0, j);
                k -= 1;
            }
        }
        let mut x = 5i32;
        for j in (0..8).rev() {
            if a - cnk(j, (x + 1) as usize) as i32 >= 0 {
                self.cp[j] = corner6[x as usize];
                a -= cnk(j, (x + 1) as usize) as i32;
                x -= 1;
            }
        }
        let mut x = 0;
        for j in 0..8 {
            if self.cp[j] == DRB {
                self.cp[j] = other_corner[x];
                x += 1;
            }
        }
    }

    /// Permutation of the six edges UR..DF, 0..20160 whenever none of them
    /// is in the middle slice (always true inside G1), larger otherwise.
    pub fn ud_edges(&self) -> u32 {
        let mut a = 0u32;
        let mut x = 0usize;
        let mut edge6 = [UR; 6];
        for j in 0..12 {
            if self.ep[j] <= DF {
                a += cnk(j, x + 1);
                edge6[x] = self.ep[j];
                x += 1;
            }
        }
        let mut b = 0u32;
        for j in (1..6).rev() {
            let mut k = 0u32;
            while edge6[j] as usize != j {
                rotate_left(&mut edge6, 0, j);
                k += 1;
            }
            b = (j as u32 + 1) * b + k;
        }
        720 * a + b
    }

    pub fn set_ud_edges(&mut self, idx: u16) {
        let mut edge6 = [UR, UF, UL, UB, DR, DF];
        let other_edge = [DL, DB, FR, FL, BL, BR];
        let mut b = idx % 720;
        let mut a = (idx / 720) as i32;
        self.ep = [BR; 12];
        for j in 1..6 {
            let mut k = b % (j as u16 + 1);
            b /= j as u16 + 1;
            while k > 0 {
                rotate_right(&mut edge6, 0, j);
                k -= 1;
            }
        }
        let mut x = 5i32;
        for j in (0..12).rev() {
            if a - cnk(j, (x + 1) as usize) as i32 >= 0 {
                self.ep[j] = edge6[x as usize];
                a -= cnk(j, (x + 1) as usize) as i32;
                x -= 1;
            }
        }
        let mut x = 0;
        for j in 0..12 {
            if self.ep[j] == BR {
                self.ep[j] = other_edge[x];
                x += 1;
            }
        }
    }

    /// Positions and order of the UR, UF, UL edges, 0..1320. Below 336 the
    /// three edges all sit outside the middle slice.
    pub fn ur_to_ul(&self) -> u16 {
        let mut a = 0u16;
        let mut x = 0usize;
        let mut edge3 = [UR; 3];
        for j in 0..12 {
            if self.ep[j] <= UL {
                a += cnk(j, x + 1) as u16;
                edge3[x] = self.ep[j];
                x += 1;
            }
        }
        let mut b = 0u16;
        for j in (1..3).rev() {
            let mut k = 0u16;
            while edge3[j] as usize != j {
                rotate_left(&mut edge3, 0, j);
                k += 1;
            }
            b = (j as u16 + 1) * b + k;
        }
        6 * a + b
    }

    pub fn set_ur_to_ul(&mut self, idx: u16) {
        let mut edge3 = [UR, UF, UL];
        let mut b = idx % 6;
        let mut a = (idx / 6) as i32;
        self.ep = [BR; 12];
        for j in 1..3 {
            let mut k = b % (j as u16 + 1);
            b /= j as u16 + 1;
            while k > 0 {
                rotate_right(&mut edge3, 0, j);
                k -= 1;
            }
        }
        let mut x = 2i32;
        for j in (0..12).rev() {
            if a - cnk(j, (x + 1) as usize) as i32 >= 0 {
                self.ep[j] = edge3[x as usize];
                a -= cnk(j, (x + 1) as usize) as i32;
                x -= 1;
            }
        }
    }

    /// Positions and order of the UB, DR, DF edges, 0..1320. 114 on the
    /// solved cube; below 336 the three edges avoid the middle slice.
    pub fn ub_to_df(&self) -> u16 {
        let mut a = 0u16;
        let mut x = 0usize;
        let mut edge3 = [UB; 3];
        for j in 0..12 {
            if self.ep[j] >= UB && self.ep[j] <= DF {
                a += cnk(j, x + 1) as u16;
                edge3[x] = self.ep[j];
                x += 1;
            }
        }
        let mut b = 0u16;
        for j in (1..3).rev() {
            let mut k = 0u16;
            while edge3[j] as usize != j + 3 {
                rotate_left(&mut edge3, 0, j);
                k += 1;
            }
            b = (j as u16 + 1) * b + k;
        }
        6 * a + b
    }

    pub fn set_ub_to_df(&mut self, idx: u16) {
        let mut edge3 = [UB, DR, DF];
        let mut b = idx % 6;
        let mut a = (idx / 6) as i32;
        self.ep = [BR; 12];
        for j in 1..3 {
            let mut k = b % (j as u16 + 1);
            b /= j as u16 + 1;
            while k > 0 {
                rotate_right(&mut edge3, 0, j);
                k -= 1;
            }
        }
        let mut x = 2i32;
        for j in (0..12).rev() {
            if a - cnk(j, (x + 1) as usize) as i32 >= 0 {
                self.ep[j] = edge3[x as usize];
                a -= cnk(j, (x + 1) as usize) as i32;
                x -= 1;
            }
        }
    }

    /// Combine the two three-edge coordinates into the six-edge phase-2
    /// coordinate. Only meaningful when both are below 336; overlapping
    /// placements (impossible on a real cube) yield 0.
    pub fn merge_ud_edges(ur_to_ul: u16, ub_to_df: u16) -> u16 {
        let mut a = CubieCube::solved();
        a.set_ur_to_ul(ur_to_ul);
        let mut b = CubieCube::solved();
        b.set_ub_to_df(ub_to_df);
        for i in 0..8 {
            if a.ep[i] != BR {
                if b.ep[i] != BR {
                    return 0;
                }
                b.ep[i] = a.ep[i];
            }
        }
        b.ud_edges() as u16
    }

    /// Lehmer rank of the full corner permutation, 0..40320.
    pub fn corner_perm_code(&self) -> u32 {
        perm_rank(&self.cp.map(|c| c as usize))
    }

    pub fn set_corner_perm_code(&mut self, code: u32) {
        let perm = perm_unrank(code, 8);
        for (slot, &p) in perm.iter().enumerate() {
            self.cp[slot] = corner_from_index(p);
        }
    }

    /// Lehmer rank of the full edge permutation, 0..479001600.
    pub fn edge_perm_code(&self) -> u32 {
        perm_rank(&self.ep.map(|e| e as usize))
    }

    pub fn set_edge_perm_code(&mut self, code: u32) {
        let perm = perm_unrank(code, 12);
        for (slot, &p) in perm.iter().enumerate() {
            self.ep[slot] = edge_from_index(p);
        }
    }
}

fn corner_from_index(i: usize) -> Corner {
    [URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB][i]
}

fn edge_from_index(i: usize) -> Edge {
    [UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR][i]
}

const FACTORIAL: [u64; 13] = [
    1, 1, 2, 6, 24, 120, 720, 5040, 40320, 362880, 3628800, 39916800, 479001600,
];

/// Binomial coefficient, 0 when n < k.
fn cnk(n: usize, k: usize) -> u32 {
    if n < k {
        return 0;
    }
    let k = k.min(n - k);
    let mut num = 1u64;
    let mut den = 1u64;
    for i in 0..k {
        num *= (n - i) as u64;
        den *= (i + 1) as u64;
    }
    (num / den) as u32
}

fn rotate_left<T: Copy>(arr: &mut [T], l: usize, r: usize) {
    let t = arr[l];
    for i in l..r {
        arr[i] = arr[i + 1];
    }
    arr[r] = t;
}

fn rotate_right<T: Copy>(arr: &mut [T], l: usize, r: usize) {
    let t = arr[r];
    for i in (l + 1..=r).rev() {
        arr[i] = arr[i - 1];
    }
    arr[l] = t;
}

fn perm_rank(perm: &[usize]) -> u32 {
    let n = perm.len();
    let mut used = [false; 12];
    let mut code = 0u64;
    for i in 0..n {
        let smaller = (0..perm[i]).filter(|&x| !used[x]).count() as u64;
        code += smaller * FACTORIAL[n - 1 - i];
        used[perm[i]] = true;
    }
    code as u32
}

fn perm_unrank(code: u32, n: usize) -> Vec<usize> {
    let mut elems: Vec<usize> = (0..n).collect();
    let mut code = code as u64;
    let mut perm = Vec::with_capacity(n);
    for i in (0..n).rev() {
        let idx = (code / FACTORIAL[i]) as usize;
        code %= FACTORIAL[i];
        perm.push(elems.remove(idx));
    }
    perm
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::cube_with_moves;

    #[test]
    fn generators_are_valid() {
        for m in Move::all() {
            assert_eq!(move_cube(m).verify(), Ok(()), "move {}", m);
        }
    }

    #[test]
    fn four_turns_restore() {
        for face in all_faces() {
            let m = Move { face, amount: Amount::Single };
            let c = CubieCube::solved().apply(m).apply(m).apply(m).apply(m);
            assert!(c.is_solved(), "face {}", face);
        }
    }

    #[test]
    fn reverse_is_three_turns() {
        assert_eq!(cube_with_moves("U U U"), cube_with_moves("U'"));
        assert_eq!(cube_with_moves("R R"), cube_with_moves("R2"));
    }

    #[test]
    fn multiply_identity_laws() {
        let a = cube_with_moves("R U2 F' D L B2");
        let mut left = CubieCube::solved();
        left.multiply(&a);
        assert_eq!(left, a);
        let mut right = a;
        right.multiply(&CubieCube::solved());
        assert_eq!(right, a);
    }

    #[test]
    fn inverse_undoes() {
        let seq = Move::parse_sequence("R U R' U' F2 D B").unwrap();
        let c = CubieCube::solved().apply_all(seq.clone());
        let mut composed = c;
        composed.multiply(&c.inverse());
        assert!(composed.is_solved());
        assert!(c.apply_all(Move::inverse_seq(&seq)).is_solved());
    }

    #[quickcheck_macros::quickcheck]
    fn moves_preserve_invariants(moves: Vec<Move>) -> bool {
        CubieCube::solved().apply_all(moves).verify().is_ok()
    }

    #[cfg(test)]
    mod verify_codes {
        use super::*;

        #[test]
        fn swapped_corners_fail_parity() {
            let mut c = CubieCube::solved();
            c.cp.swap(0, 1);
            assert_eq!(c.verify(), Err(VerifyError::PermutationParity));
        }

        #[test]
        fn single_twist_fails() {
            let mut c = CubieCube::solved();
            c.co[0] = 1;
            assert_eq!(c.verify(), Err(VerifyError::TwistSum));
        }

        #[test]
        fn single_flip_fails() {
            let mut c = CubieCube::solved();
            c.eo[3] = 1;
            assert_eq!(c.verify(), Err(VerifyError::FlipSum));
        }

        #[test]
        fn duplicate_edge_fails() {
            let mut c = CubieCube::solved();
            c.ep[0] = c.ep[1];
            assert_eq!(c.verify(), Err(VerifyError::EdgeCount));
        }

        #[test]
        fn duplicate_corner_fails() {
            let mut c = CubieCube::solved();
            c.cp[6] = c.cp[7];
            assert_eq!(c.verify(), Err(VerifyError::CornerCount));
        }
    }

    #[cfg(test)]
    mod codec {
        use super::*;

        #[test]
        fn twist_round_trip() {
            let mut c = CubieCube::solved();
            for v in 0..2187 {
                c.set_twist(v);
                assert_eq!(c.twist(), v);
                assert_eq!(c.co.iter().map(|&o| o as u16).sum::<u16>() % 3, 0);
            }
        }

        #[test]
        fn flip_round_trip() {
            let mut c = CubieCube::solved();
            for v in 0..2048 {
                c.set_flip(v);
                assert_eq!(c.flip(), v);
            }
        }

        #[test]
        fn slice_sorted_round_trip() {
            let mut c = CubieCube::solved();
            for v in 0..11880 {
                c.set_slice_sorted(v);
                assert_eq!(c.slice_sorted(), v);
            }
        }

        #[test]
        fn corners_round_trip() {
            let mut c = CubieCube::solved();
            for v in 0..20160 {
                c.set_corners(v);
                assert_eq!(c.corners(), v);
            }
        }

        #[test]
        fn ud_edges_round_trip() {
            let mut c = CubieCube::solved();
            for v in 0..20160 {
                c.set_ud_edges(v);
                assert_eq!(c.ud_edges(), v as u32);
            }
        }

        #[test]
        fn partial_edge_round_trips() {
            let mut c = CubieCube::solved();
            for v in 0..1320 {
                c.set_ur_to_ul(v);
                assert_eq!(c.ur_to_ul(), v);
                c.set_ub_to_df(v);
                assert_eq!(c.ub_to_df(), v);
            }
        }

        #[test]
        fn solved_coordinates() {
            let c = CubieCube::solved();
            assert_eq!(c.twist(), 0);
            assert_eq!(c.flip(), 0);
            assert_eq!(c.slice(), 0);
            assert_eq!(c.slice_sorted(), 0);
            assert_eq!(c.corners(), 0);
            assert_eq!(c.ud_edges(), 0);
            assert_eq!(c.ur_to_ul(), 0);
            assert_eq!(c.ub_to_df(), 114);
            assert_eq!(c.corner_parity(), 0);
        }

        #[test]
        fn merge_agrees_inside_g1() {
            let c = cube_with_moves("U D' R2 F2 U2 L2 D");
            assert_eq!(c.flip(), 0);
            assert_eq!(c.twist(), 0);
            assert_eq!(c.slice(), 0);
            assert_eq!(
                CubieCube::merge_ud_edges(c.ur_to_ul(), c.ub_to_df()) as u32,
                c.ud_edges()
            );
        }

        #[test]
        fn partial_coordinates_flag_slice_membership() {
            // Below 336 means the tracked edges all sit outside the middle
            // slice; R drags UR into the BR position.
            assert!(CubieCube::solved().ur_to_ul() < 336);
            assert!(cube_with_moves("R").ur_to_ul() >= 336);
            assert!(cube_with_moves("F").ub_to_df() >= 336);
        }

        #[test]
        fn perm_codes_round_trip() {
            let c = cube_with_moves("R U2 B' L D F2 R'");
            let mut rebuilt = CubieCube::solved();
            rebuilt.set_corner_perm_code(c.corner_perm_code());
            rebuilt.set_edge_perm_code(c.edge_perm_code());
            assert_eq!(rebuilt.cp, c.cp);
            assert_eq!(rebuilt.ep, c.ep);
        }
    }
}
