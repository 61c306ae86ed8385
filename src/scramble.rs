//! Random cube and scramble generation.

use crate::prelude::*;

use rand::Rng;

/// A uniformly random solvable cube: random orientations, then random
/// permutations redrawn until corner and edge parity agree.
pub fn random_cube(rng: &mut impl Rng) -> CubieCube {
    let mut c = CubieCube::solved();
    c.set_flip(rng.gen_range(0..2048));
    c.set_twist(rng.gen_range(0..2187));
    loop {
        c.set_corner_perm_code(rng.gen_range(0..40_320));
        c.set_edge_perm_code(rng.gen_range(0..479_001_600));
        if c.edge_parity() == c.corner_parity() {
            return c;
        }
    }
}

/// A random move sequence of the given length, with successive moves on
/// the same face or the same axis filtered out.
pub fn random_moves(rng: &mut impl Rng, len: usize) -> Vec<Move> {
    let mut moves: Vec<Move> = Vec::with_capacity(len);
    while moves.len() < len {
        let m = Move::from_index(rng.gen_range(0..18));
        if let Some(prev) = moves.last() {
            if m.redundant_after(prev.face) || Face::same_axis(m.face, prev.face) {
                continue;
            }
        }
        moves.push(m);
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_cubes_are_solvable() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            assert_eq!(random_cube(&mut rng).verify(), Ok(()));
        }
    }

    #[test]
    fn random_cubes_round_trip_through_facelets() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let c = random_cube(&mut rng);
            let s = FaceletCube::from_cubie(&c).to_string();
            let back = s.parse::<FaceletCube>().unwrap().to_cubie().unwrap();
            assert_eq!(back, c);
        }
    }

    #[test]
    fn random_scrambles_have_requested_length() {
        let mut rng = StdRng::seed_from_u64(3);
        let seq = random_moves(&mut rng, 25);
        assert_eq!(seq.len(), 25);
        for pair in seq.windows(2) {
            assert!(!pair[1].redundant_after(pair[0].face));
        }
    }
}
