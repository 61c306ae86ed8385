use crate::error::Error;
use crate::prelude::*;

/// The 54-sticker view of the cube: positions 0..9 are the U face in
/// row-major order, then R, F, D, L, B. Centres sit at `face * 9 + 4`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FaceletCube {
    facelets: [Face; 54],
}

/// Sticker positions of each corner slot, listed clockwise starting from
/// the U/D sticker.
const CORNER_FACELET: [[usize; 3]; 8] = [
    [8, 9, 20],   // URF
    [6, 18, 38],  // UFL
    [0, 36, 47],  // ULB
    [2, 45, 11],  // UBR
    [29, 26, 15], // DFR
    [27, 44, 24], // DLF
    [33, 53, 42], // DBL
    [35, 17, 51], // DRB
];

/// Sticker positions of each edge slot.
const EDGE_FACELET: [[usize; 2]; 12] = [
    [5, 10],  // UR
    [7, 19],  // UF
    [3, 37],  // UL
    [1, 46],  // UB
    [32, 16], // DR
    [28, 25], // DF
    [30, 43], // DL
    [34, 52], // DB
    [23, 12], // FR
    [21, 41], // FL
    [50, 39], // BL
    [48, 14], // BR
];

/// Home colours of each corner cubie, in the same clockwise order as
/// `CORNER_FACELET`.
const CORNER_COLOR: [[Face; 3]; 8] = {
    use Face::*;
    [
        [Up, Right, Front],
        [Up, Front, Left],
        [Up, Left, Back],
        [Up, Back, Right],
        [Down, Front, Right],
        [Down, Left, Front],
        [Down, Back, Left],
        [Down, Right, Back],
    ]
};

const EDGE_COLOR: [[Face; 2]; 12] = {
    use Face::*;
    [
        [Up, Right],
        [Up, Front],
        [Up, Left],
        [Up, Back],
        [Down, Right],
        [Down, Front],
        [Down, Left],
        [Down, Back],
        [Front, Right],
        [Front, Left],
        [Back, Left],
        [Back, Right],
    ]
};

impl FaceletCube {
    /// Map stickers onto cubie permutations and orientations. Each corner
    /// slot is identified by the two colours following its U/D sticker in
    /// clockwise order; each edge by its colour pair, flipped or not.
    pub fn to_cubie(&self) -> Result<CubieCube, Error> {
        let f = &self.facelets;
        let mut cc = CubieCube::solved();

        for (slot, positions) in CORNER_FACELET.iter().enumerate() {
            let ori = (0..3)
                .find(|&o| matches!(f[positions[o]], Face::Up | Face::Down))
                .ok_or(Error::CornerNotFound)?;
            let col1 = f[positions[(ori + 1) % 3]];
            let col2 = f[positions[(ori + 2) % 3]];

            let cubie = all_corners()
                .find(|&c| {
                    col1 == CORNER_COLOR[c as usize][1] && col2 == CORNER_COLOR[c as usize][2]
                })
                .ok_or(Error::CornerNotFound)?;
            cc.cp[slot] = cubie;
            cc.co[slot] = ori as u8;
        }

        for (slot, positions) in EDGE_FACELET.iter().enumerate() {
            let pair = [f[positions[0]], f[positions[1]]];
            let mut assigned = false;
            for cubie in all_edges() {
                let home = EDGE_COLOR[cubie as usize];
                if pair == home {
                    cc.ep[slot] = cubie;
                    cc.eo[slot] = 0;
                    assigned = true;
                    break;
                }
                if pair == [home[1], home[0]] {
                    cc.ep[slot] = cubie;
                    cc.eo[slot] = 1;
                    assigned = true;
                    break;
                }
            }
            if !assigned {
                return Err(Error::EdgeNotFound);
            }
        }

        Ok(cc)
    }

    pub fn from_cubie(cc: &CubieCube) -> FaceletCube {
        let mut facelets = [Face::Up; 54];
        for face in all_faces() {
            facelets[face.index() * 9 + 4] = face;
        }
        for slot in 0..8 {
            let cubie = cc.cp[slot] as usize;
            let ori = cc.co[slot] as usize;
            for k in 0..3 {
                facelets[CORNER_FACELET[slot][(k + ori) % 3]] = CORNER_COLOR[cubie][k];
            }
        }
        for slot in 0..12 {
            let cubie = cc.ep[slot] as usize;
            let ori = cc.eo[slot] as usize;
            for k in 0..2 {
                facelets[EDGE_FACELET[slot][(k + ori) % 2]] = EDGE_COLOR[cubie][k];
            }
        }
        FaceletCube { facelets }
    }
}

impl core::str::FromStr for FaceletCube {
    type Err = Error;

    fn from_str(s: &str) -> Result<FaceletCube, Error> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 54 {
            return Err(Error::BadFaceletCount(chars.len()));
        }

        let mut facelets = [Face::Up; 54];
        let mut count = [0usize; 6];
        for (i, &c) in chars.iter().enumerate() {
            let face = Face::from_char(c).ok_or(Error::BadFaceletChar(c))?;
            facelets[i] = face;
            count[face.index()] += 1;
        }
        if count.iter().any(|&c| c != 9) {
            return Err(Error::BadStickerCount);
        }
        for face in all_faces() {
            if facelets[face.index() * 9 + 4] != face {
                return Err(Error::BadCenter);
            }
        }

        Ok(FaceletCube { facelets })
    }
}

impl core::fmt::Display for FaceletCube {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for face in &self.facelets {
            write!(f, "{}", face)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::cube_with_moves;

    const SOLVED: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

    #[test]
    fn solved_string_parses_to_solved_cube() {
        let fc: FaceletCube = SOLVED.parse().unwrap();
        assert!(fc.to_cubie().unwrap().is_solved());
    }

    #[test]
    fn serialize_solved() {
        assert_eq!(FaceletCube::from_cubie(&CubieCube::solved()).to_string(), SOLVED);
    }

    #[test]
    fn round_trip_through_scrambles() {
        for scramble in ["R", "R U R' U'", "F2 L' D B2 U' R F' B D2 L2 U2"] {
            let cc = cube_with_moves(scramble);
            let s = FaceletCube::from_cubie(&cc).to_string();
            let reparsed: FaceletCube = s.parse().unwrap();
            assert_eq!(reparsed.to_cubie().unwrap(), cc, "scramble {}", scramble);
            assert_eq!(reparsed.to_string(), s);
        }
    }

    #[test]
    fn wrong_length_rejected() {
        assert!(matches!(
            "UUU".parse::<FaceletCube>(),
            Err(Error::BadFaceletCount(3))
        ));
    }

    #[test]
    fn bad_character_rejected() {
        let mut s = SOLVED.to_string();
        s.replace_range(0..1, "X");
        assert!(matches!(s.parse::<FaceletCube>(), Err(Error::BadFaceletChar('X'))));
    }

    #[test]
    fn sticker_count_rejected() {
        // One U sticker replaced by F: 8 U stickers, 10 F stickers.
        let mut s = SOLVED.to_string();
        s.replace_range(0..1, "F");
        assert!(matches!(s.parse::<FaceletCube>(), Err(Error::BadStickerCount)));
    }

    #[quickcheck_macros::quickcheck]
    fn any_reachable_cube_round_trips(moves: Vec<Move>) -> bool {
        let cc = CubieCube::solved().apply_all(moves);
        let s = FaceletCube::from_cubie(&cc).to_string();
        s.parse::<FaceletCube>()
            .and_then(|fc| fc.to_cubie())
            .map(|back| back == cc)
            .unwrap_or(false)
    }
}
