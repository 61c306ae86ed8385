use crate::cube::*;

/// One of the 18 face turns. `index` runs 0..18 with `index / 3` selecting
/// the face (U, R, F, D, L, B) and `index % 3` the amount (90, 180, 270).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    pub face: Face,
    pub amount: Amount,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Amount {
    Single,
    Double,
    Reverse,
}

impl Amount {
    fn index(self) -> usize {
        match self {
            Amount::Single => 0,
            Amount::Double => 1,
            Amount::Reverse => 2,
        }
    }
}

impl Move {
    pub fn all() -> impl Iterator<Item = Move> {
        (0..18).map(Move::from_index)
    }

    pub fn index(self) -> usize {
        self.face.index() * 3 + self.amount.index()
    }

    pub fn from_index(index: usize) -> Move {
        let face = match index / 3 {
            0 => Face::Up,
            1 => Face::Right,
            2 => Face::Front,
            3 => Face::Down,
            4 => Face::Left,
            _ => Face::Back,
        };
        let amount = match index % 3 {
            0 => Amount::Single,
            1 => Amount::Double,
            _ => Amount::Reverse,
        };
        Move { face, amount }
    }

    pub fn inverse(self) -> Move {
        let amount = match self.amount {
            Amount::Single => Amount::Reverse,
            Amount::Double => Amount::Double,
            Amount::Reverse => Amount::Single,
        };
        Move { face: self.face, amount }
    }

    /// True when playing `self` directly after a move of `prev` face is
    /// redundant: the same face again, or the opposite face out of the
    /// canonical U-before-D, R-before-L, F-before-B order.
    pub fn redundant_after(self, prev: Face) -> bool {
        prev == self.face || prev.index() == self.face.index() + 3
    }

    pub fn parse_sequence(s: &str) -> anyhow::Result<Vec<Move>> {
        s.split_whitespace().map(|s| s.parse()).collect()
    }

    pub fn format_sequence(moves: &[Move]) -> String {
        moves
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn inverse_seq(moves: &[Move]) -> Vec<Move> {
        moves.iter().rev().map(|m| m.inverse()).collect()
    }
}

impl core::str::FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Move> {
        let mut chars = s.chars();
        let face_char = match chars.next() {
            Some(c) => c,
            None => return Err(anyhow::anyhow!("No face for move")),
        };

        let face = match Face::from_char(face_char.to_ascii_uppercase()) {
            Some(f) => f,
            None => return Err(anyhow::anyhow!("Unrecognized face {}", face_char)),
        };

        let amount = match chars.next() {
            None => Amount::Single,
            Some('\'') => Amount::Reverse,
            Some('2') => Amount::Double,
            Some(c) => return Err(anyhow::anyhow!("Unrecognized amount {}", c)),
        };

        if chars.next().is_some() {
            return Err(anyhow::anyhow!("Trailing characters in move {}", s));
        }

        Ok(Move { face, amount })
    }
}

impl core::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.face)?;
        match self.amount {
            Amount::Single => Ok(()),
            Amount::Double => write!(f, "2"),
            Amount::Reverse => write!(f, "'"),
        }
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Move {
    fn arbitrary(g: &mut quickcheck::Gen) -> Move {
        Move::from_index(<usize as quickcheck::Arbitrary>::arbitrary(g) % 18)
    }
}
