use crate::prelude::*;

pub fn cube_with_moves(moves: &str) -> CubieCube {
    CubieCube::solved().apply_all(Move::parse_sequence(moves).unwrap())
}

lazy_static::lazy_static! {
    static ref TEST_TABLES: crate::tables::Tables =
        crate::tables::Tables::load_or_build(&std::env::temp_dir().join("pivotcube-tables"));
}

/// Shared table set for unit tests, cached under the system temp directory
/// so repeated test runs skip the build.
pub fn test_tables() -> &'static crate::tables::Tables {
    &TEST_TABLES
}
