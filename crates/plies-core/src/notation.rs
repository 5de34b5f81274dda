//! Square <-> algebraic notation table.
//!
//! Used only for formatting and parsing; the engine addresses squares by
//! [`Coordinate`] everywhere else.

use crate::coordinate::Coordinate;

/// Algebraic names indexed by [`Coordinate::index()`] (A8 = 0, H1 = 63).
pub const ALGEBRAIC_NOTATION: [&str; Coordinate::COUNT] = [
    "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8",
    "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7",
    "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6",
    "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5",
    "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4",
    "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3",
    "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2",
    "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1",
];

/// Look up the square named by `notation`, e.g. `"e4"`.
pub fn coordinate_of(notation: &str) -> Option<Coordinate> {
    ALGEBRAIC_NOTATION
        .iter()
        .position(|&name| name == notation)
        .and_then(Coordinate::from_index)
}

#[cfg(test)]
mod tests {
    use super::{ALGEBRAIC_NOTATION, coordinate_of};
    use crate::coordinate::Coordinate;

    #[test]
    fn table_matches_coordinates() {
        for coordinate in Coordinate::all() {
            let name = ALGEBRAIC_NOTATION[coordinate.index()];
            let file = (b'a' + coordinate.file()) as char;
            let rank = (b'8' - coordinate.rank()) as char;
            assert_eq!(name, format!("{file}{rank}"));
            assert_eq!(coordinate_of(name), Some(coordinate));
        }
    }

    #[test]
    fn unknown_names() {
        assert_eq!(coordinate_of("E4"), None);
        assert_eq!(coordinate_of("e44"), None);
    }
}
