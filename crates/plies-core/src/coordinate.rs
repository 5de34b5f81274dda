//! Board coordinates: a rank/file pair naming one of the 64 squares.

use std::fmt;

use crate::notation;

/// A square on the board, addressed by rank and file, each in `0..8`.
///
/// Rank 0 is Black's back rank (printed as "8") and rank 7 is White's back
/// rank (printed as "1"). File 0 is the a-file. Equality and hashing compare
/// both fields.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    rank: u8,
    file: u8,
}

impl Coordinate {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a coordinate, returning `None` if either component is off the board.
    #[inline]
    pub const fn new(rank: u8, file: u8) -> Option<Coordinate> {
        if rank < 8 && file < 8 {
            Some(Coordinate { rank, file })
        } else {
            None
        }
    }

    /// Create a coordinate without bounds checking.
    ///
    /// # Panics
    ///
    /// Debug-asserts that both components are below 8.
    #[inline]
    pub(crate) const fn at(rank: u8, file: u8) -> Coordinate {
        debug_assert!(rank < 8 && file < 8);
        Coordinate { rank, file }
    }

    /// Create a coordinate from a row-major index (`rank * 8 + file`).
    #[inline]
    pub const fn from_index(index: usize) -> Option<Coordinate> {
        if index < Self::COUNT {
            Some(Coordinate::at((index / 8) as u8, (index % 8) as u8))
        } else {
            None
        }
    }

    /// Return the row-major index (0..63). A8 is 0, H1 is 63.
    #[inline]
    pub const fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// Return the rank index (0 = Black's back rank).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Return the file index (0 = a-file).
    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Step by the given deltas, returning `None` when the result leaves the board.
    #[inline]
    pub const fn offset(self, d_rank: i8, d_file: i8) -> Option<Coordinate> {
        let rank = self.rank as i8 + d_rank;
        let file = self.file as i8 + d_file;
        if rank < 0 || file < 0 {
            return None;
        }
        Coordinate::new(rank as u8, file as u8)
    }

    /// Parse algebraic notation such as `"e4"`.
    pub fn from_algebraic(s: &str) -> Option<Coordinate> {
        notation::coordinate_of(s)
    }

    /// Return the algebraic name of this square.
    #[inline]
    pub fn to_algebraic(self) -> &'static str {
        notation::ALGEBRAIC_NOTATION[self.index()]
    }

    /// Iterate over all 64 squares in index order (A8, B8, ..., H1).
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..Self::COUNT).map(|index| Coordinate::at((index / 8) as u8, (index % 8) as u8))
    }

    // Named square constants
    pub const A8: Coordinate = Coordinate::at(0, 0);
    pub const B8: Coordinate = Coordinate::at(0, 1);
    pub const C8: Coordinate = Coordinate::at(0, 2);
    pub const D8: Coordinate = Coordinate::at(0, 3);
    pub const E8: Coordinate = Coordinate::at(0, 4);
    pub const F8: Coordinate = Coordinate::at(0, 5);
    pub const G8: Coordinate = Coordinate::at(0, 6);
    pub const H8: Coordinate = Coordinate::at(0, 7);
    pub const A7: Coordinate = Coordinate::at(1, 0);
    pub const B7: Coordinate = Coordinate::at(1, 1);
    pub const C7: Coordinate = Coordinate::at(1, 2);
    pub const D7: Coordinate = Coordinate::at(1, 3);
    pub const E7: Coordinate = Coordinate::at(1, 4);
    pub const F7: Coordinate = Coordinate::at(1, 5);
    pub const G7: Coordinate = Coordinate::at(1, 6);
    pub const H7: Coordinate = Coordinate::at(1, 7);
    pub const A6: Coordinate = Coordinate::at(2, 0);
    pub const B6: Coordinate = Coordinate::at(2, 1);
    pub const C6: Coordinate = Coordinate::at(2, 2);
    pub const D6: Coordinate = Coordinate::at(2, 3);
    pub const E6: Coordinate = Coordinate::at(2, 4);
    pub const F6: Coordinate = Coordinate::at(2, 5);
    pub const G6: Coordinate = Coordinate::at(2, 6);
    pub const H6: Coordinate = Coordinate::at(2, 7);
    pub const A5: Coordinate = Coordinate::at(3, 0);
    pub const B5: Coordinate = Coordinate::at(3, 1);
    pub const C5: Coordinate = Coordinate::at(3, 2);
    pub const D5: Coordinate = Coordinate::at(3, 3);
    pub const E5: Coordinate = Coordinate::at(3, 4);
    pub const F5: Coordinate = Coordinate::at(3, 5);
    pub const G5: Coordinate = Coordinate::at(3, 6);
    pub const H5: Coordinate = Coordinate::at(3, 7);
    pub const A4: Coordinate = Coordinate::at(4, 0);
    pub const B4: Coordinate = Coordinate::at(4, 1);
    pub const C4: Coordinate = Coordinate::at(4, 2);
    pub const D4: Coordinate = Coordinate::at(4, 3);
    pub const E4: Coordinate = Coordinate::at(4, 4);
    pub const F4: Coordinate = Coordinate::at(4, 5);
    pub const G4: Coordinate = Coordinate::at(4, 6);
    pub const H4: Coordinate = Coordinate::at(4, 7);
    pub const A3: Coordinate = Coordinate::at(5, 0);
    pub const B3: Coordinate = Coordinate::at(5, 1);
    pub const C3: Coordinate = Coordinate::at(5, 2);
    pub const D3: Coordinate = Coordinate::at(5, 3);
    pub const E3: Coordinate = Coordinate::at(5, 4);
    pub const F3: Coordinate = Coordinate::at(5, 5);
    pub const G3: Coordinate = Coordinate::at(5, 6);
    pub const H3: Coordinate = Coordinate::at(5, 7);
    pub const A2: Coordinate = Coordinate::at(6, 0);
    pub const B2: Coordinate = Coordinate::at(6, 1);
    pub const C2: Coordinate = Coordinate::at(6, 2);
    pub const D2: Coordinate = Coordinate::at(6, 3);
    pub const E2: Coordinate = Coordinate::at(6, 4);
    pub const F2: Coordinate = Coordinate::at(6, 5);
    pub const G2: Coordinate = Coordinate::at(6, 6);
    pub const H2: Coordinate = Coordinate::at(6, 7);
    pub const A1: Coordinate = Coordinate::at(7, 0);
    pub const B1: Coordinate = Coordinate::at(7, 1);
    pub const C1: Coordinate = Coordinate::at(7, 2);
    pub const D1: Coordinate = Coordinate::at(7, 3);
    pub const E1: Coordinate = Coordinate::at(7, 4);
    pub const F1: Coordinate = Coordinate::at(7, 5);
    pub const G1: Coordinate = Coordinate::at(7, 6);
    pub const H1: Coordinate = Coordinate::at(7, 7);
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_algebraic())
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({}, {} = {})", self.rank, self.file, self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::Coordinate;

    #[test]
    fn new_bounds() {
        assert_eq!(Coordinate::new(0, 0), Some(Coordinate::A8));
        assert_eq!(Coordinate::new(7, 7), Some(Coordinate::H1));
        assert!(Coordinate::new(8, 0).is_none());
        assert!(Coordinate::new(0, 8).is_none());
    }

    #[test]
    fn index_roundtrip() {
        for coordinate in Coordinate::all() {
            assert_eq!(Coordinate::from_index(coordinate.index()), Some(coordinate));
        }
        assert!(Coordinate::from_index(64).is_none());
    }

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(Coordinate::E2.offset(-2, 0), Some(Coordinate::E4));
        assert_eq!(Coordinate::B1.offset(-2, 1), Some(Coordinate::C3));
        assert!(Coordinate::A8.offset(-1, 0).is_none());
        assert!(Coordinate::A8.offset(0, -1).is_none());
        assert!(Coordinate::H1.offset(1, 0).is_none());
        assert!(Coordinate::H1.offset(0, 1).is_none());
    }

    #[test]
    fn structural_equality_and_hash() {
        // Transposed components must never compare equal.
        let a = Coordinate::new(1, 2).unwrap();
        let b = Coordinate::new(2, 1).unwrap();
        assert_ne!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        set.insert(Coordinate::new(1, 2).unwrap());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn algebraic_corners() {
        assert_eq!(Coordinate::A8.to_algebraic(), "a8");
        assert_eq!(Coordinate::H1.to_algebraic(), "h1");
        assert_eq!(Coordinate::from_algebraic("e1"), Some(Coordinate::E1));
        assert_eq!(Coordinate::from_algebraic("e1"), Coordinate::new(7, 4));
        assert_eq!(format!("{}", Coordinate::D5), "d5");
    }

    #[test]
    fn algebraic_invalid() {
        assert!(Coordinate::from_algebraic("i1").is_none());
        assert!(Coordinate::from_algebraic("a9").is_none());
        assert!(Coordinate::from_algebraic("").is_none());
        assert!(Coordinate::from_algebraic("e").is_none());
    }

    #[test]
    fn all_iterator_count() {
        assert_eq!(Coordinate::all().count(), Coordinate::COUNT);
    }

    #[test]
    fn debug_shows_components() {
        assert_eq!(format!("{:?}", Coordinate::E4), "Coordinate(4, 4 = e4)");
    }
}
