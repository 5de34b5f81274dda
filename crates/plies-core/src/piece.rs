//! A colored chess piece standing on a particular square.

use std::fmt;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::coordinate::Coordinate;
use crate::movegen;
use crate::piece_kind::PieceKind;

/// An immutable chess unit: kind, color, square, and whether it has moved.
///
/// Two pieces are equal iff all four fields are equal. Moving a piece never
/// mutates it; [`Piece::move_to`] returns a new value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    coordinate: Coordinate,
    kind: PieceKind,
    color: Color,
    has_moved: bool,
}

impl Piece {
    /// Create a piece that has not moved yet.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color, coordinate: Coordinate) -> Piece {
        Piece {
            coordinate,
            kind,
            color,
            has_moved: false,
        }
    }

    /// Return a copy of this piece with the given first-move flag.
    #[inline]
    pub const fn with_has_moved(self, has_moved: bool) -> Piece {
        Piece { has_moved, ..self }
    }

    /// Return the square this piece stands on.
    #[inline]
    pub const fn coordinate(self) -> Coordinate {
        self.coordinate
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return the piece color.
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Return `true` once the piece has made a move.
    #[inline]
    pub const fn has_moved(self) -> bool {
        self.has_moved
    }

    /// Return `true` if this piece is of the given kind.
    #[inline]
    pub fn is(self, kind: PieceKind) -> bool {
        self.kind == kind
    }

    /// The same piece relocated to `destination`, marked as moved.
    #[inline]
    pub const fn move_to(self, destination: Coordinate) -> Piece {
        Piece {
            coordinate: destination,
            kind: self.kind,
            color: self.color,
            has_moved: true,
        }
    }

    /// Build the piece that lands on the destination of `mv`.
    ///
    /// Same kind as the mover, except promotions, which yield a queen.
    /// Returns `None` for the null move.
    pub fn move_piece(mv: &Move) -> Option<Piece> {
        let moved = mv.moved_piece()?;
        let destination = mv.destination()?;
        let landed = moved.move_to(destination);
        if mv.is_promotion() {
            Some(Piece {
                kind: PieceKind::Queen,
                ..landed
            })
        } else {
            Some(landed)
        }
    }

    /// Generate this piece's pseudo-legal moves on `board`.
    ///
    /// Moves respect board bounds and blocking but may leave the mover's own
    /// king attacked.
    pub fn possible_moves(self, board: &Board) -> Vec<Move> {
        let mut moves = Vec::new();
        movegen::piece_moves(self, board, &mut moves);
        moves
    }

    /// Board letter: uppercase for White, lowercase for Black.
    pub fn symbol(self) -> char {
        match self.color {
            Color::White => self.kind.symbol(),
            Color::Black => self.kind.symbol().to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color {
            Color::White => 'W',
            Color::Black => 'B',
        };
        write!(f, "{}{}@{}", color_prefix, self.kind.symbol(), self.coordinate)?;
        if self.has_moved {
            write!(f, "*")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::coordinate::Coordinate;
    use crate::piece_kind::PieceKind;

    #[test]
    fn equality_compares_all_fields() {
        let rook = Piece::new(PieceKind::Rook, Color::White, Coordinate::A1);
        assert_eq!(rook, Piece::new(PieceKind::Rook, Color::White, Coordinate::A1));
        assert_ne!(rook, rook.with_has_moved(true));
        assert_ne!(rook, Piece::new(PieceKind::Rook, Color::Black, Coordinate::A1));
        assert_ne!(rook, Piece::new(PieceKind::Rook, Color::White, Coordinate::A2));
        assert_ne!(rook, Piece::new(PieceKind::Queen, Color::White, Coordinate::A1));
    }

    #[test]
    fn move_to_produces_new_moved_piece() {
        let knight = Piece::new(PieceKind::Knight, Color::White, Coordinate::G1);
        let moved = knight.move_to(Coordinate::F3);
        assert_eq!(moved.coordinate(), Coordinate::F3);
        assert_eq!(moved.kind(), PieceKind::Knight);
        assert!(moved.has_moved());
        // The source piece is untouched.
        assert_eq!(knight.coordinate(), Coordinate::G1);
        assert!(!knight.has_moved());
    }

    #[test]
    fn move_piece_promotes_to_queen() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White, Coordinate::B7).with_has_moved(true);
        let push = Move::Pawn {
            piece: pawn,
            destination: Coordinate::B8,
        };
        let promotion = Move::PawnPromotion(Box::new(push.clone()));

        let pushed = Piece::move_piece(&push).unwrap();
        assert_eq!(pushed.kind(), PieceKind::Pawn);

        let promoted = Piece::move_piece(&promotion).unwrap();
        assert_eq!(promoted.kind(), PieceKind::Queen);
        assert_eq!(promoted.color(), Color::White);
        assert_eq!(promoted.coordinate(), Coordinate::B8);
        assert!(promoted.has_moved());
    }

    #[test]
    fn move_piece_null_is_none() {
        assert!(Piece::move_piece(&Move::Null).is_none());
    }

    #[test]
    fn symbols_by_color() {
        let white = Piece::new(PieceKind::Queen, Color::White, Coordinate::D1);
        let black = Piece::new(PieceKind::Queen, Color::Black, Coordinate::D8);
        assert_eq!(format!("{white}"), "Q");
        assert_eq!(format!("{black}"), "q");
    }

    #[test]
    fn debug_format() {
        let pawn = Piece::new(PieceKind::Pawn, Color::Black, Coordinate::E7);
        assert_eq!(format!("{pawn:?}"), "BP@e7");
        assert_eq!(format!("{:?}", pawn.move_to(Coordinate::E5)), "BP@e5*");
    }
}
