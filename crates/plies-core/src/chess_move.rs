//! Move representation as a tagged sum type.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::board::Board;
use crate::coordinate::Coordinate;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

/// King and rook relocation carried by both castling variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleMove {
    /// The castling king, as it stands before the move.
    pub king: Piece,
    /// Where the king lands.
    pub king_destination: Coordinate,
    /// The castling rook, as it stands before the move.
    pub rook: Piece,
    /// Where the rook lands.
    pub rook_destination: Coordinate,
}

/// A transition from one board to the next.
///
/// Every non-null variant knows the moved piece (which carries its origin
/// square) and the destination; captures also carry the captured piece.
/// Moves are value objects: two moves are equal when their destination and
/// moved piece (including its origin square) are equal, whatever the variant.
#[derive(Debug, Clone)]
pub enum Move {
    /// Quiet move of a non-pawn piece.
    Major { piece: Piece, destination: Coordinate },
    /// Capture by a non-pawn piece.
    MajorAttack {
        piece: Piece,
        destination: Coordinate,
        captured: Piece,
    },
    /// Single-square pawn push.
    Pawn { piece: Piece, destination: Coordinate },
    /// Two-square pawn push from the starting rank.
    PawnJump { piece: Piece, destination: Coordinate },
    /// Diagonal pawn capture.
    PawnAttack {
        piece: Piece,
        destination: Coordinate,
        captured: Piece,
    },
    /// En passant capture; `captured` does not stand on `destination`.
    PawnEnPassant {
        piece: Piece,
        destination: Coordinate,
        captured: Piece,
    },
    /// A pawn push or capture reaching the far rank, promoting to a queen.
    PawnPromotion(Box<Move>),
    /// King-side castle.
    CastleKingSide(CastleMove),
    /// Queen-side castle.
    CastleQueenSide(CastleMove),
    /// Sentinel for "no move". Never legal, never executable.
    Null,
}

impl Move {
    /// Return the moved piece as it stands before the move.
    pub fn moved_piece(&self) -> Option<Piece> {
        match self {
            Move::Major { piece, .. }
            | Move::MajorAttack { piece, .. }
            | Move::Pawn { piece, .. }
            | Move::PawnJump { piece, .. }
            | Move::PawnAttack { piece, .. }
            | Move::PawnEnPassant { piece, .. } => Some(*piece),
            Move::PawnPromotion(inner) => inner.moved_piece(),
            Move::CastleKingSide(castle) | Move::CastleQueenSide(castle) => Some(castle.king),
            Move::Null => None,
        }
    }

    /// Return the square the moved piece lands on.
    pub fn destination(&self) -> Option<Coordinate> {
        match self {
            Move::Major { destination, .. }
            | Move::MajorAttack { destination, .. }
            | Move::Pawn { destination, .. }
            | Move::PawnJump { destination, .. }
            | Move::PawnAttack { destination, .. }
            | Move::PawnEnPassant { destination, .. } => Some(*destination),
            Move::PawnPromotion(inner) => inner.destination(),
            Move::CastleKingSide(castle) | Move::CastleQueenSide(castle) => {
                Some(castle.king_destination)
            }
            Move::Null => None,
        }
    }

    /// Return the square the moved piece starts from.
    #[inline]
    pub fn origin(&self) -> Option<Coordinate> {
        self.moved_piece().map(Piece::coordinate)
    }

    /// Return the captured piece, if this move captures.
    pub fn captured_piece(&self) -> Option<Piece> {
        match self {
            Move::MajorAttack { captured, .. }
            | Move::PawnAttack { captured, .. }
            | Move::PawnEnPassant { captured, .. } => Some(*captured),
            Move::PawnPromotion(inner) => inner.captured_piece(),
            _ => None,
        }
    }

    /// Return `true` if this move captures a piece.
    #[inline]
    pub fn is_attack(&self) -> bool {
        self.captured_piece().is_some()
    }

    /// Return `true` for either castling variant.
    #[inline]
    pub fn is_castling(&self) -> bool {
        matches!(self, Move::CastleKingSide(_) | Move::CastleQueenSide(_))
    }

    /// Return `true` for a promoting pawn move.
    #[inline]
    pub fn is_promotion(&self) -> bool {
        matches!(self, Move::PawnPromotion(_))
    }

    /// Return `true` for the two-square pawn push.
    #[inline]
    pub fn is_pawn_jump(&self) -> bool {
        matches!(self, Move::PawnJump { .. })
    }

    /// Return `true` for an en passant capture.
    #[inline]
    pub fn is_en_passant(&self) -> bool {
        matches!(self, Move::PawnEnPassant { .. })
    }

    /// Return `true` if this is the null sentinel.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Move::Null)
    }

    /// Return the castling details for either castling variant.
    pub fn castle(&self) -> Option<&CastleMove> {
        match self {
            Move::CastleKingSide(castle) | Move::CastleQueenSide(castle) => Some(castle),
            _ => None,
        }
    }

    /// Return the pawn being promoted, for promotion moves.
    pub fn promoted_pawn(&self) -> Option<Piece> {
        match self {
            Move::PawnPromotion(inner) => inner.moved_piece(),
            _ => None,
        }
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Move) -> bool {
        self.destination() == other.destination() && self.moved_piece() == other.moved_piece()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.destination().hash(state);
        self.moved_piece().hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Null => write!(f, "0000"),
            Move::CastleKingSide(_) => write!(f, "O-O"),
            Move::CastleQueenSide(_) => write!(f, "O-O-O"),
            Move::PawnPromotion(inner) => write!(f, "{inner}={}", PieceKind::Queen.symbol()),
            _ => {
                // Non-null variants always carry both a piece and a destination.
                let (Some(piece), Some(destination)) = (self.moved_piece(), self.destination())
                else {
                    return Ok(());
                };
                if !piece.is(PieceKind::Pawn) {
                    write!(f, "{}", piece.kind().symbol())?;
                }
                let separator = if self.is_attack() { 'x' } else { '-' };
                write!(f, "{}{}{}", piece.coordinate(), separator, destination)
            }
        }
    }
}

/// Find the legal move of either side that goes from `from` to `to`.
///
/// Scans [`Board::legal_moves`] linearly and returns [`Move::Null`] when no
/// move matches; callers must check for the sentinel before executing.
pub fn create_move(board: &Board, from: Coordinate, to: Coordinate) -> Move {
    board
        .legal_moves()
        .find(|mv| mv.origin() == Some(from) && mv.destination() == Some(to))
        .cloned()
        .unwrap_or(Move::Null)
}
