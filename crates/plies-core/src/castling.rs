//! Castling move generation.
//!
//! Castling is not part of any piece's pseudo-legal moves: it depends on the
//! opponent's moves, so it is computed per player once both sides' pseudo-legal
//! moves are known.

use crate::board::Board;
use crate::chess_move::{CastleMove, Move};
use crate::coordinate::Coordinate;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::player::is_square_attacked;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Both sides, king side first.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// File of the rook that takes part.
    const fn rook_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// File the king lands on.
    const fn king_destination_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// File the rook lands on.
    const fn rook_destination_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Files strictly between king and rook; all must be empty.
    const fn empty_files(self) -> &'static [u8] {
        match self {
            CastleSide::KingSide => &[5, 6],
            CastleSide::QueenSide => &[1, 2, 3],
        }
    }

    /// Files the king crosses or lands on; none may be attacked.
    const fn safe_files(self) -> &'static [u8] {
        match self {
            CastleSide::KingSide => &[5, 6],
            CastleSide::QueenSide => &[3, 2],
        }
    }

    /// Wrap castle details in the matching move variant.
    fn into_move(self, castle: CastleMove) -> Move {
        match self {
            CastleSide::KingSide => Move::CastleKingSide(castle),
            CastleSide::QueenSide => Move::CastleQueenSide(castle),
        }
    }
}

/// King file in the starting layout.
const KING_HOME_FILE: u8 = 4;

/// Return the castling moves available to the side owning `king`.
///
/// `opponent_moves` are the opponent's pseudo-legal moves on `board`; a square
/// counts as attacked when any of them lands there.
pub(crate) fn castle_moves(
    board: &Board,
    king: Piece,
    in_check: bool,
    opponent_moves: &[Move],
) -> Vec<Move> {
    let home = Coordinate::at(king.color().back_rank(), KING_HOME_FILE);
    if in_check || king.has_moved() || king.coordinate() != home {
        return Vec::new();
    }

    CastleSide::ALL
        .into_iter()
        .filter_map(|side| {
            castle(board, king, side, opponent_moves).map(|castle| side.into_move(castle))
        })
        .collect()
}

/// Check one side's conditions and build its castle details.
fn castle(
    board: &Board,
    king: Piece,
    side: CastleSide,
    opponent_moves: &[Move],
) -> Option<CastleMove> {
    let rank = king.coordinate().rank();
    let square = |file: u8| Coordinate::at(rank, file);

    if side.empty_files().iter().any(|&file| board.is_occupied(square(file))) {
        return None;
    }

    let rook = board.occupant(square(side.rook_file()))?;
    if !rook.is(PieceKind::Rook) || rook.color() != king.color() || rook.has_moved() {
        return None;
    }

    if side
        .safe_files()
        .iter()
        .any(|&file| is_square_attacked(square(file), opponent_moves))
    {
        return None;
    }

    Some(CastleMove {
        king,
        king_destination: square(side.king_destination_file()),
        rook,
        rook_destination: square(side.rook_destination_file()),
    })
}
