//! Pseudo-legal move generation.
//!
//! Each piece kind produces moves that respect board bounds and blocking by
//! friendly pieces. Nothing here looks at whether the mover's own king ends
//! up attacked: board construction relies on that, since the check test
//! itself is built from these moves.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS, gen_sliding};

/// Append the pseudo-legal moves of `piece` to `moves`.
pub(crate) fn piece_moves(piece: Piece, board: &Board, moves: &mut Vec<Move>) {
    match piece.kind() {
        PieceKind::Pawn => gen_pawn(piece, board, moves),
        PieceKind::Knight => gen_knight(piece, board, moves),
        PieceKind::Bishop => gen_sliding(piece, board, &BISHOP_DIRECTIONS, moves),
        PieceKind::Rook => gen_sliding(piece, board, &ROOK_DIRECTIONS, moves),
        PieceKind::Queen => gen_sliding(piece, board, &QUEEN_DIRECTIONS, moves),
        PieceKind::King => gen_king(piece, board, moves),
    }
}

/// Collect the pseudo-legal moves of every piece in `pieces`, in slice order.
pub(crate) fn pseudo_legal_moves(board: &Board, pieces: &[Piece]) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    for &piece in pieces {
        piece_moves(piece, board, &mut moves);
    }
    moves
}

/// Fixed-offset generation shared by knights and kings.
///
/// Each target is bounds-checked on its own; friendly-occupied targets are
/// skipped and enemy-occupied ones become captures.
fn gen_leaper(piece: Piece, board: &Board, offsets: &[(i8, i8)], moves: &mut Vec<Move>) {
    for &(d_rank, d_file) in offsets {
        let Some(destination) = piece.coordinate().offset(d_rank, d_file) else {
            continue;
        };
        match board.occupant(destination) {
            None => moves.push(Move::Major { piece, destination }),
            Some(captured) if captured.color() != piece.color() => moves.push(Move::MajorAttack {
                piece,
                destination,
                captured,
            }),
            Some(_) => {}
        }
    }
}
