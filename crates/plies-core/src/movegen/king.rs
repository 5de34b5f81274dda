//! King step generation. Castling is added per player, see [`crate::castling`].

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;

use super::gen_leaper;

/// The eight unit steps as (rank, file) deltas.
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Generate pseudo-legal king steps.
pub(super) fn gen_king(king: Piece, board: &Board, moves: &mut Vec<Move>) {
    gen_leaper(king, board, &KING_OFFSETS, moves);
}
