//! Knight move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;

use super::gen_leaper;

/// The eight (±1, ±2) / (±2, ±1) knight jumps as (rank, file) deltas.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Generate pseudo-legal knight moves.
pub(super) fn gen_knight(knight: Piece, board: &Board, moves: &mut Vec<Move>) {
    gen_leaper(knight, board, &KNIGHT_OFFSETS, moves);
}
