//! Sliding piece move generation (bishops, rooks, queens).

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;

/// Diagonal rays as (rank, file) deltas.
pub(super) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Orthogonal rays as (rank, file) deltas.
pub(super) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// All eight rays.
pub(super) const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Walk each ray until the edge or the first occupied square.
///
/// An enemy on the stopping square is captured; a friendly piece is not.
pub(super) fn gen_sliding(
    piece: Piece,
    board: &Board,
    directions: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(d_rank, d_file) in directions {
        let mut current = piece.coordinate();
        while let Some(destination) = current.offset(d_rank, d_file) {
            match board.occupant(destination) {
                None => moves.push(Move::Major { piece, destination }),
                Some(captured) => {
                    if captured.color() != piece.color() {
                        moves.push(Move::MajorAttack {
                            piece,
                            destination,
                            captured,
                        });
                    }
                    break;
                }
            }
            current = destination;
        }
    }
}
