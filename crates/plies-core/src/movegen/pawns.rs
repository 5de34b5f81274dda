//! Pawn move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::coordinate::Coordinate;
use crate::piece::Piece;

/// Generate pseudo-legal pawn moves: pushes, jumps, captures and en passant.
///
/// Pushes and captures landing on the far rank are wrapped as promotions.
pub(super) fn gen_pawn(pawn: Piece, board: &Board, moves: &mut Vec<Move>) {
    let color = pawn.color();
    let forward = color.direction();
    let origin = pawn.coordinate();

    // --- Single push, then the two-square jump through the same empty square ---
    if let Some(destination) = origin.offset(forward, 0) {
        if !board.is_occupied(destination) {
            moves.push(promote_on_far_rank(
                color,
                destination,
                Move::Pawn {
                    piece: pawn,
                    destination,
                },
            ));

            if !pawn.has_moved() {
                if let Some(jump) = origin.offset(2 * forward, 0) {
                    if !board.is_occupied(jump) {
                        moves.push(Move::PawnJump {
                            piece: pawn,
                            destination: jump,
                        });
                    }
                }
            }
        }
    }

    // --- Diagonal captures and en passant ---
    for d_file in [1, -1] {
        let Some(destination) = origin.offset(forward, d_file) else {
            continue;
        };
        match board.occupant(destination) {
            Some(captured) if captured.color() != color => {
                moves.push(promote_on_far_rank(
                    color,
                    destination,
                    Move::PawnAttack {
                        piece: pawn,
                        destination,
                        captured,
                    },
                ));
            }
            Some(_) => {}
            None => {
                // The jumped pawn stands beside us; we land behind it.
                let beside = origin.offset(0, d_file);
                if let Some(captured) = board.en_passant_pawn() {
                    if captured.color() != color && beside == Some(captured.coordinate()) {
                        moves.push(Move::PawnEnPassant {
                            piece: pawn,
                            destination,
                            captured,
                        });
                    }
                }
            }
        }
    }
}

/// Wrap `mv` as a promotion when `destination` is on the mover's far rank.
fn promote_on_far_rank(color: Color, destination: Coordinate, mv: Move) -> Move {
    if color.is_promotion_square(destination) {
        Move::PawnPromotion(Box::new(mv))
    } else {
        mv
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::coordinate::Coordinate;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;

    fn board_with(extra: &[Piece], en_passant_pawn: Option<Piece>) -> Board {
        let mut builder = Board::builder();
        builder
            .place(Piece::new(PieceKind::King, Color::White, Coordinate::H1))
            .place(Piece::new(PieceKind::King, Color::Black, Coordinate::H8))
            .en_passant_pawn(en_passant_pawn);
        for &piece in extra {
            builder.place(piece);
        }
        builder.build().unwrap()
    }

    fn destinations(moves: &[Move]) -> Vec<Coordinate> {
        let mut targets: Vec<Coordinate> = moves.iter().filter_map(Move::destination).collect();
        targets.sort();
        targets
    }

    #[test]
    fn unmoved_pawn_pushes_and_jumps() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White, Coordinate::E2);
        let board = board_with(&[pawn], None);
        let moves = pawn.possible_moves(&board);
        assert_eq!(moves.len(), 2);
        assert!(matches!(moves[0], Move::Pawn { destination, .. } if destination == Coordinate::E3));
        assert!(moves[1].is_pawn_jump());
        assert_eq!(moves[1].destination(), Some(Coordinate::E4));
    }

    #[test]
    fn black_pawn_moves_toward_rank_one() {
        let pawn = Piece::new(PieceKind::Pawn, Color::Black, Coordinate::D7);
        let board = board_with(&[pawn], None);
        assert_eq!(
            destinations(&pawn.possible_moves(&board)),
            vec![Coordinate::D6, Coordinate::D5]
        );
    }

    #[test]
    fn moved_pawn_cannot_jump() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White, Coordinate::E3).with_has_moved(true);
        let board = board_with(&[pawn], None);
        assert_eq!(destinations(&pawn.possible_moves(&board)), vec![Coordinate::E4]);
    }

    #[test]
    fn blocked_pawn_has_no_pushes() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White, Coordinate::E2);
        let blocker = Piece::new(PieceKind::Knight, Color::Black, Coordinate::E3);
        let board = board_with(&[pawn, blocker], None);
        assert!(pawn.possible_moves(&board).is_empty());
    }

    #[test]
    fn jump_needs_both_squares_empty() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White, Coordinate::E2);
        let blocker = Piece::new(PieceKind::Knight, Color::Black, Coordinate::E4);
        let board = board_with(&[pawn, blocker], None);
        assert_eq!(destinations(&pawn.possible_moves(&board)), vec![Coordinate::E3]);
    }

    #[test]
    fn diagonal_captures_enemies_only() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White, Coordinate::D4).with_has_moved(true);
        let enemy = Piece::new(PieceKind::Bishop, Color::Black, Coordinate::E5);
        let friend = Piece::new(PieceKind::Knight, Color::White, Coordinate::C5);
        let board = board_with(&[pawn, enemy, friend], None);
        let moves = pawn.possible_moves(&board);
        let captures: Vec<&Move> = moves.iter().filter(|mv| mv.is_attack()).collect();
        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].captured_piece(), Some(enemy));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn far_rank_push_and_capture_promote() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White, Coordinate::B7).with_has_moved(true);
        let rook = Piece::new(PieceKind::Rook, Color::Black, Coordinate::A8);
        let board = board_with(&[pawn, rook], None);
        let moves = pawn.possible_moves(&board);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(Move::is_promotion));
        assert!(moves.iter().any(|mv| mv.captured_piece() == Some(rook)));
    }

    #[test]
    fn en_passant_lands_behind_jumped_pawn() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White, Coordinate::E5).with_has_moved(true);
        let jumped = Piece::new(PieceKind::Pawn, Color::Black, Coordinate::D5).with_has_moved(true);
        let board = board_with(&[pawn, jumped], Some(jumped));
        let moves = pawn.possible_moves(&board);
        let en_passant: Vec<&Move> = moves.iter().filter(|mv| mv.is_en_passant()).collect();
        assert_eq!(en_passant.len(), 1);
        assert_eq!(en_passant[0].destination(), Some(Coordinate::D6));
        assert_eq!(en_passant[0].captured_piece(), Some(jumped));
    }

    #[test]
    fn no_en_passant_against_own_pawn() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White, Coordinate::E5).with_has_moved(true);
        let neighbour = Piece::new(PieceKind::Pawn, Color::White, Coordinate::D5).with_has_moved(true);
        let board = board_with(&[pawn, neighbour], Some(neighbour));
        assert!(!pawn.possible_moves(&board).iter().any(Move::is_en_passant));
    }
}
