//! Static evaluation of boards.
//!
//! Scores are from White's perspective: positive means White is ahead.

pub mod king_safety;
pub mod material;
pub mod mobility;

use plies_core::{Board, Color, Player};

/// Scores a board for the search.
pub trait BoardEvaluator {
    /// Return White's score minus Black's score.
    ///
    /// `depth` is the remaining search depth at which `board` was reached.
    fn evaluate(&self, board: &Board, depth: u32) -> i32;
}

/// Material, mobility, check, checkmate and castling terms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardEvaluator;

impl StandardEvaluator {
    fn score(player: Player<'_>, depth: u32) -> i32 {
        material::material(player)
            .saturating_add(mobility::mobility(player))
            .saturating_add(king_safety::check(player))
            .saturating_add(king_safety::checkmate(player, depth))
            .saturating_add(king_safety::castled(player))
    }
}

impl BoardEvaluator for StandardEvaluator {
    fn evaluate(&self, board: &Board, depth: u32) -> i32 {
        Self::score(board.player(Color::White), depth)
            .saturating_sub(Self::score(board.player(Color::Black), depth))
    }
}

/// Evaluate `board` with the [`StandardEvaluator`].
pub fn evaluate(board: &Board, depth: u32) -> i32 {
    StandardEvaluator.evaluate(board, depth)
}

#[cfg(test)]
mod tests {
    use plies_core::{Board, Color, Coordinate, Piece, PieceKind, create_move};

    use super::evaluate;
    use crate::eval::king_safety::{CHECK_BONUS, CHECKMATE_BONUS};

    #[test]
    fn standard_position_is_balanced() {
        assert_eq!(evaluate(&Board::standard(), 0), 0);
        assert_eq!(evaluate(&Board::standard(), 4), 0);
    }

    #[test]
    fn extra_material_favours_owner() {
        let board = Board::builder()
            .place(Piece::new(PieceKind::King, Color::White, Coordinate::E1))
            .place(Piece::new(PieceKind::King, Color::Black, Coordinate::E8))
            .place(Piece::new(PieceKind::Queen, Color::Black, Coordinate::A5))
            .build()
            .unwrap();
        assert!(evaluate(&board, 0) < -800);
    }

    #[test]
    fn development_changes_mobility_only() {
        let board = Board::standard();
        let mv = create_move(&board, Coordinate::E2, Coordinate::E4);
        let next = board.current_player().make_move(&mv).into_board();
        // After 1. e4 White has 30 moves against Black's 20.
        assert_eq!(evaluate(&next, 0), 10);
    }

    #[test]
    fn checkmate_dominates() {
        let board = Board::builder()
            .place(Piece::new(PieceKind::King, Color::Black, Coordinate::H8))
            .place(Piece::new(PieceKind::Rook, Color::White, Coordinate::A8).with_has_moved(true))
            .place(Piece::new(PieceKind::King, Color::White, Coordinate::G6).with_has_moved(true))
            .side_to_move(Color::Black)
            .build()
            .unwrap();
        let shallow = evaluate(&board, 1);
        let deep = evaluate(&board, 2);
        assert!(shallow > CHECKMATE_BONUS * 100);
        assert!(deep > shallow);
        assert!(evaluate(&board, 0) >= CHECKMATE_BONUS + CHECK_BONUS);
        // Depths past the search limit saturate instead of overflowing.
        assert!(evaluate(&board, 3000) >= deep);
        assert!(evaluate(&board, u32::MAX) >= deep);
    }
}
