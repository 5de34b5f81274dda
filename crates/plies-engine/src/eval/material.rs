//! Material count.

use plies_core::Player;

/// Sum of [`PieceKind::value`](plies_core::PieceKind::value) over the player's pieces.
pub fn material(player: Player<'_>) -> i32 {
    player
        .active_pieces()
        .iter()
        .map(|piece| piece.kind().value())
        .sum()
}

#[cfg(test)]
mod tests {
    use plies_core::{Board, Color, Coordinate, Piece, PieceKind};

    use super::material;

    #[test]
    fn standard_material() {
        let board = Board::standard();
        // 8 pawns, 2 knights, 2 bishops, 2 rooks, a queen and the king.
        let expected = 8 * 100 + 2 * 300 + 2 * 300 + 2 * 500 + 900 + 10_000;
        assert_eq!(material(board.white_player()), expected);
        assert_eq!(material(board.black_player()), expected);
    }

    #[test]
    fn bare_king() {
        let board = Board::builder()
            .place(Piece::new(PieceKind::King, Color::White, Coordinate::E1))
            .place(Piece::new(PieceKind::King, Color::Black, Coordinate::E8))
            .place(Piece::new(PieceKind::Rook, Color::Black, Coordinate::A8))
            .build()
            .unwrap();
        assert_eq!(material(board.white_player()), 10_000);
        assert_eq!(material(board.black_player()), 10_500);
    }
}
