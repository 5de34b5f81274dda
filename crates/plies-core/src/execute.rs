//! Move execution: build the successor board from a move.

use crate::board::{Board, BoardBuilder};
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;

impl Board {
    /// Return the board that results from playing `mv` on this board.
    ///
    /// The mover is the moved piece's color. Every other piece is carried over
    /// unchanged, the captured piece (including an en passant victim) is
    /// dropped, the moved piece lands on the destination, and a castling rook
    /// is relocated. A two-square pawn jump makes the landed pawn the en
    /// passant pawn; every other move clears it. The opponent moves next.
    ///
    /// No legality checking happens here; see
    /// [`Player::make_move`](crate::Player::make_move).
    ///
    /// # Panics
    ///
    /// Panics on [`Move::Null`], and if the result does not have exactly one
    /// king per side (only reachable by executing a king capture).
    pub fn execute(&self, mv: &Move) -> Board {
        let Some(moved) = mv.moved_piece() else {
            panic!("cannot execute the null move");
        };
        let mover = moved.color();
        let castle = mv.castle();
        let captured = mv.captured_piece();

        let mut builder = BoardBuilder::new();
        for &piece in self.pieces(mover) {
            let is_castling_rook = castle.is_some_and(|castle| castle.rook == piece);
            if piece != moved && !is_castling_rook {
                builder.place(piece);
            }
        }
        for &piece in self.pieces(mover.flip()) {
            if captured != Some(piece) {
                builder.place(piece);
            }
        }

        let landed = Piece::move_piece(mv);
        if let Some(landed) = landed {
            builder.place(landed);
        }
        if let Some(castle) = castle {
            builder.place(castle.rook.move_to(castle.rook_destination));
        }

        for color in Color::ALL {
            builder.castled(color, self.has_castled(color));
        }
        if mv.is_castling() {
            builder.castled(mover, true);
        }
        if mv.is_pawn_jump() {
            builder.en_passant_pawn(landed);
        }
        builder.side_to_move(mover.flip());

        match builder.build() {
            Ok(board) => board,
            Err(err) => panic!("executing {mv} produced an invalid board: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::chess_move::{Move, create_move};
    use crate::color::Color;
    use crate::coordinate::Coordinate;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;

    #[test]
    fn execute_leaves_source_untouched() {
        let board = Board::standard();
        let before = format!("{board}");
        let mv = create_move(&board, Coordinate::E2, Coordinate::E4);
        let next = board.execute(&mv);
        assert_eq!(format!("{board}"), before);
        assert!(board.occupant(Coordinate::E4).is_none());
        let pawn = next.occupant(Coordinate::E4).unwrap();
        assert!(pawn.has_moved());
        assert!(next.occupant(Coordinate::E2).is_none());
    }

    #[test]
    fn jump_sets_and_next_move_clears_en_passant() {
        let board = Board::standard();
        let jump = create_move(&board, Coordinate::E2, Coordinate::E4);
        let after_jump = board.execute(&jump);
        assert_eq!(
            after_jump.en_passant_pawn().map(Piece::coordinate),
            Some(Coordinate::E4)
        );
        let reply = create_move(&after_jump, Coordinate::G8, Coordinate::F6);
        let after_reply = after_jump.execute(&reply);
        assert!(after_reply.en_passant_pawn().is_none());
    }

    #[test]
    fn capture_removes_victim() {
        let board = Board::builder()
            .place(Piece::new(PieceKind::King, Color::White, Coordinate::E1))
            .place(Piece::new(PieceKind::Rook, Color::White, Coordinate::A1))
            .place(Piece::new(PieceKind::Knight, Color::Black, Coordinate::A7))
            .place(Piece::new(PieceKind::King, Color::Black, Coordinate::E8))
            .build()
            .unwrap();
        let capture = create_move(&board, Coordinate::A1, Coordinate::A7);
        assert!(capture.is_attack());
        let next = board.execute(&capture);
        assert_eq!(next.pieces(Color::Black).len(), 1);
        assert_eq!(next.occupant(Coordinate::A7).map(Piece::color), Some(Color::White));
    }

    #[test]
    fn castle_moves_king_and_rook() {
        let board = Board::builder()
            .place(Piece::new(PieceKind::King, Color::White, Coordinate::E1))
            .place(Piece::new(PieceKind::Rook, Color::White, Coordinate::H1))
            .place(Piece::new(PieceKind::King, Color::Black, Coordinate::E8))
            .build()
            .unwrap();
        let castle = board
            .white_player()
            .legal_moves()
            .iter()
            .find(|mv| matches!(mv, Move::CastleKingSide(_)))
            .cloned()
            .unwrap();
        let next = board.execute(&castle);
        assert_eq!(next.occupant(Coordinate::G1).map(Piece::kind), Some(PieceKind::King));
        assert_eq!(next.occupant(Coordinate::F1).map(Piece::kind), Some(PieceKind::Rook));
        assert!(next.occupant(Coordinate::H1).is_none());
        assert!(next.occupant(Coordinate::E1).is_none());
        assert!(next.white_player().is_castled());
        assert!(!next.black_player().is_castled());
        assert!(!board.white_player().is_castled());
    }

    #[test]
    #[should_panic(expected = "null move")]
    fn executing_null_panics() {
        Board::standard().execute(&Move::Null);
    }
}
