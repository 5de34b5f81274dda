//! Per-side view of a board: legal moves, check, checkmate, stalemate, and move making.

use std::fmt;
use std::ptr;

use tracing::trace;

use crate::board::Board;
use crate::castling;
use crate::chess_move::Move;
use crate::color::Color;
use crate::coordinate::Coordinate;
use crate::piece::Piece;

/// Return `true` if any of `moves` lands on `coordinate`.
pub fn is_square_attacked(coordinate: Coordinate, moves: &[Move]) -> bool {
    moves
        .iter()
        .any(|mv| mv.destination() == Some(coordinate))
}

/// Player data resolved once when a board is built.
#[derive(Debug, Clone)]
pub(crate) struct PlayerState {
    king: Piece,
    legal_moves: Vec<Move>,
    in_check: bool,
}

impl PlayerState {
    /// Placeholder used while the board's own moves are being generated.
    pub(crate) fn unresolved(king: Piece) -> PlayerState {
        PlayerState {
            king,
            legal_moves: Vec::new(),
            in_check: false,
        }
    }

    /// Resolve a side from its own and its opponent's pseudo-legal moves.
    pub(crate) fn new(
        board: &Board,
        king: Piece,
        own_moves: &[Move],
        opponent_moves: &[Move],
    ) -> PlayerState {
        let in_check = is_square_attacked(king.coordinate(), opponent_moves);
        let castles = castling::castle_moves(board, king, in_check, opponent_moves);

        let mut legal_moves = Vec::with_capacity(own_moves.len() + castles.len());
        legal_moves.extend_from_slice(own_moves);
        legal_moves.extend(castles);

        PlayerState {
            king,
            legal_moves,
            in_check,
        }
    }

    #[inline]
    pub(crate) fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }
}

/// Outcome of [`Player::make_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveStatus {
    /// The move was applied.
    Done,
    /// The move is not among the player's legal moves.
    IllegalMove,
    /// The move would leave the mover's own king attacked.
    LeavesPlayerInCheck,
}

impl MoveStatus {
    /// Return `true` if the move was applied.
    #[inline]
    pub fn is_done(self) -> bool {
        self == MoveStatus::Done
    }
}

impl fmt::Display for MoveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveStatus::Done => write!(f, "done"),
            MoveStatus::IllegalMove => write!(f, "illegal move"),
            MoveStatus::LeavesPlayerInCheck => write!(f, "leaves player in check"),
        }
    }
}

/// The result of attempting a move: source board, resulting board, and status.
///
/// When the move is rejected the resulting board is the source board.
#[derive(Debug)]
pub struct MoveTransition<'a> {
    from: &'a Board,
    to: Option<Board>,
    mv: Move,
    status: MoveStatus,
}

impl<'a> MoveTransition<'a> {
    fn rejected(from: &'a Board, mv: Move, status: MoveStatus) -> MoveTransition<'a> {
        MoveTransition {
            from,
            to: None,
            mv,
            status,
        }
    }

    /// Return the board the move was attempted on.
    #[inline]
    pub fn from_board(&self) -> &'a Board {
        self.from
    }

    /// Return the resulting board, or the source board if the move was rejected.
    #[inline]
    pub fn to_board(&self) -> &Board {
        self.to.as_ref().unwrap_or(self.from)
    }

    /// Consume the transition and return the resulting board.
    ///
    /// Clones the source board when the move was rejected.
    pub fn into_board(self) -> Board {
        match self.to {
            Some(board) => board,
            None => self.from.clone(),
        }
    }

    /// Return the attempted move.
    #[inline]
    pub fn transition_move(&self) -> &Move {
        &self.mv
    }

    /// Return the outcome.
    #[inline]
    pub fn status(&self) -> MoveStatus {
        self.status
    }
}

/// One side of a board.
///
/// A player is a borrowed view: the legal moves, king and check status it
/// reports were resolved when the board was built.
#[derive(Clone, Copy)]
pub struct Player<'a> {
    board: &'a Board,
    color: Color,
}

impl<'a> Player<'a> {
    #[inline]
    pub(crate) fn new(board: &'a Board, color: Color) -> Player<'a> {
        Player { board, color }
    }

    #[inline]
    fn state(self) -> &'a PlayerState {
        self.board.player_state(self.color)
    }

    /// Return this player's color.
    #[inline]
    pub fn color(self) -> Color {
        self.color
    }

    /// Return the board this player belongs to.
    #[inline]
    pub fn board(self) -> &'a Board {
        self.board
    }

    /// Return this player's king.
    #[inline]
    pub fn king(self) -> Piece {
        self.state().king
    }

    /// Return this player's legal moves: pseudo-legal piece moves followed by castles.
    ///
    /// These moves may still leave the king attacked; [`make_move`](Self::make_move)
    /// performs that final check.
    #[inline]
    pub fn legal_moves(self) -> &'a [Move] {
        &self.state().legal_moves
    }

    /// Return this player's pieces still on the board.
    #[inline]
    pub fn active_pieces(self) -> &'a [Piece] {
        self.board.pieces(self.color)
    }

    /// Return the other side of the same board.
    #[inline]
    pub fn opponent(self) -> Player<'a> {
        Player::new(self.board, self.color.flip())
    }

    /// Return `true` if the opponent attacks this player's king.
    #[inline]
    pub fn is_in_check(self) -> bool {
        self.state().in_check
    }

    /// Return `true` if in check with no move that escapes it.
    pub fn is_in_checkmate(self) -> bool {
        self.is_in_check() && !self.has_escape_moves()
    }

    /// Return `true` if not in check but every move would leave the king attacked.
    pub fn is_in_stalemate(self) -> bool {
        !self.is_in_check() && !self.has_escape_moves()
    }

    /// Return `true` if this player has castled earlier in the game.
    #[inline]
    pub fn is_castled(self) -> bool {
        self.board.has_castled(self.color)
    }

    /// Return `true` if at least one legal move can be made successfully.
    pub fn has_escape_moves(self) -> bool {
        self.legal_moves()
            .iter()
            .any(|mv| self.make_move(mv).status().is_done())
    }

    /// Return `true` if `mv` is one of this player's legal moves.
    #[inline]
    pub fn is_move_legal(self, mv: &Move) -> bool {
        self.legal_moves().contains(mv)
    }

    /// Attempt a move and report the outcome.
    ///
    /// Moves outside [`legal_moves`](Self::legal_moves) are rejected as
    /// [`MoveStatus::IllegalMove`]. Otherwise the move is executed and rejected
    /// as [`MoveStatus::LeavesPlayerInCheck`] if any reply on the new board
    /// lands on this player's king.
    pub fn make_move(self, mv: &Move) -> MoveTransition<'a> {
        if !self.is_move_legal(mv) {
            return MoveTransition::rejected(self.board, mv.clone(), MoveStatus::IllegalMove);
        }

        let candidate = self.board.execute(mv);
        let own_king = candidate.player(self.color).king();
        let replies = candidate.player(self.color.flip()).legal_moves();
        if is_square_attacked(own_king.coordinate(), replies) {
            trace!(%mv, color = %self.color, "move leaves king attacked");
            return MoveTransition::rejected(
                self.board,
                mv.clone(),
                MoveStatus::LeavesPlayerInCheck,
            );
        }

        MoveTransition {
            from: self.board,
            to: Some(candidate),
            mv: mv.clone(),
            status: MoveStatus::Done,
        }
    }
}

impl PartialEq for Player<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.board, other.board) && self.color == other.color
    }
}

impl Eq for Player<'_> {}

impl fmt::Debug for Player<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("color", &self.color)
            .field("king", &self.king())
            .field("legal_moves", &self.legal_moves().len())
            .field("in_check", &self.is_in_check())
            .finish()
    }
}

impl fmt::Display for Player<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}
