//! The chess board: piece placement, side to move, en passant, and both players' moves.

use std::fmt;

use tracing::trace;

use crate::chess_move::Move;
use crate::color::Color;
use crate::coordinate::Coordinate;
use crate::error::BoardError;
use crate::movegen;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::player::{Player, PlayerState};

/// Back-rank layout from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Complete, immutable chess position.
///
/// Boards are produced by [`BoardBuilder::build`] or [`Board::execute`]; both
/// resolve the legal moves, king and check status of each player before the
/// board is handed out, so every query afterwards is a plain read.
#[derive(Clone)]
pub struct Board {
    /// Occupant of each square, indexed by [`Coordinate::index()`].
    squares: [Option<Piece>; Coordinate::COUNT],
    /// Pieces of each side in square index order, indexed by [`Color::index()`].
    pieces: [Vec<Piece>; Color::COUNT],
    /// Which side moves next.
    side_to_move: Color,
    /// The pawn that just made a two-square jump, if any.
    en_passant_pawn: Option<Piece>,
    /// Whether each side has castled during the game.
    castled: [bool; Color::COUNT],
    /// Resolved per-player state, indexed by [`Color::index()`].
    players: [PlayerState; Color::COUNT],
}

impl Board {
    /// Return an empty builder.
    #[inline]
    pub fn builder() -> BoardBuilder {
        BoardBuilder::new()
    }

    /// Return the standard starting position with White to move.
    pub fn standard() -> Board {
        let mut builder = BoardBuilder::new();
        for color in Color::ALL {
            for (file, kind) in (0u8..).zip(BACK_RANK) {
                builder
                    .place(Piece::new(kind, color, Coordinate::at(color.back_rank(), file)))
                    .place(Piece::new(
                        PieceKind::Pawn,
                        color,
                        Coordinate::at(color.pawn_rank(), file),
                    ));
            }
        }
        builder.side_to_move(Color::White);
        builder
            .build()
            .expect("standard layout has one king per side")
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn occupant(&self, coordinate: Coordinate) -> Option<Piece> {
        self.squares[coordinate.index()]
    }

    /// Return the piece at `rank` and `file`, or `None` if the square is
    /// empty or off the board.
    #[inline]
    pub fn occupant_at(&self, rank: u8, file: u8) -> Option<Piece> {
        Coordinate::new(rank, file).and_then(|coordinate| self.occupant(coordinate))
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, coordinate: Coordinate) -> bool {
        self.squares[coordinate.index()].is_some()
    }

    /// Return the pieces of one side, in square index order (a8 first, h1 last).
    #[inline]
    pub fn pieces(&self, color: Color) -> &[Piece] {
        &self.pieces[color.index()]
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return the pawn that can be captured en passant this ply, if any.
    #[inline]
    pub fn en_passant_pawn(&self) -> Option<Piece> {
        self.en_passant_pawn
    }

    /// Return `true` if the given side has castled earlier in the game.
    #[inline]
    pub fn has_castled(&self, color: Color) -> bool {
        self.castled[color.index()]
    }

    /// Return a view of the given side.
    #[inline]
    pub fn player(&self, color: Color) -> Player<'_> {
        Player::new(self, color)
    }

    /// Return a view of the White side.
    #[inline]
    pub fn white_player(&self) -> Player<'_> {
        self.player(Color::White)
    }

    /// Return a view of the Black side.
    #[inline]
    pub fn black_player(&self) -> Player<'_> {
        self.player(Color::Black)
    }

    /// Return a view of the side to move.
    #[inline]
    pub fn current_player(&self) -> Player<'_> {
        self.player(self.side_to_move)
    }

    /// Iterate over the legal moves of both sides, White's first.
    pub fn legal_moves(&self) -> impl Iterator<Item = &Move> {
        self.white_player()
            .legal_moves()
            .iter()
            .chain(self.black_player().legal_moves())
    }

    /// Return the resolved state of one side.
    #[inline]
    pub(crate) fn player_state(&self, color: Color) -> &PlayerState {
        &self.players[color.index()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in 0u8..8 {
            write!(f, "{}  ", 8 - rank)?;
            for file in 0u8..8 {
                let c = self
                    .occupant(Coordinate::at(rank, file))
                    .map_or('.', Piece::symbol);
                if file < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("side_to_move", &self.side_to_move)
            .field("white", &self.pieces[Color::White.index()])
            .field("black", &self.pieces[Color::Black.index()])
            .field("en_passant_pawn", &self.en_passant_pawn)
            .field("castled", &self.castled)
            .finish()
    }
}

/// Accumulates a placement and produces an immutable [`Board`].
///
/// Placing a piece keys it by its own coordinate, so a later placement on the
/// same square displaces the earlier one.
#[derive(Debug, Clone)]
pub struct BoardBuilder {
    squares: [Option<Piece>; Coordinate::COUNT],
    side_to_move: Color,
    en_passant_pawn: Option<Piece>,
    castled: [bool; Color::COUNT],
}

impl BoardBuilder {
    /// Return an empty builder with White to move.
    pub fn new() -> BoardBuilder {
        BoardBuilder {
            squares: [None; Coordinate::COUNT],
            side_to_move: Color::White,
            en_passant_pawn: None,
            castled: [false; Color::COUNT],
        }
    }

    /// Put a piece on its square.
    pub fn place(&mut self, piece: Piece) -> &mut Self {
        self.squares[piece.coordinate().index()] = Some(piece);
        self
    }

    /// Set the side to move.
    pub fn side_to_move(&mut self, color: Color) -> &mut Self {
        self.side_to_move = color;
        self
    }

    /// Set the pawn that may be captured en passant.
    ///
    /// Ignored by [`build`](Self::build) unless that exact pawn is placed.
    pub fn en_passant_pawn(&mut self, pawn: Option<Piece>) -> &mut Self {
        self.en_passant_pawn = pawn;
        self
    }

    /// Record whether the given side has castled.
    pub fn castled(&mut self, color: Color, castled: bool) -> &mut Self {
        self.castled[color.index()] = castled;
        self
    }

    /// Freeze the placement into a board and resolve both players.
    ///
    /// Pseudo-legal moves are generated for both sides first; each player's
    /// check status and castling moves are then derived from the opponent's
    /// pseudo-legal moves.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidKingCount`] unless each side has exactly
    /// one king.
    pub fn build(&self) -> Result<Board, BoardError> {
        let mut pieces: [Vec<Piece>; Color::COUNT] = [Vec::with_capacity(16), Vec::with_capacity(16)];
        for &piece in self.squares.iter().flatten() {
            pieces[piece.color().index()].push(piece);
        }

        let white_king = find_king(&pieces[Color::White.index()], Color::White)?;
        let black_king = find_king(&pieces[Color::Black.index()], Color::Black)?;

        let en_passant_pawn = self
            .en_passant_pawn
            .filter(|pawn| self.squares[pawn.coordinate().index()] == Some(*pawn));

        let mut board = Board {
            squares: self.squares,
            pieces,
            side_to_move: self.side_to_move,
            en_passant_pawn,
            castled: self.castled,
            players: [
                PlayerState::unresolved(white_king),
                PlayerState::unresolved(black_king),
            ],
        };

        let white_moves = movegen::pseudo_legal_moves(&board, board.pieces(Color::White));
        let black_moves = movegen::pseudo_legal_moves(&board, board.pieces(Color::Black));
        let players = [
            PlayerState::new(&board, white_king, &white_moves, &black_moves),
            PlayerState::new(&board, black_king, &black_moves, &white_moves),
        ];
        board.players = players;

        trace!(
            white = board.players[Color::White.index()].legal_moves().len(),
            black = board.players[Color::Black.index()].legal_moves().len(),
            "board built"
        );
        Ok(board)
    }
}

impl Default for BoardBuilder {
    fn default() -> Self {
        BoardBuilder::new()
    }
}

/// Return the single king in `pieces`.
fn find_king(pieces: &[Piece], color: Color) -> Result<Piece, BoardError> {
    let mut kings = pieces.iter().filter(|piece| piece.is(PieceKind::King));
    match (kings.next(), kings.count()) {
        (Some(&king), 0) => Ok(king),
        (first, rest) => Err(BoardError::InvalidKingCount {
            color,
            count: usize::from(first.is_some()) + rest,
        }),
    }
}
