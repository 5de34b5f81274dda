//! Core chess types: immutable boards, move generation, and game rules.

mod board;
mod castling;
mod chess_move;
mod color;
mod coordinate;
mod error;
mod execute;
mod movegen;
mod notation;
mod piece;
mod piece_kind;
mod player;

pub use board::{Board, BoardBuilder};
pub use castling::CastleSide;
pub use chess_move::{CastleMove, Move, create_move};
pub use color::Color;
pub use coordinate::Coordinate;
pub use error::BoardError;
pub use notation::{ALGEBRAIC_NOTATION, coordinate_of};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use player::{MoveStatus, MoveTransition, Player, is_square_attacked};
