//! Core Reversi types: board representation, move generation, and game rules.

mod bitboard;
mod board;
mod cell;
mod color;
mod error;
mod layout;
mod make_move;
mod movegen;
pub mod perft;
mod square;

pub use bitboard::{Bitboard, Squares};
pub use board::{Board, PrettyBoard, Score};
pub use cell::Cell;
pub use color::Color;
pub use error::{BoardError, LayoutError, MoveError};
pub use layout::STARTING_LAYOUT;
pub use movegen::MoveList;
pub use square::{BOARD_SIZE, Direction, Square};
