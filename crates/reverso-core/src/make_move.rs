//! Move execution: place a disc and flip the closed runs.

use tracing::trace;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::color::Color;
use crate::error::MoveError;
use crate::square::Square;

impl Board {
    /// Place a `color` disc on `sq` and flip every closed run.
    ///
    /// Returns the set of flipped squares. An occupied square or a move
    /// that flips nothing is rejected and leaves the board untouched.
    pub fn apply_move(&mut self, color: Color, sq: Square) -> Result<Bitboard, MoveError> {
        if self.is_occupied(sq) {
            trace!(%color, square = %sq, "rejected move on occupied square");
            return Err(MoveError::Occupied { square: sq });
        }

        let flips = self.flips(color, sq);
        if flips.is_empty() {
            trace!(%color, square = %sq, "rejected move with no flips");
            return Err(MoveError::NoFlips { square: sq });
        }

        self.paint(flips.with(sq), color);
        Ok(flips)
    }

    /// [`apply_move`](Self::apply_move) from raw coordinates, rejecting off-board input.
    pub fn play_at(&mut self, color: Color, x: usize, y: usize) -> Result<Bitboard, MoveError> {
        let sq = Square::from_coords(x, y).ok_or(MoveError::OffBoard { x, y })?;
        self.apply_move(color, sq)
    }

    /// Copy-make variant: return the resulting board, leaving `self` unchanged.
    pub fn with_move(&self, color: Color, sq: Square) -> Result<Board, MoveError> {
        let mut next = *self;
        next.apply_move(color, sq)?;
        Ok(next)
    }
}
