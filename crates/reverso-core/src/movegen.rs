//! Legal move generation and flip detection.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::color::Color;
use crate::square::{Direction, Square};

/// Stack-allocated buffer for generated moves. Capacity 64 covers every square.
#[derive(Clone, Copy)]
pub struct MoveList {
    moves: [Square; Square::COUNT],
    len: u8,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: [Square::from_index_unchecked(0); Square::COUNT],
            len: 0,
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, sq: Square) {
        debug_assert!((self.len as usize) < Square::COUNT);
        self.moves[self.len as usize] = sq;
        self.len += 1;
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return `true` if `sq` is in the list.
    pub fn contains(&self, sq: Square) -> bool {
        self.as_slice().contains(&sq)
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Square] {
        &self.moves[..self.len as usize]
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Square;
    #[inline]
    fn index(&self, index: usize) -> &Square {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Board {
    /// Discs `color` would flip by placing on `sq`.
    ///
    /// For each direction, a maximal run of opponent discs counts only when
    /// it is closed by one of `color`'s own discs; runs ending at the edge
    /// or at an empty square contribute nothing. Returns an empty set for
    /// occupied squares. The board is never modified.
    pub fn flips(&self, color: Color, sq: Square) -> Bitboard {
        if self.is_occupied(sq) {
            return Bitboard::EMPTY;
        }

        let own = self.side(color);
        let opponent = self.side(color.flip());
        let mut flips = Bitboard::EMPTY;

        for dir in Direction::ALL {
            let mut run = Bitboard::EMPTY;
            let mut cursor = sq.offset(dir);
            while let Some(next) = cursor
                && opponent.contains(next)
            {
                run = run.with(next);
                cursor = next.offset(dir);
            }
            if let Some(end) = cursor
                && own.contains(end)
            {
                flips |= run;
            }
        }

        flips
    }

    /// Return `true` if `color` may place a disc on `sq`.
    #[inline]
    pub fn is_legal(&self, color: Color, sq: Square) -> bool {
        self.flips(color, sq).is_nonempty()
    }

    /// All squares where `color` has a legal move, in index order.
    pub fn legal_moves(&self, color: Color) -> MoveList {
        let mut list = MoveList::new();
        for sq in self.empty_squares() {
            if self.is_legal(color, sq) {
                list.push(sq);
            }
        }
        list
    }

    /// Return `true` if `color` has at least one legal move.
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.empty_squares()
            .into_iter()
            .any(|sq| self.is_legal(color, sq))
    }
}
