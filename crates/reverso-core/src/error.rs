//! Error types for move application, layout parsing and board validation.

use crate::square::Square;

/// Reasons a move is rejected. None of these are fatal: the caller picks another move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The coordinates lie outside the 8x8 grid.
    #[error("({x}, {y}) is off the board")]
    OffBoard {
        /// Requested column.
        x: usize,
        /// Requested row.
        y: usize,
    },
    /// The target square already holds a disc.
    #[error("{square} is already occupied")]
    Occupied {
        /// The occupied square.
        square: Square,
    },
    /// Placing a disc here would not flip anything.
    #[error("{square} flips no discs")]
    NoFlips {
        /// The square that closes no run.
        square: Square,
    },
}

/// Errors that occur when parsing a text layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The layout does not have exactly 8 rows.
    #[error("expected 8 rows in layout, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 8 cells.
    #[error("row {row} describes {length} cells, expected 8")]
    BadRowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of cells described.
        length: usize,
    },
    /// An unrecognized character appeared in a row.
    #[error("invalid cell character: '{character}'")]
    InvalidCellChar {
        /// The invalid character.
        character: char,
    },
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The black and white bitboards share a square.
    #[error("black and white discs overlap on {count} squares")]
    OverlappingSides {
        /// Number of squares claimed by both sides.
        count: u32,
    },
}
