//! Text layout parsing and serialization for [`Board`].
//!
//! A layout is eight rows, top (y = 0) to bottom, eight cells per row:
//! `B` black, `W` white, `.` empty. Whitespace around and between rows
//! is ignored.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::cell::Cell;
use crate::error::LayoutError;
use crate::square::{BOARD_SIZE, Square};

/// Layout of the standard starting position.
pub const STARTING_LAYOUT: &str = "\
........
........
........
...BW...
...WB...
........
........
........";

impl FromStr for Board {
    type Err = LayoutError;

    fn from_str(layout: &str) -> Result<Board, LayoutError> {
        let rows: Vec<&str> = layout.split_whitespace().collect();
        if rows.len() != BOARD_SIZE {
            return Err(LayoutError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (y, row) in rows.iter().enumerate() {
            let length = row.chars().count();
            if length != BOARD_SIZE {
                return Err(LayoutError::BadRowLength { row: y, length });
            }
            for (x, c) in row.chars().enumerate() {
                let cell = Cell::from_char(c).ok_or(LayoutError::InvalidCellChar { character: c })?;
                if let Some(sq) = Square::from_coords(x, y) {
                    board.set(sq, cell);
                }
            }
        }

        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let c = Square::from_coords(x, y).map_or('.', |sq| self.cell(sq).to_char());
                write!(f, "{c}")?;
            }
            if y < BOARD_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_LAYOUT;
    use crate::board::Board;
    use crate::error::LayoutError;

    #[test]
    fn starting_layout_parses() {
        let board: Board = STARTING_LAYOUT.parse().unwrap();
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn display_matches_layout() {
        assert_eq!(Board::starting_position().to_string(), STARTING_LAYOUT);
    }

    #[test]
    fn indented_layout_parses() {
        let board: Board = "
            ........
            ........
            ........
            ...bw...
            ...wb...
            ........
            ........
            ........"
            .parse()
            .unwrap();
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn wrong_row_count() {
        let err = "........ ........".parse::<Board>().unwrap_err();
        assert_eq!(err, LayoutError::WrongRowCount { found: 2 });
    }

    #[test]
    fn bad_row_length() {
        let layout = STARTING_LAYOUT.replacen("........", ".......", 1);
        let err = layout.parse::<Board>().unwrap_err();
        assert_eq!(err, LayoutError::BadRowLength { row: 0, length: 7 });
    }

    #[test]
    fn invalid_char() {
        let layout = STARTING_LAYOUT.replacen("...BW...", "...BX...", 1);
        let err = layout.parse::<Board>().unwrap_err();
        assert_eq!(err, LayoutError::InvalidCellChar { character: 'X' });
    }
}
