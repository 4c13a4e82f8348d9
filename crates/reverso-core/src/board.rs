//! The Reversi board: disc placement, scoring and end-of-game detection.

use std::fmt;
use std::ops::Index;

use crate::bitboard::Bitboard;
use crate::cell::Cell;
use crate::color::Color;
use crate::error::BoardError;
use crate::square::{BOARD_SIZE, Square};

/// Complete position state: one bitboard per color.
///
/// The two bitboards are disjoint, so every square holds exactly one
/// [`Cell`] value. `Board` is `Copy`; the search works on its own copies
/// and never touches the caller's board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Bitboard for each side, indexed by [`Color::index()`].
    sides: [Bitboard; Color::COUNT],
}

impl Board {
    /// Return a board with no discs.
    pub const fn empty() -> Board {
        Board {
            sides: [Bitboard::EMPTY; Color::COUNT],
        }
    }

    /// Return the standard starting position.
    ///
    /// (3,3) and (4,4) are black, (4,3) and (3,4) are white.
    pub fn starting_position() -> Board {
        let center = BOARD_SIZE / 2;
        let mut board = Board::empty();
        let placements = [
            (center - 1, center - 1, Color::Black),
            (center - 1, center, Color::White),
            (center, center - 1, Color::White),
            (center, center, Color::Black),
        ];
        for (x, y, color) in placements {
            if let Some(sq) = Square::from_coords(x, y) {
                board.set(sq, Cell::from(color));
            }
        }
        board
    }

    /// Return the content of the given square.
    #[inline]
    pub fn cell(&self, sq: Square) -> Cell {
        Cell::from(self.color_on(sq))
    }

    /// Return the color of the disc on the given square, if any.
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|&color| self.sides[color.index()].contains(sq))
    }

    /// Return the bitboard for the given side.
    #[inline]
    pub fn side(&self, color: Color) -> Bitboard {
        self.sides[color.index()]
    }

    /// Return the occupied squares bitboard.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.sides[Color::Black.index()] | self.sides[Color::White.index()]
    }

    /// Return the empty squares bitboard.
    #[inline]
    pub fn empty_squares(&self) -> Bitboard {
        !self.occupied()
    }

    /// Return `true` if the given square holds a disc.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.occupied().contains(sq)
    }

    /// Number of discs of the given color.
    #[inline]
    pub fn count(&self, color: Color) -> u32 {
        self.sides[color.index()].count()
    }

    /// Return `true` when no empty square remains.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied() == Bitboard::FULL
    }

    /// Overwrite one square.
    pub(crate) fn set(&mut self, sq: Square, cell: Cell) {
        for color in Color::ALL {
            self.sides[color.index()] = self.sides[color.index()].without(sq);
        }
        if let Some(color) = cell.color() {
            self.sides[color.index()] = self.sides[color.index()].with(sq);
        }
    }

    /// Recolor every square in `squares` to `color`.
    #[inline]
    pub(crate) fn paint(&mut self, squares: Bitboard, color: Color) {
        self.sides[color.index()] |= squares;
        self.sides[color.flip().index()] &= !squares;
    }

    /// Disc count of each color; empty squares are excluded.
    pub fn score(&self) -> Score {
        Score {
            black: self.count(Color::Black),
            white: self.count(Color::White),
        }
    }

    /// Return `true` if the game is over.
    ///
    /// The game ends when the board is full, or when neither color has a
    /// legal move (double pass). A side reduced to zero discs falls under
    /// the second rule, since the remaining side then has nothing to flip.
    pub fn is_terminal(&self) -> bool {
        self.is_full()
            || Color::ALL
                .into_iter()
                .all(|color| !self.has_legal_move(color))
    }

    /// The color with strictly more discs, or `None` on a tie.
    pub fn winner(&self) -> Option<Color> {
        let score = self.score();
        match score.black.cmp(&score.white) {
            std::cmp::Ordering::Greater => Some(Color::Black),
            std::cmp::Ordering::Less => Some(Color::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        let overlap = self.sides[Color::Black.index()] & self.sides[Color::White.index()];
        if overlap.is_nonempty() {
            return Err(BoardError::OverlappingSides {
                count: overlap.count(),
            });
        }
        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = (0..BOARD_SIZE)
            .map(|y| {
                (0..BOARD_SIZE)
                    .filter_map(|x| Square::from_coords(x, y))
                    .map(|sq| self.cell(sq).to_char())
                    .collect()
            })
            .collect();
        write!(f, "Board(\"{}\")", rows.join("/"))
    }
}

/// Per-color disc counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub black: u32,
    pub white: u32,
}

impl Score {
    /// Total number of discs on the board.
    #[inline]
    pub fn total(&self) -> u32 {
        self.black + self.white
    }
}

impl Index<Color> for Score {
    type Output = u32;

    fn index(&self, color: Color) -> &u32 {
        match color {
            Color::Black => &self.black,
            Color::White => &self.white,
        }
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for y in 0..BOARD_SIZE {
            write!(f, "{}  ", y + 1)?;
            for x in 0..BOARD_SIZE {
                let c = Square::from_coords(x, y).map_or('?', |sq| board.cell(sq).to_char());
                if x < BOARD_SIZE - 1 {
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

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::cell::Cell;
    use crate::color::Color;
    use crate::square::Square;

    fn sq(x: usize, y: usize) -> Square {
        Square::from_coords(x, y).unwrap()
    }

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position();
        board.validate().unwrap();
        assert_eq!(board.cell(sq(3, 3)), Cell::Black);
        assert_eq!(board.cell(sq(4, 4)), Cell::Black);
        assert_eq!(board.cell(sq(3, 4)), Cell::White);
        assert_eq!(board.cell(sq(4, 3)), Cell::White);
        assert_eq!(board.cell(sq(0, 0)), Cell::Empty);
        assert_eq!(board.occupied().count(), 4);
    }

    #[test]
    fn starting_score() {
        let score = Board::starting_position().score();
        assert_eq!(score.black, 2);
        assert_eq!(score.white, 2);
        assert_eq!(score[Color::Black], 2);
        assert_eq!(score.total(), 4);
    }

    #[test]
    fn set_replaces_cell() {
        let mut board = Board::empty();
        board.set(sq(1, 1), Cell::Black);
        board.set(sq(1, 1), Cell::White);
        assert_eq!(board.color_on(sq(1, 1)), Some(Color::White));
        assert_eq!(board.count(Color::Black), 0);
        board.set(sq(1, 1), Cell::Empty);
        assert!(!board.is_occupied(sq(1, 1)));
        board.validate().unwrap();
    }

    #[test]
    fn copies_are_independent() {
        let original = Board::starting_position();
        let mut copy = original;
        copy.set(sq(0, 0), Cell::Black);
        assert_eq!(original.cell(sq(0, 0)), Cell::Empty);
        assert_eq!(copy.cell(sq(0, 0)), Cell::Black);
    }

    #[test]
    fn starting_position_is_not_terminal() {
        assert!(!Board::starting_position().is_terminal());
    }

    #[test]
    fn empty_board_is_terminal() {
        // Neither side can flip anything.
        assert!(Board::empty().is_terminal());
    }

    #[test]
    fn one_side_to_move_is_not_terminal() {
        let board: Board = "BW...... ........ ........ ........ ........ ........ ........ ........"
            .parse()
            .unwrap();
        assert!(!board.has_legal_move(Color::White));
        assert!(board.has_legal_move(Color::Black));
        assert!(!board.is_terminal());
    }

    #[test]
    fn side_without_discs_is_terminal() {
        let board: Board = "BBB..... ........ ........ ........ ........ ........ ........ ........"
            .parse()
            .unwrap();
        assert_eq!(board.score().white, 0);
        assert!(!board.is_full());
        assert!(board.is_terminal());
    }

    #[test]
    fn winner_and_tie() {
        let mut board = Board::starting_position();
        assert_eq!(board.winner(), None);
        board.set(sq(0, 0), Cell::White);
        assert_eq!(board.winner(), Some(Color::White));
    }

    #[test]
    fn pretty_print() {
        let output = format!("{}", Board::starting_position().pretty());
        assert!(output.contains("4  . . . B W . . ."));
        assert!(output.contains("5  . . . W B . . ."));
        assert!(output.ends_with("a b c d e f g h"));
    }

    #[test]
    fn debug_shows_rows() {
        let debug = format!("{:?}", Board::starting_position());
        assert!(debug.starts_with("Board(\"........"));
        assert!(debug.contains("...BW..."));
    }
}
