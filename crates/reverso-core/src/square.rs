//! Board coordinates and scan directions.

use std::fmt;

/// Board side length.
pub const BOARD_SIZE: usize = 8;

/// A position on the board, encoded as a `u8`.
///
/// Index = y * 8 + x, so (0, 0) = 0, (7, 0) = 7, ..., (7, 7) = 63.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = BOARD_SIZE * BOARD_SIZE;

    /// The four corner squares.
    pub const CORNERS: [Square; 4] = [Square(0), Square(7), Square(56), Square(63)];

    /// Create a square from coordinates, returning `None` if off the board.
    #[inline]
    pub const fn from_coords(x: usize, y: usize) -> Option<Square> {
        if x < BOARD_SIZE && y < BOARD_SIZE {
            Some(Square((y * BOARD_SIZE + x) as u8))
        } else {
            None
        }
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if (index as usize) < Self::COUNT {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Create a square from a zero-based index without bounds checking.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `index < 64`.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!((index as usize) < Self::COUNT);
        Square(index)
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Column, 0..8.
    #[inline]
    pub const fn x(self) -> usize {
        self.0 as usize % BOARD_SIZE
    }

    /// Row, 0..8.
    #[inline]
    pub const fn y(self) -> usize {
        self.0 as usize / BOARD_SIZE
    }

    /// Return the `(x, y)` pair.
    #[inline]
    pub const fn coords(self) -> (usize, usize) {
        (self.x(), self.y())
    }

    /// Step one square in `dir`, or `None` when that leaves the board.
    #[inline]
    pub const fn offset(self, dir: Direction) -> Option<Square> {
        let x = self.x() as i8 + dir.dx;
        let y = self.y() as i8 + dir.dy;
        if x < 0 || y < 0 {
            return None;
        }
        Square::from_coords(x as usize, y as usize)
    }

    /// Return `true` for the four corners.
    #[inline]
    pub const fn is_corner(self) -> bool {
        let edge = (BOARD_SIZE - 1) as u8;
        let x = self.0 % BOARD_SIZE as u8;
        let y = self.0 / BOARD_SIZE as u8;
        (x == 0 || x == edge) && (y == 0 || y == edge)
    }

    /// Iterate over all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..Self::COUNT as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.x() as u8) as char;
        write!(f, "{}{}", file, self.y() + 1)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.x(), self.y())
    }
}

/// One of the eight compass steps used when scanning for flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub dx: i8,
    pub dy: i8,
}

impl Direction {
    /// All eight directions.
    pub const ALL: [Direction; 8] = [
        Direction { dx: 0, dy: 1 },
        Direction { dx: 1, dy: 1 },
        Direction { dx: 1, dy: 0 },
        Direction { dx: 1, dy: -1 },
        Direction { dx: 0, dy: -1 },
        Direction { dx: -1, dy: -1 },
        Direction { dx: -1, dy: 0 },
        Direction { dx: -1, dy: 1 },
    ];
}

#[cfg(test)]
mod tests {
    use super::{Direction, Square};

    #[test]
    fn coords_roundtrip() {
        for sq in Square::all() {
            let (x, y) = sq.coords();
            assert_eq!(Square::from_coords(x, y), Some(sq));
        }
    }

    #[test]
    fn off_board_coords() {
        assert!(Square::from_coords(8, 0).is_none());
        assert!(Square::from_coords(0, 8).is_none());
        assert!(Square::from_index(64).is_none());
    }

    #[test]
    fn offset_stops_at_edges() {
        let corner = Square::from_coords(0, 0).unwrap();
        assert_eq!(corner.offset(Direction { dx: -1, dy: 0 }), None);
        assert_eq!(corner.offset(Direction { dx: 0, dy: -1 }), None);
        assert_eq!(
            corner.offset(Direction { dx: 1, dy: 1 }),
            Square::from_coords(1, 1)
        );
        let far = Square::from_coords(7, 7).unwrap();
        assert_eq!(far.offset(Direction { dx: 1, dy: 0 }), None);
    }

    #[test]
    fn corners() {
        let corners: Vec<Square> = Square::all().filter(|sq| sq.is_corner()).collect();
        assert_eq!(corners, Square::CORNERS.to_vec());
        assert!(!Square::from_coords(0, 3).unwrap().is_corner());
    }

    #[test]
    fn algebraic_display() {
        assert_eq!(format!("{}", Square::from_coords(2, 4).unwrap()), "c5");
        assert_eq!(format!("{}", Square::from_coords(7, 0).unwrap()), "h1");
        assert_eq!(format!("{:?}", Square::from_coords(7, 0).unwrap()), "Square(7, 0)");
    }

    #[test]
    fn directions_are_distinct() {
        for (i, a) in Direction::ALL.iter().enumerate() {
            assert!(a.dx != 0 || a.dy != 0);
            for b in &Direction::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
