//! Uniform-random playouts.

use rand::Rng;
use rand::seq::IndexedRandom;

use reverso_core::{Board, Color};

/// Play uniformly random moves from `board` with `to_move` first until the game ends.
///
/// A side with no move passes; when the other side cannot move either the
/// game is over. Returns 1.0 if `ai_color` finishes with strictly more
/// discs than its opponent, 0.0 otherwise (losses and ties alike).
pub fn simulate<R: Rng + ?Sized>(board: &Board, to_move: Color, ai_color: Color, rng: &mut R) -> f64 {
    let mut board = *board;
    let mut color = to_move;

    while !board.is_terminal() {
        let moves = board.legal_moves(color);
        match moves.as_slice().choose(rng) {
            Some(&mv) => {
                if board.apply_move(color, mv).is_err() {
                    break;
                }
                color = !color;
            }
            None => {
                color = !color;
                if !board.has_legal_move(color) {
                    break;
                }
            }
        }
    }

    let score = board.score();
    if score[ai_color] > score[!ai_color] { 1.0 } else { 0.0 }
}

/// Playout runner that counts the games it plays.
#[derive(Debug, Default)]
pub struct Rollouts {
    played: u32,
}

impl Rollouts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one [`simulate`] playout and count it.
    pub fn run<R: Rng + ?Sized>(&mut self, board: &Board, to_move: Color, ai_color: Color, rng: &mut R) -> f64 {
        self.played += 1;
        simulate(board, to_move, ai_color, rng)
    }

    /// Playouts run so far.
    pub fn played(&self) -> u32 {
        self.played
    }
}
