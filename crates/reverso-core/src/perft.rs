//! Perft (performance test) for move generation correctness verification.

use crate::board::Board;
use crate::color::Color;

/// Count the number of leaf nodes at the given depth with `color` to move.
///
/// A side without a legal move passes; the pass counts as one ply. When
/// neither side can move the line ends and counts as a single leaf.
pub fn perft(board: &Board, color: Color, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.legal_moves(color);

    if moves.is_empty() {
        if board.has_legal_move(!color) {
            return perft(board, !color, depth - 1);
        }
        return 1;
    }

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for &mv in &moves {
        let mut child = *board;
        if child.apply_move(color, mv).is_ok() {
            nodes += perft(&child, !color, depth - 1);
        }
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns `(square, node_count)` pairs sorted by algebraic name.
pub fn divide(board: &Board, color: Color, depth: usize) -> Vec<(String, u64)> {
    let moves = board.legal_moves(color);
    let mut results: Vec<(String, u64)> = moves
        .as_slice()
        .iter()
        .filter_map(|&mv| {
            let child = board.with_move(color, mv).ok()?;
            let count = if depth <= 1 { 1 } else { perft(&child, !color, depth - 1) };
            Some((mv.to_string(), count))
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
