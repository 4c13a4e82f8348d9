//! Monte Carlo Tree Search over Reversi positions.

pub mod node;
pub mod progress;
pub mod rollout;
pub mod tree;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use reverso_core::{Board, Color, Square};

use crate::config::SearchConfig;
use progress::SearchProgress;
use rollout::Rollouts;
use tree::SearchTree;

/// Statistics of one root child after a search.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildStats {
    /// Move leading to the child.
    pub mv: Square,
    /// Rollouts through the child.
    pub visits: u32,
    /// Signed reward accumulator.
    pub reward: f64,
    /// UCB value used for the final choice.
    pub ucb: f64,
}

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Root child with the highest UCB, or `None` when the side to move has no legal move.
    pub best_move: Option<Square>,
    /// Configured iteration budget.
    pub iterations: u32,
    /// Rollouts actually played.
    pub rollouts: u32,
    /// Visit count of the root after the last backpropagation.
    pub root_visits: u32,
    /// Nodes allocated in the tree.
    pub tree_size: usize,
    /// Per-move statistics in move-generation order.
    pub children: Vec<ChildStats>,
}

/// Fixed-budget MCTS searcher.
///
/// Each search builds a fresh tree from a copy of the given board, runs
/// `iterations` select/expand/simulate/backpropagate cycles on the calling
/// thread, and discards the tree before returning.
#[derive(Debug, Clone, Default)]
pub struct MctsSearcher {
    config: SearchConfig,
}

impl MctsSearcher {
    /// Create a searcher with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Search for `to_move`'s best move, drawing randomness from the configured seed or OS entropy.
    ///
    /// `on_progress` receives non-decreasing fractions in `[0, 1]` every
    /// `progress_interval` iterations and a final 1.0.
    pub fn search<F>(&self, board: &Board, to_move: Color, on_progress: F) -> SearchResult
    where
        F: FnMut(f64),
    {
        match self.config.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                self.search_with_rng(board, to_move, &mut rng, on_progress)
            }
            None => self.search_with_rng(board, to_move, &mut rand::rng(), on_progress),
        }
    }

    /// Like [`search`](Self::search), publishing progress into a shared handle.
    pub fn search_tracked(&self, board: &Board, to_move: Color, progress: &SearchProgress) -> SearchResult {
        progress.start(self.config.iterations);
        let mut sink = progress.sink();
        self.search(board, to_move, &mut sink)
    }

    /// Run the search with an injected random source.
    pub fn search_with_rng<R, F>(
        &self,
        board: &Board,
        to_move: Color,
        rng: &mut R,
        mut on_progress: F,
    ) -> SearchResult
    where
        R: Rng + ?Sized,
        F: FnMut(f64),
    {
        let ai_color = to_move;
        let exploration = self.config.exploration;
        let total = self.config.iterations;
        let every = self.config.report_every();

        // The root belongs to the side that just moved, so its children are `to_move`'s moves.
        let mut tree = SearchTree::new(*board, !to_move);
        let root = tree.root();
        tree.expand_children(root);

        let mut rollouts = Rollouts::new();
        for i in 0..total {
            let selected = tree.select(exploration);
            let leaf = tree.expand(selected);
            let reward = {
                let node = tree.get(leaf);
                rollouts.run(&node.board, node.color, ai_color, rng)
            };
            tree.backpropagate(leaf, reward, ai_color);

            if i % every == 0 {
                on_progress(progress::fraction(i + 1, total));
            }
        }
        on_progress(1.0);

        let root_node = tree.get(root);
        let children: Vec<ChildStats> = root_node
            .children
            .iter()
            .filter_map(|&id| {
                let child = tree.get(id);
                Some(ChildStats {
                    mv: child.action?,
                    visits: child.visits,
                    reward: child.reward,
                    ucb: child.ucb(root_node.visits, exploration),
                })
            })
            .collect();

        for stats in &children {
            debug!(mv = %stats.mv, reward = stats.reward, visits = stats.visits, "root child");
        }

        let best_move = tree
            .best_child(root, exploration)
            .and_then(|id| tree.get(id).action);

        debug!(
            color = %to_move,
            iterations = total,
            tree_size = tree.len(),
            best = ?best_move,
            "search finished"
        );

        SearchResult {
            best_move,
            iterations: total,
            rollouts: rollouts.played(),
            root_visits: root_node.visits,
            tree_size: tree.len(),
            children,
        }
    }
}

/// Pick a move for `to_move` with a fresh `iterations`-budget search.
///
/// The board is copied; the caller's value is never modified. Returns
/// `None` when `to_move` has no legal move. `progress_sink`, if given,
/// receives non-decreasing values in `[0, 1]` ending with 1.0.
pub fn compute_move(
    board: &Board,
    to_move: Color,
    iterations: u32,
    progress_sink: Option<&mut dyn FnMut(f64)>,
) -> Option<Square> {
    let searcher = MctsSearcher::new(SearchConfig::with_iterations(iterations));
    let result = match progress_sink {
        Some(sink) => searcher.search(board, to_move, sink),
        None => searcher.search(board, to_move, |_| {}),
    };
    result.best_move
}
