//! Search tree nodes.

use reverso_core::{Board, Color, Square};

/// Index of a node in the [`SearchTree`](super::tree::SearchTree) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Position in the arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One (board, color) pair reached by a specific action from its parent.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Rollouts that passed through this node.
    pub visits: u32,
    /// Signed reward accumulator (+1 per AI win when this node is the AI's color, -1 otherwise).
    pub reward: f64,
    /// Position after `action` was played.
    pub board: Board,
    /// Color attributed to this node; its children are moves of the opposite color.
    pub color: Color,
    /// Move that produced this node. `None` for the root.
    pub action: Option<Square>,
    /// Children in move-generation order; empty until expanded.
    pub children: Vec<NodeId>,
    /// Non-owning back link used by backpropagation.
    pub parent: Option<NodeId>,
}

impl SearchNode {
    /// Create the root node.
    pub fn root(board: Board, color: Color) -> Self {
        Self {
            visits: 0,
            reward: 0.0,
            board,
            color,
            action: None,
            children: Vec::new(),
            parent: None,
        }
    }

    /// Create a child reached by `action`.
    pub fn child(parent: NodeId, board: Board, color: Color, action: Square) -> Self {
        Self {
            visits: 0,
            reward: 0.0,
            board,
            color,
            action: Some(action),
            children: Vec::new(),
            parent: Some(parent),
        }
    }

    /// Upper confidence bound given the parent's visit count.
    ///
    /// Unvisited nodes score `+inf`, so `ln(parent_visits)` is only taken
    /// once the parent has been visited at least once.
    pub fn ucb(&self, parent_visits: u32, exploration: f64) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }
        let n = f64::from(self.visits);
        let exploit = self.reward / n;
        let explore = (exploration * f64::from(parent_visits).ln() / n).sqrt();
        exploit + explore
    }

    /// Return `true` if the node has children and all of them were visited.
    pub fn is_fully_expanded(&self, visits_of: impl Fn(NodeId) -> u32) -> bool {
        !self.children.is_empty() && self.children.iter().all(|&c| visits_of(c) > 0)
    }
}
