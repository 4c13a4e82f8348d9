//! Arena-allocated search tree.
//!
//! Nodes live in one `Vec` and refer to each other by [`NodeId`]. Children
//! are owned top-down through the arena; parent links are plain indices.
//! The whole tree is dropped at once when a search returns.

use reverso_core::{Board, Color};

use super::node::{NodeId, SearchNode};

/// MCTS tree with arena-based node storage.
#[derive(Debug)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
    root: NodeId,
}

impl SearchTree {
    /// Create a tree holding only the root.
    pub fn new(board: Board, root_color: Color) -> Self {
        Self {
            nodes: vec![SearchNode::root(board, root_color)],
            root: NodeId(0),
        }
    }

    /// Root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }

    /// Get a mutable reference to a node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.index()]
    }

    /// Total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false` after construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn allocate(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Child of `id` with the highest UCB, first one winning ties.
    pub fn best_child(&self, id: NodeId, exploration: f64) -> Option<NodeId> {
        let node = self.get(id);
        let mut best = None;
        let mut best_ucb = f64::NEG_INFINITY;
        for &child in &node.children {
            let ucb = self.get(child).ucb(node.visits, exploration);
            if ucb > best_ucb {
                best_ucb = ucb;
                best = Some(child);
            }
        }
        best
    }

    /// Walk down from the root to the node to simulate next.
    ///
    /// A leaf is returned as is. A node with an unvisited child yields the
    /// first such child. A fully expanded node descends into its best-UCB child.
    pub fn select(&self, exploration: f64) -> NodeId {
        let mut id = self.root;
        loop {
            let node = self.get(id);
            if node.children.is_empty() {
                return id;
            }
            if !node.is_fully_expanded(|c| self.get(c).visits) {
                return node
                    .children
                    .iter()
                    .copied()
                    .find(|&c| self.get(c).visits == 0)
                    .unwrap_or(id);
            }
            match self.best_child(id, exploration) {
                Some(next) => id = next,
                None => return id,
            }
        }
    }

    /// Expand `id` if it has already been simulated.
    ///
    /// Unvisited nodes are returned unchanged. Otherwise one child per legal
    /// move of the opposite color is created and the first is returned;
    /// with no legal moves the node itself is returned.
    pub fn expand(&mut self, id: NodeId) -> NodeId {
        if self.get(id).visits == 0 {
            return id;
        }
        self.expand_children(id).unwrap_or(id)
    }

    /// Materialize the children of `id`, returning the first one.
    ///
    /// Does nothing and returns the existing first child if `id` was already expanded.
    pub fn expand_children(&mut self, id: NodeId) -> Option<NodeId> {
        if let Some(&first) = self.get(id).children.first() {
            return Some(first);
        }

        let (board, mover) = {
            let node = self.get(id);
            (node.board, !node.color)
        };

        let mut children = Vec::new();
        for &mv in &board.legal_moves(mover) {
            let mut next = board;
            if next.apply_move(mover, mv).is_ok() {
                children.push(self.allocate(SearchNode::child(id, next, mover, mv)));
            }
        }

        let first = children.first().copied();
        self.get_mut(id).children = children;
        first
    }

    /// Propagate one rollout result from `leaf` to the root, inclusive.
    ///
    /// Every node on the path gains one visit. Nodes of `ai_color` add
    /// `reward`; nodes of the other color subtract it.
    pub fn backpropagate(&mut self, leaf: NodeId, reward: f64, ai_color: Color) {
        let mut current = Some(leaf);
        while let Some(id) = current {
            let node = self.get_mut(id);
            node.visits += 1;
            if node.color == ai_color {
                node.reward += reward;
            } else {
                node.reward -= reward;
            }
            current = node.parent;
        }
    }
}
