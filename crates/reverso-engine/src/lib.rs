//! Monte Carlo Tree Search engine for reverso.

pub mod config;
pub mod search;

pub use config::SearchConfig;
pub use search::node::{NodeId, SearchNode};
pub use search::progress::SearchProgress;
pub use search::tree::SearchTree;
pub use search::{ChildStats, MctsSearcher, SearchResult, compute_move};
