use anyhow::{Context, Result};
use tracing::info;

use reverso_core::{Board, Color};
use reverso_engine::{MctsSearcher, SearchConfig};

/// Engine-versus-engine game from the starting position.
///
/// Usage: `reverso [ITERATIONS]` (default 500 per move).
fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = match std::env::args().nth(1) {
        Some(arg) => {
            let iterations = arg
                .parse::<u32>()
                .with_context(|| format!("invalid iteration count: {arg:?}"))?;
            SearchConfig::with_iterations(iterations)
        }
        None => SearchConfig::default(),
    };
    info!(iterations = config.iterations, "reverso starting");

    let searcher = MctsSearcher::new(config);
    let mut board = Board::starting_position();
    let mut color = Color::Black;

    while !board.is_terminal() {
        let result = searcher.search(&board, color, |_| {});
        match result.best_move {
            Some(mv) => {
                let flips = board
                    .apply_move(color, mv)
                    .with_context(|| format!("engine chose illegal move {mv} for {color}"))?;
                info!(%color, %mv, flipped = flips.count(), "move");
            }
            None => info!(%color, "pass"),
        }
        color = !color;
    }

    let score = board.score();
    println!("{}", board.pretty());
    match board.winner() {
        Some(winner) => println!("{winner} wins {}:{}", score[winner], score[!winner]),
        None => println!("draw {}:{}", score.black, score.white),
    }
    Ok(())
}
