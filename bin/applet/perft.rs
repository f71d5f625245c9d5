use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::{Dimensions, Player, Position};
use std::time::Instant;
use tracing::{info, instrument};

/// Counts the leaves of the tree of legal moves.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Perft {
    /// The board dimensions of the starting position, in RON notation.
    #[clap(short, long, default_value_t)]
    dimensions: Dimensions,

    /// The position to expand instead of the starting position.
    #[clap(short, long, conflicts_with = "dimensions")]
    position: Option<Position>,

    /// The player who moves first, either `top` or `bottom`.
    #[clap(short, long, default_value_t = Player::Bottom)]
    first: Player,

    /// How many plies deep to expand.
    #[clap(default_value_t = 3)]
    depth: u8,
}

impl Default for Perft {
    fn default() -> Self {
        Perft {
            dimensions: Dimensions::default(),
            position: None,
            first: Player::Bottom,
            depth: 3,
        }
    }
}

impl Perft {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let pos = self.position.unwrap_or_else(|| Position::new(self.dimensions));

        for depth in 1..=self.depth {
            let timer = Instant::now();
            let nodes = pos.perft(self.first, depth);
            let elapsed = timer.elapsed();
            let nps = nodes as f64 / elapsed.as_secs_f64().max(f64::EPSILON);
            info!(depth, nodes, ?elapsed, nps = nps.round());
        }

        Ok(())
    }
}
