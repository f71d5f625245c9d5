use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::{Dimensions, Player, Position};
use tracing::{info, instrument};

/// Lists the legal moves of a player.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Moves {
    /// The board dimensions of the starting position, in RON notation.
    #[clap(short, long, default_value_t)]
    dimensions: Dimensions,

    /// The position to inspect instead of the starting position.
    #[clap(short, long, conflicts_with = "dimensions")]
    position: Option<Position>,

    /// The player to move, either `top` or `bottom`.
    player: Player,
}

impl Moves {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let pos = self.position.unwrap_or_else(|| Position::new(self.dimensions));

        if let Some(outcome) = pos.outcome() {
            info!(%pos, %outcome, "the game is over");
        }

        let mut count = 0;
        for next in pos.successors(self.player) {
            if let Some(m) = next.last_move() {
                let crosses_canal = m.crosses_canal();
                info!(%m, crosses_canal, score = next.score(), position = %next);
            }

            count += 1;
        }

        info!(player = %self.player, count);

        Ok(())
    }
}
