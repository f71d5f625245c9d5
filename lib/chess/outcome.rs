use crate::chess::Player;
use derive_more::Display;
use test_strategy::Arbitrary;

/// One of the possible outcomes of a game of Martian Chess.
///
/// The game ends as soon as one control area is emptied, and the player with the higher score wins.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary)]
pub enum Outcome {
    #[display(fmt = "victory by the {_0} player")]
    Victory(Player),

    #[display(fmt = "draw")]
    Draw,
}

impl Outcome {
    /// Decides the outcome of a finished game from the final scores.
    pub fn from_scores(top: u32, bottom: u32) -> Self {
        use std::cmp::Ordering::*;
        match top.cmp(&bottom) {
            Greater => Outcome::Victory(Player::Top),
            Less => Outcome::Victory(Player::Bottom),
            Equal => Outcome::Draw,
        }
    }

    /// Whether neither side has won.
    pub fn is_draw(&self) -> bool {
        *self == Outcome::Draw
    }

    /// The winning side, if any.
    pub fn winner(&self) -> Option<Player> {
        match *self {
            Outcome::Victory(p) => Some(p),
            Outcome::Draw => None,
        }
    }
}
