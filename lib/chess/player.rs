use derive_more::{Display, Error};
use std::{ops::Not, str::FromStr};
use test_strategy::Arbitrary;

/// One of the two sides of a game of Martian Chess.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary)]
#[repr(u8)]
pub enum Player {
    #[display(fmt = "top")]
    Top,
    #[display(fmt = "bottom")]
    Bottom,
}

impl Player {
    /// Both players, in index order.
    pub const ALL: [Player; 2] = [Player::Top, Player::Bottom];
}

impl Not for Player {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Player::Top => Player::Bottom,
            Player::Bottom => Player::Top,
        }
    }
}

/// The reason why parsing [`Player`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse player, expected `top` or `bottom`")]
pub struct ParsePlayerError;

impl FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Player::Top),
            "bottom" => Ok(Player::Bottom),
            _ => Err(ParsePlayerError),
        }
    }
}
