use crate::chess::{Player, Square};
use derive_more::{Constructor, Display};

/// A move as played by one of the players.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
#[display(fmt = "{player} {whence}-{whither}")]
pub struct Move {
    player: Player,
    whence: Square,
    whither: Square,
    crosses_canal: bool,
}

impl Move {
    /// The [`Player`] who moved.
    #[inline(always)]
    pub fn player(&self) -> Player {
        self.player
    }

    /// The source [`Square`].
    #[inline(always)]
    pub fn whence(&self) -> Square {
        self.whence
    }

    /// The destination [`Square`].
    #[inline(always)]
    pub fn whither(&self) -> Square {
        self.whither
    }

    /// Whether the piece left its player's control area.
    #[inline(always)]
    pub fn crosses_canal(&self) -> bool {
        self.crosses_canal
    }

    /// Whether moving from `whence` to `whither` would take this move back.
    #[inline(always)]
    pub fn is_reversed_by(&self, whence: Square, whither: Square) -> bool {
        self.whither == whence && self.whence == whither
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn move_is_reversed_by_swapping_its_ends(p: Player, a: Square, b: Square, c: bool) {
        assert!(Move::new(p, a, b, c).is_reversed_by(b, a));
    }

    #[proptest]
    fn move_is_not_reversed_by_repeating_it(p: Player, a: Square, #[filter(#a != #b)] b: Square) {
        assert!(!Move::new(p, a, b, false).is_reversed_by(a, b));
    }

    #[test]
    fn move_is_printed_with_player_and_both_ends() {
        let m = Move::new(Player::Top, Square::new(1, 2), Square::new(2, 3), false);
        assert_eq!(m.to_string(), "top 1,2-2,3");
    }
}
