use derive_more::{Display, Error};
use std::fmt::{self, Formatter, Write};
use std::str::FromStr;
use test_strategy::Arbitrary;

/// The type of a Martian Chess piece.
///
/// Discriminants double as point values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary)]
#[repr(u8)]
pub enum Rank {
    Pawn = 1,
    Drone = 2,
    Queen = 3,
}

impl Rank {
    /// All ranks, from least to most valuable.
    pub const ALL: [Rank; 3] = [Rank::Pawn, Rank::Drone, Rank::Queen];

    /// How many points capturing a piece of this rank is worth.
    #[inline(always)]
    pub const fn value(self) -> u32 {
        self as u32
    }

    /// The field promotion that results from moving a piece of this rank onto a friendly `other`.
    #[inline(always)]
    pub const fn merge(self, other: Rank) -> Option<Rank> {
        match (self, other) {
            (Rank::Pawn, Rank::Drone) | (Rank::Drone, Rank::Pawn) => Some(Rank::Queen),
            (Rank::Pawn, Rank::Pawn) => Some(Rank::Drone),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Pawn => f.write_char('p'),
            Rank::Drone => f.write_char('d'),
            Rank::Queen => f.write_char('q'),
        }
    }
}

/// The reason why parsing [`Rank`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse rank")]
pub struct ParseRankError;

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "p" => Ok(Rank::Pawn),
            "d" => Ok(Rank::Drone),
            "q" => Ok(Rank::Queen),
            _ => Err(ParseRankError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;
    use test_strategy::proptest;

    #[test]
    fn rank_guarantees_zero_value_optimization() {
        assert_eq!(size_of::<Option<Rank>>(), size_of::<Rank>());
    }

    #[test]
    fn ranks_are_worth_one_two_and_three_points() {
        assert_eq!(Rank::ALL.map(Rank::value), [1, 2, 3]);
    }

    #[test]
    fn pawns_merge_into_drone() {
        assert_eq!(Rank::Pawn.merge(Rank::Pawn), Some(Rank::Drone));
    }

    #[test]
    fn pawn_and_drone_merge_into_queen_in_either_order() {
        assert_eq!(Rank::Pawn.merge(Rank::Drone), Some(Rank::Queen));
        assert_eq!(Rank::Drone.merge(Rank::Pawn), Some(Rank::Queen));
    }

    #[proptest]
    fn queens_never_merge(r: Rank) {
        assert_eq!(Rank::Queen.merge(r), None);
        assert_eq!(r.merge(Rank::Queen), None);
    }

    #[test]
    fn drones_do_not_merge_with_each_other() {
        assert_eq!(Rank::Drone.merge(Rank::Drone), None);
    }

    #[proptest]
    fn merging_preserves_point_value(a: Rank, b: Rank) {
        if let Some(r) = a.merge(b) {
            assert_eq!(r.value(), a.value() + b.value());
        }
    }

    #[proptest]
    fn parsing_printed_rank_is_an_identity(r: Rank) {
        assert_eq!(r.to_string().parse(), Ok(r));
    }

    #[proptest]
    fn parsing_rank_fails_if_not_one_of_lowercase_pdq(
        #[filter(!['p', 'd', 'q'].contains(&#c))] c: char,
    ) {
        assert_eq!(c.to_string().parse::<Rank>(), Err(ParseRankError));
    }

    #[proptest]
    fn parsing_rank_fails_if_length_not_one(#[filter(#s.chars().count() != 1)] s: String) {
        assert_eq!(s.parse::<Rank>(), Err(ParseRankError));
    }
}
