use derive_more::{Constructor, Display, Error};
use std::str::FromStr;
use test_strategy::Arbitrary;

/// A cell coordinate on the board, zero-based from the top left corner.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Constructor, Arbitrary)]
#[display(fmt = "{x},{y}")]
pub struct Square {
    #[strategy(0u8..16)]
    x: u8,
    #[strategy(0u8..16)]
    y: u8,
}

impl Square {
    /// The column.
    #[inline(always)]
    pub fn x(&self) -> u8 {
        self.x
    }

    /// The row.
    #[inline(always)]
    pub fn y(&self) -> u8 {
        self.y
    }

    /// The signed coordinates, convenient for stepping across the edges.
    #[inline(always)]
    pub fn coords(&self) -> (i32, i32) {
        (self.x.into(), self.y.into())
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse square, expected `x,y`")]
pub struct ParseSquareError;

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s.split_once(',').ok_or(ParseSquareError)?;
        let x = x.trim().parse().map_err(|_| ParseSquareError)?;
        let y = y.trim().parse().map_err(|_| ParseSquareError)?;
        Ok(Square::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn parsing_printed_square_is_an_identity(s: Square) {
        assert_eq!(s.to_string().parse(), Ok(s));
    }

    #[proptest]
    fn parsing_square_fails_without_separator(#[filter(!#s.contains(','))] s: String) {
        assert_eq!(s.parse::<Square>(), Err(ParseSquareError));
    }

    #[test]
    fn parsing_square_tolerates_whitespace() {
        assert_eq!(" 1, 2".parse(), Ok(Square::new(1, 2)));
    }

    #[test]
    fn parsing_square_fails_on_negative_coordinates() {
        assert_eq!("-1,2".parse::<Square>(), Err(ParseSquareError));
    }

    #[proptest]
    fn square_has_coordinates(s: Square) {
        assert_eq!(s.coords(), (s.x().into(), s.y().into()));
    }
}
