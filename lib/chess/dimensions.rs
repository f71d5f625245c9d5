use derive_more::{Display, Error, From};
use proptest::strategy::Strategy;
use serde::Deserialize;
use std::{ops::RangeInclusive, str::FromStr};
use test_strategy::Arbitrary;

/// The reason why a board geometry was rejected.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error)]
#[display(
    fmt = "a {_0}x{_1} board cannot hold the starting layout, \
           width must lie in [3, 16] and height must be even and lie in [6, 16]"
)]
pub struct InvalidDimensions(#[error(not(source))] pub u8, #[error(not(source))] pub u8);

/// The reason why parsing [`Dimensions`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse board dimensions")]
pub struct ParseDimensionsError(ron::de::SpannedError);

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Geometry {
    #[serde(default = "Dimensions::default_width")]
    width: u8,
    #[serde(default = "Dimensions::default_height")]
    height: u8,
}

/// The size of the board.
///
/// Each half of the board must fit the 3x3 starting formation of its player.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary, Deserialize)]
#[display(fmt = "(width: {width}, height: {height})")]
#[serde(try_from = "Geometry")]
pub struct Dimensions {
    #[strategy(Dimensions::WIDTH)]
    width: u8,
    #[strategy(Dimensions::HALF_HEIGHT.prop_map(|h| h * 2))]
    height: u8,
}

impl Dimensions {
    const WIDTH: RangeInclusive<u8> = 3..=16;
    const HALF_HEIGHT: RangeInclusive<u8> = 3..=8;

    fn default_width() -> u8 {
        4
    }

    fn default_height() -> u8 {
        8
    }

    /// Validates a board geometry.
    pub fn new(width: u8, height: u8) -> Result<Self, InvalidDimensions> {
        if Self::WIDTH.contains(&width)
            && height % 2 == 0
            && Self::HALF_HEIGHT.contains(&(height / 2))
        {
            Ok(Dimensions { width, height })
        } else {
            Err(InvalidDimensions(width, height))
        }
    }

    /// The number of columns.
    #[inline(always)]
    pub fn width(&self) -> u8 {
        self.width
    }

    /// The number of rows.
    #[inline(always)]
    pub fn height(&self) -> u8 {
        self.height
    }

    /// The number of cells.
    #[inline(always)]
    pub fn area(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Dimensions {
            width: Self::default_width(),
            height: Self::default_height(),
        }
    }
}

impl TryFrom<Geometry> for Dimensions {
    type Error = InvalidDimensions;

    fn try_from(g: Geometry) -> Result<Self, Self::Error> {
        Dimensions::new(g.width, g.height)
    }
}

impl FromStr for Dimensions {
    type Err = ParseDimensionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[test]
    fn default_board_is_four_by_eight() {
        assert_eq!(Dimensions::default(), Dimensions::new(4, 8).unwrap());
    }

    #[proptest]
    fn parsing_printed_dimensions_is_an_identity(d: Dimensions) {
        assert_eq!(d.to_string().parse(), Ok(d));
    }

    #[proptest]
    fn dimensions_are_valid(d: Dimensions) {
        assert_eq!(Dimensions::new(d.width(), d.height()), Ok(d));
    }

    #[proptest]
    fn odd_height_is_rejected(#[strategy(3u8..=16)] w: u8, #[filter(#h % 2 == 1)] h: u8) {
        assert_eq!(Dimensions::new(w, h), Err(InvalidDimensions(w, h)));
    }

    #[proptest]
    fn narrow_board_is_rejected(#[strategy(0u8..3)] w: u8) {
        assert_eq!(Dimensions::new(w, 8), Err(InvalidDimensions(w, 8)));
    }

    #[test]
    fn transposed_board_is_too_short() {
        assert_eq!(Dimensions::new(8, 4), Err(InvalidDimensions(8, 4)));
    }

    #[test]
    fn missing_fields_take_default_values() {
        assert_eq!(
            "(height: 10)".parse::<Dimensions>().ok(),
            Dimensions::new(4, 10).ok()
        );
    }

    #[test]
    fn parsing_invalid_dimensions_fails() {
        assert!("(width: 4, height: 7)".parse::<Dimensions>().is_err());
        assert!("(width: 4, depth: 8)".parse::<Dimensions>().is_err());
    }

    #[proptest]
    fn area_is_width_times_height(d: Dimensions) {
        assert_eq!(d.area(), d.width() as usize * d.height() as usize);
    }
}
