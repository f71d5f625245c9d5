use crate::chess::Square;
use derive_more::{Constructor, Display};

/// An inclusive rectangle of cells, such as the half of the board a player controls.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
#[display(fmt = "[{x1},{y1}..={x2},{y2}]")]
pub struct Area {
    pub x1: u8,
    pub y1: u8,
    pub x2: u8,
    pub y2: u8,
}

impl Area {
    /// Whether the coordinates lie within this area.
    #[inline(always)]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (i32::from(self.x1)..=i32::from(self.x2)).contains(&x)
            && (i32::from(self.y1)..=i32::from(self.y2)).contains(&y)
    }

    /// Whether the [`Square`] lies within this area.
    #[inline(always)]
    pub fn contains_square(&self, sq: Square) -> bool {
        let (x, y) = sq.coords();
        self.contains(x, y)
    }

    /// An iterator over the squares in this area, row by row.
    pub fn squares(self) -> impl Iterator<Item = Square> {
        (self.y1..=self.y2).flat_map(move |y| (self.x1..=self.x2).map(move |x| Square::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn area_contains_its_squares(
        #[strategy(0u8..8)] x1: u8,
        #[strategy(0u8..8)] y1: u8,
        #[strategy(#x1..8)] x2: u8,
        #[strategy(#y1..8)] y2: u8,
    ) {
        let area = Area::new(x1, y1, x2, y2);
        let squares: Vec<_> = area.squares().collect();
        assert_eq!(squares.len(), (x2 - x1 + 1) as usize * (y2 - y1 + 1) as usize);
        assert!(squares.into_iter().all(|sq| area.contains_square(sq)));
    }

    #[proptest]
    fn area_excludes_coordinates_past_its_edges(
        #[strategy(0u8..8)] x1: u8,
        #[strategy(0u8..8)] y1: u8,
        #[strategy(#x1..8)] x2: u8,
        #[strategy(#y1..8)] y2: u8,
    ) {
        let area = Area::new(x1, y1, x2, y2);
        assert!(!area.contains(i32::from(x1) - 1, i32::from(y1)));
        assert!(!area.contains(i32::from(x1), i32::from(y1) - 1));
        assert!(!area.contains(i32::from(x2) + 1, i32::from(y2)));
        assert!(!area.contains(i32::from(x2), i32::from(y2) + 1));
    }
}
