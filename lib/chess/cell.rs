use crate::chess::Rank;

/// The contents of a cell, as seen by a query that may step past the edges of the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Cell {
    /// The coordinates lie outside the board.
    OutOfBounds,
    Empty,
    Occupied(Rank),
}

impl Cell {
    /// The [`Rank`] of the piece in this cell, if any.
    #[inline(always)]
    pub fn rank(&self) -> Option<Rank> {
        match *self {
            Cell::Occupied(r) => Some(r),
            _ => None,
        }
    }

    /// Whether this cell is on the board.
    #[inline(always)]
    pub fn is_on_board(&self) -> bool {
        *self != Cell::OutOfBounds
    }
}

impl From<Rank> for Cell {
    #[inline(always)]
    fn from(r: Rank) -> Self {
        Cell::Occupied(r)
    }
}

impl From<Option<Rank>> for Cell {
    #[inline(always)]
    fn from(r: Option<Rank>) -> Self {
        r.map_or(Cell::Empty, Cell::Occupied)
    }
}
