use crate::chess::{Cell, Dimensions, InvalidDimensions, Rank, Square};
use derive_more::{Display, Error, From};
use std::fmt::{self, Formatter, Write};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// The starting formation of the top player, as `(rank, x, y)`.
///
/// The bottom player's formation is its point mirror.
const FORMATION: [(Rank, u8, u8); 9] = [
    (Rank::Queen, 0, 0),
    (Rank::Queen, 1, 0),
    (Rank::Queen, 0, 1),
    (Rank::Drone, 2, 0),
    (Rank::Drone, 1, 1),
    (Rank::Drone, 0, 2),
    (Rank::Pawn, 1, 2),
    (Rank::Pawn, 2, 2),
    (Rank::Pawn, 2, 1),
];

/// The grid of cells.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    dimensions: Dimensions,
    cells: Vec<Option<Rank>>,
}

impl Default for Board {
    fn default() -> Self {
        Board::new(Dimensions::default())
    }
}

impl Board {
    /// A board with the standard starting layout.
    pub fn new(dimensions: Dimensions) -> Self {
        let mut board = Board::empty(dimensions);
        let (w, h) = (dimensions.width() - 1, dimensions.height() - 1);

        for (r, x, y) in FORMATION {
            board[Square::new(x, y)] = Some(r);
            board[Square::new(w - x, h - y)] = Some(r);
        }

        board
    }

    /// A board without any pieces.
    pub fn empty(dimensions: Dimensions) -> Self {
        Board {
            dimensions,
            cells: vec![None; dimensions.area()],
        }
    }

    /// This board's [`Dimensions`].
    #[inline(always)]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// The number of columns.
    #[inline(always)]
    pub fn width(&self) -> u8 {
        self.dimensions.width()
    }

    /// The number of rows.
    #[inline(always)]
    pub fn height(&self) -> u8 {
        self.dimensions.height()
    }

    #[inline(always)]
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        let (w, h) = (self.width().into(), self.height().into());
        (x < w && y < h).then_some(y * w + x)
    }

    /// The contents of the cell at the given coordinates, or [`Cell::OutOfBounds`].
    #[inline(always)]
    pub fn get(&self, x: i32, y: i32) -> Cell {
        match self.offset(x, y) {
            Some(i) => self.cells[i].into(),
            None => Cell::OutOfBounds,
        }
    }

    /// Whether the [`Square`] lies on this board.
    #[inline(always)]
    pub fn contains(&self, sq: Square) -> bool {
        sq.x() < self.width() && sq.y() < self.height()
    }

    /// An iterator over all pieces on the board, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, Square)> + '_ {
        let w = usize::from(self.width());
        self.cells.iter().enumerate().filter_map(move |(i, &r)| {
            let sq = Square::new(u8::try_from(i % w).ok()?, u8::try_from(i / w).ok()?);
            Some((r?, sq))
        })
    }

    /// The total point value of the pieces on the board.
    pub fn material(&self) -> u32 {
        self.iter().map(|(r, _)| r.value()).sum()
    }
}

/// Retrieves the [`Rank`] of the piece at a given [`Square`], if any.
///
/// Panics if the square lies outside the board.
impl Index<Square> for Board {
    type Output = Option<Rank>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        let (x, y) = sq.coords();
        match self.offset(x, y) {
            Some(i) => &self.cells[i],
            None => panic!("square `{sq}` lies outside the {} board", self.dimensions),
        }
    }
}

impl IndexMut<Square> for Board {
    #[inline(always)]
    fn index_mut(&mut self, sq: Square) -> &mut Self::Output {
        let (x, y) = sq.coords();
        match self.offset(x, y) {
            Some(i) => &mut self.cells[i],
            None => panic!("square `{sq}` lies outside the {} board", self.dimensions),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.width().into()).enumerate() {
            if i > 0 {
                f.write_char('/')?;
            }

            for cell in row {
                match cell {
                    None => f.write_char('.')?,
                    Some(r) => write!(f, "{r}")?,
                }
            }
        }

        Ok(())
    }
}

/// The reason why parsing [`Board`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseBoardError {
    #[display(fmt = "rows must all have the same length")]
    RaggedRows,
    #[display(fmt = "unexpected character `{_0}`, expected one of `.pdq`")]
    InvalidCell(#[error(not(source))] char),
    #[display(fmt = "{_0}")]
    #[from]
    InvalidDimensions(InvalidDimensions),
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.split('/').collect();
        let width = rows[0].chars().count();

        if rows.iter().any(|r| r.chars().count() != width) {
            return Err(ParseBoardError::RaggedRows);
        }

        let height = u8::try_from(rows.len()).unwrap_or(u8::MAX);
        let width = u8::try_from(width).unwrap_or(u8::MAX);
        let mut board = Board::empty(Dimensions::new(width, height)?);

        for (y, row) in (0..height).zip(&rows) {
            for (x, c) in (0..width).zip(row.chars()) {
                board[Square::new(x, y)] = match c {
                    '.' => None,
                    c => Some(
                        c.to_string()
                            .parse()
                            .map_err(|_| ParseBoardError::InvalidCell(c))?,
                    ),
                };
            }
        }

        Ok(board)
    }
}
