use crate::chess::{Cell, Rank, Square};

const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const OMNIDIRECTIONAL: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// The shape of the moves of a [`Rank`].
///
/// Pieces slide along each direction until they reach the edge of the board, the first occupied
/// cell (inclusive), or the reach of their rank, whichever comes first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Movement {
    directions: &'static [(i8, i8)],
    reach: Option<u8>,
}

static MOVEMENTS: [Movement; 3] = [
    Movement {
        directions: &DIAGONAL,
        reach: Some(1),
    },
    Movement {
        directions: &ORTHOGONAL,
        reach: Some(2),
    },
    Movement {
        directions: &OMNIDIRECTIONAL,
        reach: None,
    },
];

impl Movement {
    /// The [`Movement`] of pieces of a given [`Rank`].
    #[inline(always)]
    pub fn of(r: Rank) -> &'static Movement {
        &MOVEMENTS[r as usize - 1]
    }

    /// The unit steps a piece may slide along.
    #[inline(always)]
    pub fn directions(&self) -> &'static [(i8, i8)] {
        self.directions
    }

    /// How many cells a piece may slide along each direction, unbounded if `None`.
    #[inline(always)]
    pub fn reach(&self) -> Option<u8> {
        self.reach
    }

    /// Candidate destinations from `origin`, before any ownership or history rules.
    ///
    /// The `lookup` function is expected to return [`Cell::OutOfBounds`] past the edges.
    pub fn candidates<F>(&self, origin: Square, lookup: F) -> Vec<Square>
    where
        F: Fn(i32, i32) -> Cell,
    {
        let (x, y) = origin.coords();
        let mut candidates = Vec::new();

        for &(dx, dy) in self.directions {
            let (mut cx, mut cy) = (x, y);
            let mut steps = 0;

            while self.reach.map_or(true, |r| steps < r) {
                cx += i32::from(dx);
                cy += i32::from(dy);
                steps += 1;

                let cell = lookup(cx, cy);
                match (u8::try_from(cx), u8::try_from(cy)) {
                    (Ok(sx), Ok(sy)) if cell.is_on_board() => {
                        candidates.push(Square::new(sx, sy))
                    }
                    _ => break,
                }

                if cell != Cell::Empty {
                    break;
                }
            }
        }

        candidates
    }
}
