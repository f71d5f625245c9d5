use crate::chess::{Area, Board, Cell, Dimensions, Move, Movement, Outcome, ParseBoardError};
use crate::chess::{Player, Rank, Square};
use derive_more::{Display, Error, From};
use proptest::sample::{Selector, SelectorStrategy};
use proptest::{prelude::*, strategy::Map};
use rayon::prelude::*;
use std::hash::{Hash, Hasher};
use std::ops::Range;
use std::str::FromStr;
use tracing::instrument;

/// Represents an illegal [`Move`] in a given [`Position`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error)]
#[display(fmt = "moving `{_1}-{_2}` is illegal for the {_0} player in this position")]
pub struct IllegalMove(
    #[error(not(source))] pub Player,
    #[error(not(source))] pub Square,
    #[error(not(source))] pub Square,
);

/// What happens to the piece that lands on a destination.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Landing {
    Vacant,
    Capture(Rank),
    Promotion(Rank),
}

/// The state of a game of Martian Chess.
///
/// Positions are compared by their board and scores only, the last move is not taken into account.
#[derive(Debug, Display, Default, Clone)]
#[display(fmt = "{} {} {}", "self.board", "self.scores[0]", "self.scores[1]")]
pub struct Position {
    board: Board,
    scores: [u32; 2],
    last_move: Option<Move>,
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board && self.scores == other.scores
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.board.hash(state);
        self.scores.hash(state);
    }
}

impl Arbitrary for Position {
    type Parameters = ();
    type Strategy = Map<
        (
            <Dimensions as Arbitrary>::Strategy,
            Range<usize>,
            SelectorStrategy,
        ),
        fn((Dimensions, usize, Selector)) -> Position,
    >;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (any::<Dimensions>(), 0..64, any::<Selector>()).prop_map(|(dimensions, moves, selector)| {
            let mut pos = Position::new(dimensions);
            let mut player = Player::Bottom;

            for _ in 0..moves {
                match selector.try_select(pos.moves(player)) {
                    None => break,
                    Some(m) => {
                        if pos.play(player, m.whence(), m.whither()).is_err() {
                            break;
                        }
                    }
                }

                player = !player;
            }

            pos
        })
    }
}

impl Position {
    /// The starting position on a board of the given [`Dimensions`].
    pub fn new(dimensions: Dimensions) -> Self {
        Position::from_board(Board::new(dimensions), 0, 0)
    }

    /// A position with an arbitrary arrangement of pieces and scores.
    pub fn from_board(board: Board, top_score: u32, bottom_score: u32) -> Self {
        Position {
            board,
            scores: [top_score, bottom_score],
            last_move: None,
        }
    }

    /// The [`Board`].
    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The board's [`Dimensions`].
    #[inline(always)]
    pub fn dimensions(&self) -> Dimensions {
        self.board.dimensions()
    }

    /// The number of columns.
    #[inline(always)]
    pub fn width(&self) -> u8 {
        self.board.width()
    }

    /// The number of rows.
    #[inline(always)]
    pub fn height(&self) -> u8 {
        self.board.height()
    }

    /// The points accumulated by a [`Player`] through captures.
    #[inline(always)]
    pub fn score_of(&self, player: Player) -> u32 {
        self.scores[player as usize]
    }

    /// The points accumulated by the top player.
    #[inline(always)]
    pub fn top_score(&self) -> u32 {
        self.score_of(Player::Top)
    }

    /// The points accumulated by the bottom player.
    #[inline(always)]
    pub fn bottom_score(&self) -> u32 {
        self.score_of(Player::Bottom)
    }

    /// The score difference, positive if the bottom player is ahead.
    #[inline(always)]
    pub fn score(&self) -> i32 {
        let bottom = i64::from(self.bottom_score());
        let top = i64::from(self.top_score());
        (bottom - top).clamp(i32::MIN.into(), i32::MAX.into()) as i32
    }

    /// The most recently played [`Move`], if any.
    #[inline(always)]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// The contents of the cell at the given coordinates, or [`Cell::OutOfBounds`].
    #[inline(always)]
    pub fn cell_at(&self, x: i32, y: i32) -> Cell {
        self.board.get(x, y)
    }

    /// The half of the board controlled by a [`Player`].
    #[inline(always)]
    pub fn control_area(&self, player: Player) -> Area {
        let (w, h) = (self.width(), self.height());
        match player {
            Player::Top => Area::new(0, 0, w - 1, h / 2 - 1),
            Player::Bottom => Area::new(0, h / 2, w - 1, h - 1),
        }
    }

    /// Whether the cell at the given coordinates is controlled by a [`Player`].
    #[inline(always)]
    pub fn owns_cell(&self, player: Player, x: i32, y: i32) -> bool {
        self.control_area(player).contains(x, y)
    }

    #[inline(always)]
    fn owns_square(&self, player: Player, sq: Square) -> bool {
        self.control_area(player).contains_square(sq)
    }

    /// An iterator over the pieces a [`Player`] controls, row by row.
    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Rank, Square)> + '_ {
        self.control_area(player)
            .squares()
            .filter_map(move |sq| Some((self.board[sq]?, sq)))
    }

    /// The total point value of the pieces a [`Player`] controls.
    pub fn material(&self, player: Player) -> u32 {
        self.pieces_of(player).map(|(r, _)| r.value()).sum()
    }

    /// The point value on the board plus both scores.
    ///
    /// Captures and promotions preserve this quantity.
    pub fn total(&self) -> u32 {
        self.board.material() + self.top_score() + self.bottom_score()
    }

    /// The [`Outcome`] of the game in case this position is final.
    ///
    /// The game is over as soon as either control area is empty.
    pub fn outcome(&self) -> Option<Outcome> {
        if Player::ALL.iter().any(|&p| self.pieces_of(p).next().is_none()) {
            Some(Outcome::from_scores(self.top_score(), self.bottom_score()))
        } else {
            None
        }
    }

    fn landing(
        &self,
        player: Player,
        rank: Rank,
        whence: Square,
        whither: Square,
    ) -> Option<Landing> {
        let (x, y) = whither.coords();
        match self.cell_at(x, y) {
            Cell::OutOfBounds => None,
            Cell::Empty => Some(Landing::Vacant),
            Cell::Occupied(r) if !self.owns_cell(player, x, y) => {
                self.score_of(player).checked_add(r.value())?;
                Some(Landing::Capture(r))
            }
            Cell::Occupied(r) if self.owns_square(player, whence) => {
                rank.merge(r).map(Landing::Promotion)
            }
            Cell::Occupied(_) => None,
        }
    }

    fn takes_back(&self, player: Player, whence: Square, whither: Square) -> bool {
        self.last_move
            .is_some_and(|m| m.player() == !player && m.is_reversed_by(whence, whither))
    }

    /// The squares a piece of the given [`Rank`] on `whence` may legally move to.
    ///
    /// Captures that would overflow the player's score are not legal.
    pub fn legal_destinations(&self, player: Player, rank: Rank, whence: Square) -> Vec<Square> {
        if !self.board.contains(whence) {
            return Vec::new();
        }

        Movement::of(rank)
            .candidates(whence, |x, y| self.cell_at(x, y))
            .into_iter()
            .filter(|&whither| !self.takes_back(player, whence, whither))
            .filter(|&whither| self.landing(player, rank, whence, whither).is_some())
            .collect()
    }

    /// An iterator over the legal [`Move`]s of a [`Player`].
    ///
    /// There are no legal moves once the opponent controls no pieces.
    pub fn moves(&self, player: Player) -> impl Iterator<Item = Move> + '_ {
        let over = self.pieces_of(!player).next().is_none();

        self.pieces_of(player)
            .filter(move |_| !over)
            .flat_map(move |(rank, whence)| {
                self.legal_destinations(player, rank, whence)
                    .into_iter()
                    .map(move |whither| {
                        let crosses_canal = !self.owns_square(player, whither);
                        Move::new(player, whence, whither, crosses_canal)
                    })
            })
    }

    /// An iterator over the positions reachable by one legal move of a [`Player`].
    ///
    /// Each successor is an independent copy of this position with the move applied.
    pub fn successors(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        self.moves(player).filter_map(move |m| {
            let mut next = self.clone();
            next.apply(player, m.whence(), m.whither()).ok()?;
            Some(next)
        })
    }

    /// Counts the leaves of the tree of legal moves `depth` plies deep, players alternating.
    ///
    /// Subtrees are expanded in parallel.
    pub fn perft(&self, player: Player, depth: u8) -> usize {
        match depth {
            0 => 1,
            1 => self.moves(player).count(),
            d => self
                .successors(player)
                .par_bridge()
                .map(|next| next.perft(!player, d - 1))
                .sum(),
        }
    }

    /// Play a [`Move`] if legal in this position.
    ///
    /// The position is left untouched if the move is illegal.
    #[instrument(level = "trace", skip(self), err)]
    pub fn play(
        &mut self,
        player: Player,
        whence: Square,
        whither: Square,
    ) -> Result<Move, IllegalMove> {
        let (x, y) = whence.coords();
        match self.cell_at(x, y) {
            Cell::Occupied(r) if self.owns_cell(player, x, y) => {
                if self.legal_destinations(player, r, whence).contains(&whither) {
                    self.apply(player, whence, whither)
                } else {
                    Err(IllegalMove(player, whence, whither))
                }
            }

            _ => Err(IllegalMove(player, whence, whither)),
        }
    }

    fn apply(
        &mut self,
        player: Player,
        whence: Square,
        whither: Square,
    ) -> Result<Move, IllegalMove> {
        let illegal = IllegalMove(player, whence, whither);
        let rank = self.board[whence].ok_or(illegal)?;

        let landed = match self.landing(player, rank, whence, whither).ok_or(illegal)? {
            Landing::Vacant => rank,
            Landing::Capture(r) => {
                let score = &mut self.scores[player as usize];
                *score = score.checked_add(r.value()).ok_or(illegal)?;
                rank
            }
            Landing::Promotion(r) => r,
        };

        self.board[whence] = None;
        self.board[whither] = Some(landed);

        let m = Move::new(player, whence, whither, !self.owns_square(player, whither));
        self.last_move = Some(m);
        Ok(m)
    }
}

/// The reason why parsing [`Position`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParsePositionError {
    #[display(fmt = "syntax error at the board field, {_0}")]
    #[from]
    InvalidBoard(ParseBoardError),
    #[display(fmt = "syntax error at the top score field")]
    InvalidTopScore,
    #[display(fmt = "syntax error at the bottom score field")]
    InvalidBottomScore,
    #[display(fmt = "expected exactly three fields, the board and both scores")]
    InvalidSyntax,
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use ParsePositionError::*;

        let fields: Vec<&str> = s.split_whitespace().collect();
        let &[board, top, bottom] = fields.as_slice() else {
            return Err(InvalidSyntax);
        };

        Ok(Position::from_board(
            board.parse()?,
            top.parse().map_err(|_| InvalidTopScore)?,
            bottom.parse().map_err(|_| InvalidBottomScore)?,
        ))
    }
}
