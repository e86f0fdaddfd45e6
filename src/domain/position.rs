use crate::error::{Error, Result};

/// Side length of the square board
pub const BOARD_SIZE: usize = 11;

/// Number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// The guaranteed-safe starting cell
pub const CENTER: Position = Position { x: 5, y: 5 };

/// Direction of a single cursor step. World y points up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit offset (dx, dy) of this direction
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A cell coordinate that is always inside the board.
///
/// Out-of-range coordinates are rejected at construction, so every
/// `Position` can index a [`TileBoard`](super::TileBoard) without checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: usize,
    y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Result<Self> {
        if x < BOARD_SIZE && y < BOARD_SIZE {
            Ok(Self { x, y })
        } else {
            Err(Error::OutOfBounds { x, y })
        }
    }

    /// Position for a row-major index `x * BOARD_SIZE + y`.
    /// Indices past the board wrap, callers keep them below `CELL_COUNT`.
    pub const fn from_index(index: usize) -> Self {
        let index = index % CELL_COUNT;
        Self {
            x: index / BOARD_SIZE,
            y: index % BOARD_SIZE,
        }
    }

    pub const fn index(self) -> usize {
        self.x * BOARD_SIZE + self.y
    }

    pub const fn x(self) -> usize {
        self.x
    }

    pub const fn y(self) -> usize {
        self.y
    }

    /// Offset by (dx, dy), or `None` if that leaves the board
    pub fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Self::new(x, y).ok()
    }

    /// One step in `direction`, or `None` at the board edge
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.offset();
        self.offset(dx, dy)
    }

    /// The 3x3 block around this cell (itself included), clipped to the board
    pub fn neighborhood(self) -> impl Iterator<Item = Position> {
        (-1..=1)
            .flat_map(|dx| (-1..=1).map(move |dy| (dx, dy)))
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// Whether `other` is a distinct cell touching this one, diagonals included
    pub fn is_adjacent(self, other: Position) -> bool {
        self != other && self.x.abs_diff(other.x) <= 1 && self.y.abs_diff(other.y) <= 1
    }

    /// Every cell in row-major index order
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).map(Self::from_index)
    }
}
