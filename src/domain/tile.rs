/// Tile is the record stored for every board cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Tile {
    /// A clearable obstacle; does not block movement
    pub has_rock: bool,
    pub has_treasure: bool,
    /// Walkable floor. Without it the cell is a pit the cursor never enters
    pub has_base: bool,
    /// Generation scratch: the thinning pass may still remove this cell
    pub can_del: bool,
}

impl Tile {
    /// Empty floor, still removable
    pub const PLAIN: Tile = Tile {
        has_rock: false,
        has_treasure: false,
        has_base: true,
        can_del: true,
    };

    /// Floor covered by a rock, still removable
    pub const ROCK: Tile = Tile {
        has_rock: true,
        ..Tile::PLAIN
    };

    /// The buried treasure: under a rock, never removed
    pub const TREASURE: Tile = Tile {
        has_rock: true,
        has_treasure: true,
        has_base: true,
        can_del: false,
    };

    /// The safe starting cell
    pub const START: Tile = Tile {
        has_rock: false,
        has_treasure: false,
        has_base: true,
        can_del: false,
    };

    /// A removed cell
    pub const PIT: Tile = Tile {
        has_rock: false,
        has_treasure: false,
        has_base: false,
        can_del: false,
    };

    /// ASCII glyph used by the board picture
    pub const fn glyph(self) -> char {
        match self {
            Tile { has_base: false, .. } => ' ',
            Tile { has_treasure: true, .. } => '$',
            Tile { has_rock: true, .. } => '#',
            _ => '.',
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Tile::PLAIN
    }
}
