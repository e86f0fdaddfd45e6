use std::fmt;

use super::{BOARD_SIZE, CELL_COUNT, Position, Tile};

/// TileBoard owns the 11x11 grid of tiles.
/// Storage is a flat row-major vector indexed by `Position::index`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileBoard {
    tiles: Vec<Tile>,
}

impl TileBoard {
    /// Create a board where every cell is plain, removable floor
    pub fn new() -> Self {
        Self::filled(Tile::PLAIN)
    }

    /// Create a board with every cell set to `tile`
    pub fn filled(tile: Tile) -> Self {
        Self {
            tiles: vec![tile; CELL_COUNT],
        }
    }

    /// Tile at a position. Positions are always in range
    pub fn at(&self, pos: Position) -> Tile {
        self.tiles[pos.index()]
    }

    /// Tile at raw coordinates (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Tile> {
        Position::new(x, y).ok().map(|pos| self.at(pos))
    }

    /// Remove the rock at `pos`. Returns whether there was one to clear
    pub fn clear_rock(&mut self, pos: Position) -> bool {
        let tile = &mut self.tiles[pos.index()];
        let had_rock = tile.has_rock;
        tile.has_rock = false;
        had_rock
    }

    /// Overwrite a whole tile while building a board
    pub(crate) fn set(&mut self, pos: Position, tile: Tile) {
        self.tiles[pos.index()] = tile;
    }

    pub(crate) fn tile_mut(&mut self, pos: Position) -> &mut Tile {
        &mut self.tiles[pos.index()]
    }

    /// Iterate over all tiles with their positions
    pub fn iter_tiles(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        Position::all().map(|pos| (pos, self.at(pos)))
    }

    /// Location of the first treasure tile, if any
    pub fn treasure(&self) -> Option<Position> {
        self.iter_tiles()
            .find(|(_, tile)| tile.has_treasure)
            .map(|(pos, _)| pos)
    }

    pub fn treasure_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.has_treasure).count()
    }

    /// Rocks still sitting on walkable floor
    pub fn rock_count(&self) -> usize {
        self.tiles
            .iter()
            .filter(|tile| tile.has_base && tile.has_rock)
            .count()
    }

    /// Cells without floor
    pub fn removed_count(&self) -> usize {
        self.tiles.iter().filter(|tile| !tile.has_base).count()
    }
}

impl Default for TileBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws the board with y = 10 on the top line, matching the on-screen orientation.
impl fmt::Display for TileBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..BOARD_SIZE).rev() {
            let row: String = (0..BOARD_SIZE)
                .filter_map(|x| self.get(x, y))
                .map(Tile::glyph)
                .collect();
            writeln!(f, "|{row}|")?;
        }
        Ok(())
    }
}
