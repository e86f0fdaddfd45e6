use super::GameState;
use crate::domain::{Position, TileBoard};

/// A tile the renderer should draw this frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleTile {
    pub pos: Position,
    pub has_rock: bool,
}

/// A floor cell is visible when it shares the cursor's row or column
/// and lies at most one step away.
pub fn is_visible(cursor: Position, board: &TileBoard, pos: Position) -> bool {
    let dx = pos.x().abs_diff(cursor.x());
    let dy = pos.y().abs_diff(cursor.y());
    board.at(pos).has_base && ((dy == 0 && dx <= 1) || (dx == 0 && dy <= 1))
}

/// Tiles exposed around the cursor, in board index order
pub fn visible_tiles(state: &GameState, board: &TileBoard) -> Vec<VisibleTile> {
    state
        .cursor
        .neighborhood()
        .filter(|&pos| is_visible(state.cursor, board, pos))
        .map(|pos| VisibleTile {
            pos,
            has_rock: board.at(pos).has_rock,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Intent;
    use crate::domain::{CENTER, Tile};

    fn pos(x: usize, y: usize) -> Position {
        Position::new(x, y).unwrap()
    }

    #[test]
    fn test_plus_shape_on_open_floor() {
        let board = TileBoard::new();
        let tiles = visible_tiles(&GameState::new(), &board);
        let positions: Vec<Position> = tiles.iter().map(|t| t.pos).collect();
        assert_eq!(
            positions,
            vec![pos(4, 5), pos(5, 4), pos(5, 5), pos(5, 6), pos(6, 5)]
        );
    }

    #[test]
    fn test_diagonal_never_visible() {
        let board = TileBoard::new();
        assert!(!is_visible(CENTER, &board, pos(6, 6)));
        assert!(!is_visible(CENTER, &board, pos(4, 4)));
        assert!(!is_visible(CENTER, &board, pos(5, 7)));
    }

    #[test]
    fn test_same_column_requires_floor() {
        let mut board = TileBoard::new();
        assert!(is_visible(CENTER, &board, pos(5, 6)));
        board.set(pos(5, 6), Tile::PIT);
        assert!(!is_visible(CENTER, &board, pos(5, 6)));
    }

    #[test]
    fn test_rocks_are_tagged() {
        let mut board = TileBoard::new();
        board.set(pos(6, 5), Tile::ROCK);
        let tiles = visible_tiles(&GameState::new(), &board);
        let rock = tiles.iter().find(|t| t.pos == pos(6, 5)).unwrap();
        assert!(rock.has_rock);
        assert_eq!(tiles.iter().filter(|t| t.has_rock).count(), 1);
    }

    #[test]
    fn test_corner_cursor() {
        let mut board = TileBoard::new();
        let mut state = GameState::new();
        for intent in [Intent::MoveLeft; 5].into_iter().chain([Intent::MoveDown; 5]) {
            state = state.apply(intent, &mut board);
        }
        assert_eq!(state.cursor, pos(0, 0));
        let tiles = visible_tiles(&state, &board);
        assert_eq!(tiles.len(), 3);
    }
}
