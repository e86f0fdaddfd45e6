use std::time::Duration;

use crate::domain::{CENTER, Direction, Position, TileBoard};

/// How long the winning frame stays up before the game exits
pub const WIN_GRACE: Duration = Duration::from_secs(3);

/// Discrete player intents delivered by the input layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Intent {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    ClearRock,
    Quit,
}

impl Intent {
    /// Movement direction for move intents
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Intent::MoveUp => Some(Direction::Up),
            Intent::MoveDown => Some(Direction::Down),
            Intent::MoveLeft => Some(Direction::Left),
            Intent::MoveRight => Some(Direction::Right),
            Intent::ClearRock | Intent::Quit => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Playing,
    /// Terminal: the treasure has been dug up
    Won,
}

/// GameState tracks the player between frames.
/// Transitions consume the state and return the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameState {
    pub cursor: Position,
    /// Cursor position before the last successful move
    pub previous: Position,
    /// Derived each tick: the cursor stands on a rock
    pub mine_highlighted: bool,
    pub phase: Phase,
    quit_requested: bool,
}

impl GameState {
    /// Fresh game with the cursor on the centre cell
    pub fn new() -> Self {
        Self {
            cursor: CENTER,
            previous: CENTER,
            mine_highlighted: false,
            phase: Phase::Playing,
            quit_requested: false,
        }
    }

    /// Apply one player intent
    pub fn apply(self, intent: Intent, board: &mut TileBoard) -> Self {
        match intent {
            Intent::Quit => self.request_quit(),
            _ if self.phase == Phase::Won => self,
            Intent::ClearRock => self.clear_rock(board),
            _ => match intent.direction() {
                Some(direction) => self.step(direction, board),
                None => self,
            },
        }
    }

    /// Per-frame update of derived flags
    pub fn tick(mut self, board: &TileBoard) -> Self {
        self.mine_highlighted = board.at(self.cursor).has_rock;
        self
    }

    fn step(mut self, direction: Direction, board: &TileBoard) -> Self {
        let Some(candidate) = self.cursor.step(direction) else {
            return self;
        };
        if !board.at(candidate).has_base {
            return self;
        }
        log::debug!(
            "cursor ({}, {}) -> ({}, {})",
            self.cursor.x(),
            self.cursor.y(),
            candidate.x(),
            candidate.y()
        );
        self.previous = self.cursor;
        self.cursor = candidate;
        self
    }

    fn clear_rock(mut self, board: &mut TileBoard) -> Self {
        if !board.clear_rock(self.cursor) {
            return self;
        }
        self.mine_highlighted = false;
        if board.at(self.cursor).has_treasure {
            log::info!(
                "treasure found at ({}, {})",
                self.cursor.x(),
                self.cursor.y()
            );
            self.phase = Phase::Won;
        }
        self
    }

    fn request_quit(mut self) -> Self {
        self.quit_requested = true;
        self
    }

    /// The treasure has been revealed and the end banner should be drawn
    pub fn end_triggered(&self) -> bool {
        self.phase == Phase::Won
    }

    pub fn won(&self) -> bool {
        self.phase == Phase::Won
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// How long the driver holds the last frame before exiting
    pub fn shutdown_delay(&self) -> Duration {
        if self.won() { WIN_GRACE } else { Duration::ZERO }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BoardGenerator, Tile};

    fn pos(x: usize, y: usize) -> Position {
        Position::new(x, y).unwrap()
    }

    fn board_with(tiles: &[((usize, usize), Tile)]) -> TileBoard {
        let mut board = TileBoard::new();
        board.set(CENTER, Tile::START);
        for &((x, y), tile) in tiles {
            board.set(pos(x, y), tile);
        }
        board
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.cursor, CENTER);
        assert_eq!(state.previous, CENTER);
        assert_eq!(state.phase, Phase::Playing);
        assert!(!state.end_triggered());
        assert!(!state.won());
        assert!(!state.quit_requested());
    }

    #[test]
    fn test_moves_onto_floor() {
        let mut board = board_with(&[]);
        let expected = [
            (Intent::MoveUp, pos(5, 6)),
            (Intent::MoveDown, pos(5, 4)),
            (Intent::MoveLeft, pos(4, 5)),
            (Intent::MoveRight, pos(6, 5)),
        ];
        for (intent, target) in expected {
            let state = GameState::new().apply(intent, &mut board);
            assert_eq!(state.cursor, target, "{intent:?}");
            assert_eq!(state.previous, CENTER);
        }
    }

    #[test]
    fn test_move_blocked_by_pit() {
        let mut board = board_with(&[((6, 5), Tile::PIT)]);
        let state = GameState::new().apply(Intent::MoveRight, &mut board);
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_pit_blocks_every_direction() {
        let cases = [
            (Intent::MoveUp, (5, 6)),
            (Intent::MoveDown, (5, 4)),
            (Intent::MoveLeft, (4, 5)),
            (Intent::MoveRight, (6, 5)),
        ];
        for (intent, pit) in cases {
            let mut board = board_with(&[(pit, Tile::PIT)]);
            let state = GameState::new().apply(intent, &mut board);
            assert_eq!(state.cursor, CENTER, "{intent:?}");
            assert_eq!(state.previous, CENTER, "{intent:?}");
        }
    }

    #[test]
    fn test_edges_stop_every_direction() {
        let cases = [
            (Intent::MoveUp, pos(5, 10)),
            (Intent::MoveDown, pos(5, 0)),
            (Intent::MoveLeft, pos(0, 5)),
            (Intent::MoveRight, pos(10, 5)),
        ];
        for (intent, edge) in cases {
            let mut board = board_with(&[]);
            let mut state = GameState::new();
            for _ in 0..5 {
                state = state.apply(intent, &mut board);
            }
            assert_eq!(state.cursor, edge, "{intent:?}");

            let at_edge = state;
            let state = state.apply(intent, &mut board);
            assert_eq!(state, at_edge, "{intent:?}");
        }
    }

    #[test]
    fn test_move_onto_rock_allowed() {
        let mut board = board_with(&[((5, 6), Tile::ROCK)]);
        let state = GameState::new()
            .apply(Intent::MoveUp, &mut board)
            .tick(&board);
        assert_eq!(state.cursor, pos(5, 6));
        assert!(state.mine_highlighted);
    }

    #[test]
    fn test_move_off_board_is_noop() {
        let mut board = board_with(&[]);
        let mut state = GameState::new();
        for _ in 0..20 {
            state = state.apply(Intent::MoveRight, &mut board);
        }
        assert_eq!(state.cursor, pos(10, 5));
        assert_eq!(state.previous, pos(9, 5));

        let edge = state;
        state = state.apply(Intent::MoveRight, &mut board);
        assert_eq!(state, edge);
    }

    #[test]
    fn test_move_right_matches_floor_on_generated_boards() {
        for seed in 0..50 {
            let mut board = BoardGenerator::new(seed).generate();
            let mut state = GameState::new();
            // Walk right as far as the floor allows
            for _ in 0..12 {
                let before = state.cursor;
                state = state.apply(Intent::MoveRight, &mut board);
                let open = before
                    .step(Direction::Right)
                    .is_some_and(|next| board.at(next).has_base);
                if open {
                    assert_eq!(state.cursor.x(), before.x() + 1, "seed {seed}");
                } else {
                    assert_eq!(state.cursor, before, "seed {seed}");
                }
                assert!(board.at(state.cursor).has_base);
            }
        }
    }

    #[test]
    fn test_clear_rock_without_rock_is_noop() {
        let mut board = board_with(&[]);
        let before_board = board.clone();
        let state = GameState::new().tick(&board);
        let after = state.apply(Intent::ClearRock, &mut board);
        assert_eq!(after, state);
        assert_eq!(board, before_board);
    }

    #[test]
    fn test_clear_plain_rock() {
        let mut board = board_with(&[((4, 5), Tile::ROCK)]);
        let state = GameState::new()
            .apply(Intent::MoveLeft, &mut board)
            .tick(&board);
        assert!(state.mine_highlighted);

        let state = state.apply(Intent::ClearRock, &mut board);
        assert!(!state.mine_highlighted);
        assert!(!board.at(pos(4, 5)).has_rock);
        assert_eq!(state.phase, Phase::Playing);
    }

    #[test]
    fn test_clear_rock_on_treasure_wins() {
        let mut board = board_with(&[((5, 4), Tile::TREASURE)]);
        let state = GameState::new()
            .apply(Intent::MoveDown, &mut board)
            .tick(&board)
            .apply(Intent::ClearRock, &mut board);
        assert!(state.end_triggered());
        assert!(state.won());
        assert_eq!(state.shutdown_delay(), WIN_GRACE);
    }

    #[test]
    fn test_path_to_treasure_at_3_4() {
        // A corridor down from the centre and then left to (3, 4)
        let mut board = board_with(&[
            ((3, 4), Tile::TREASURE),
            ((5, 6), Tile::PIT),
            ((6, 4), Tile::PIT),
        ]);
        let path = [Intent::MoveDown, Intent::MoveLeft, Intent::MoveLeft];
        let state = path
            .iter()
            .fold(GameState::new(), |s, &intent| s.apply(intent, &mut board).tick(&board));
        assert_eq!(state.cursor, pos(3, 4));
        assert_eq!(state.previous, pos(4, 4));
        assert!(state.mine_highlighted);

        let state = state.apply(Intent::ClearRock, &mut board);
        assert!(state.end_triggered());
        assert!(state.won());
    }

    #[test]
    fn test_won_is_terminal() {
        let mut board = board_with(&[((5, 4), Tile::TREASURE), ((5, 3), Tile::ROCK)]);
        let won = GameState::new()
            .apply(Intent::MoveDown, &mut board)
            .apply(Intent::ClearRock, &mut board);
        assert!(won.won());

        let snapshot = board.clone();
        let after = won
            .apply(Intent::MoveDown, &mut board)
            .apply(Intent::ClearRock, &mut board);
        assert_eq!(after, won);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_quit() {
        let mut board = board_with(&[]);
        let state = GameState::new().apply(Intent::Quit, &mut board);
        assert!(state.quit_requested());
        assert_eq!(state.shutdown_delay(), Duration::ZERO);
    }

    #[test]
    fn test_quit_after_win_holds_frame() {
        let mut board = board_with(&[((5, 6), Tile::TREASURE)]);
        let state = GameState::new()
            .apply(Intent::MoveUp, &mut board)
            .apply(Intent::ClearRock, &mut board)
            .apply(Intent::Quit, &mut board);
        assert!(state.quit_requested());
        assert_eq!(state.shutdown_delay(), Duration::from_secs(3));
    }

    #[test]
    fn test_tick_is_idempotent() {
        let board = board_with(&[((5, 5), Tile::ROCK)]);
        let once = GameState::new().tick(&board);
        let twice = once.tick(&board).tick(&board);
        assert!(once.mine_highlighted);
        assert_eq!(once, twice);
    }
}
