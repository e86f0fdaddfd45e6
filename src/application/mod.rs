mod camera;
mod game_state;
mod visibility;

pub use camera::{Camera, VIEW_RADIUS};
pub use game_state::{GameState, Intent, Phase, WIN_GRACE};
pub use visibility::{VisibleTile, is_visible, visible_tiles};
