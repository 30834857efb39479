//! Core game logic: board representation, player types, win detection, the
//! turn-tracking state machine, and the session wrapper callers drive.

mod board;
mod player;
mod session;
mod state;
pub mod win;

pub use board::{check_dimensions, Board, Cell, Position, MAX_CELLS};
pub use player::Player;
pub use session::{MoveOutcome, Session};
pub use state::{GameState, GameStatus};
pub use win::{check_win, Axis};
