//! Snake on a fixed 30x18 grid, drawn in the terminal.
//!
//! The game rules (`board`, `snake`, `game_state`, `session`) do no I/O.
//! Keyboard input and drawing plug in through the `InputSource` and `Renderer`
//! traits, and `game_loop` ties them together at a fixed tick rate.

pub mod board;
pub mod error;
pub mod game_loop;
pub mod game_state;
pub mod input;
pub mod point;
pub mod render;
pub mod session;
pub mod snake;

pub use board::Board;
pub use error::GameError;
pub use game_loop::{GameLoop, TickFlow};
pub use game_state::{GameState, Status};
pub use input::{InputEvent, InputSource, KeyboardInput};
pub use point::Point;
pub use render::{Renderer, TermRenderer, TerminalGuard};
pub use session::Session;
pub use snake::{CollisionKind, Direction, MoveOutcome, Snake};
