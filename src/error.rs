use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Fatal conditions of a game session. Collisions are not errors, they end the
/// session through `GameState::mark_game_over`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The display is smaller than the board plus its frame, as (columns, rows).
    TerminalTooSmall { required: (u16, u16), actual: (u16, u16) },
    /// No free cell is left to place food on.
    BoardFull,
}

impl Display for GameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GameError::TerminalTooSmall { required, actual } => write!(
                f,
                "terminal too small: need at least {}x{}, got {}x{}",
                required.0, required.1, actual.0, actual.1
            ),
            GameError::BoardFull => write!(f, "no empty cell left for food"),
        }
    }
}

impl Error for GameError {}
