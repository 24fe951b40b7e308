//! Identity newtypes and the game result enum.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique identifier for a chat user.
///
/// Chat platforms hand out signed 64-bit user ids, so the inner type is
/// `i64`. The session layer uses this as the session key; one live game
/// per user at a time.
///
/// `#[serde(transparent)]` serializes a `UserId(42)` as plain `42`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U-{}", self.0)
    }
}

/// A unique identifier for one game of one user.
///
/// Allocated by the store when a session starts. Timeout monitors are
/// scoped to this id (not just the user id), so a monitor left over from
/// an earlier game can never finalize a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G-{}", self.0)
    }
}

/// How a finished game ended.
///
/// Written into the outcome history exactly once per game, at the
/// terminal transition, and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    Won,
    Lost,
}

impl GameResult {
    /// The storage spelling of the result.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
