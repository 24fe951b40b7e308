//! Record shapes the store persists.

use hilo_protocol::{GameId, GameResult, UserId};
use serde::{Deserialize, Serialize};

/// A user's stored game configuration.
///
/// Every field is optional because configuration happens incrementally
/// upstream: the settings menu writes one field at a time. The game
/// layer validates completeness before a session may start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSettings {
    /// Lower bound of the guessing range (inclusive).
    pub range_start: Option<i64>,
    /// Upper bound of the guessing range (inclusive).
    pub range_end: Option<i64>,
    /// Time limit for one game, in seconds.
    pub time_limit_secs: Option<u64>,
    /// Attempt budget for one game.
    pub attempts: Option<u32>,
}

/// Where a user is in the bot's top-level flow.
///
/// Persisted alongside the chat platform's own state machine so the bot
/// can restore the right menu after a restart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserState {
    /// In the menus, no game running.
    #[default]
    Idle,
    /// A game is in progress; plain numeric messages are guesses.
    InGame,
}

impl UserState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::InGame => "in_game",
        }
    }
}

/// One finished game in a user's history.
///
/// Append-only: written exactly once at the terminal transition and
/// never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeRecord {
    pub game_id: GameId,
    pub user: UserId,
    pub result: GameResult,
}
