//! Error types for the game layer.

use hilo_protocol::UserId;
use hilo_store::StoreError;

use crate::MissingSetting;

/// Errors that can occur while starting or playing a game.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The user has no stored settings record at all.
    /// Distinct from [`GameError::SettingsIncomplete`]: the settings menu
    /// was never visited, not merely left unfinished.
    #[error("no settings stored for user {0}")]
    SettingsNotFound(UserId),

    /// Settings exist but required fields are unset.
    #[error("settings for user {user} are incomplete")]
    SettingsIncomplete {
        user: UserId,
        /// Which fields are missing, in display order.
        missing: Vec<MissingSetting>,
    },

    /// Settings are complete but unsatisfiable (inverted range, zero
    /// attempts, zero time limit).
    #[error("settings for user {user} are invalid: {reason}")]
    InvalidSettings { user: UserId, reason: String },

    /// The user already has a game in progress. One session per user.
    #[error("user {0} already has a game in progress")]
    SessionActive(UserId),

    /// A guess arrived but no game is in progress (never started, or
    /// already finished).
    #[error("user {0} has no game in progress")]
    NoActiveSession(UserId),

    /// A storage call failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
