//! Error types for the store layer.

use hilo_protocol::UserId;

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A live-game operation (decrement, elapsed time) was requested for
    /// a user with no game in progress.
    #[error("no active game for user {0}")]
    NoActiveGame(UserId),

    /// The stored settings are missing a field the operation needs.
    /// The validator normally catches this before a game starts; seeing
    /// it here means storage changed underneath a running flow.
    #[error("stored settings for user {0} are incomplete")]
    IncompleteSettings(UserId),

    /// The backing storage failed (connection lost, query error, ...).
    #[error("storage backend failure: {0}")]
    Backend(String),
}
