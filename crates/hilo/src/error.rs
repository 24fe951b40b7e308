//! Unified error type for the Hilo stack.

use hilo_game::GameError;
use hilo_store::StoreError;

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `hilo` meta-crate, you deal with this single error
/// type instead of importing errors from each sub-crate. The `#[from]`
/// attributes let `?` convert sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum HiloError {
    /// A game-layer error (settings, session lifecycle, guesses).
    #[error(transparent)]
    Game(#[from] GameError),

    /// A store-layer error reached outside the game flow (seeding
    /// settings, reading history).
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use hilo_protocol::UserId;

    #[test]
    fn test_from_game_error() {
        let err = GameError::NoActiveSession(UserId(1));
        let top: HiloError = err.into();
        assert!(matches!(top, HiloError::Game(_)));
        assert!(top.to_string().contains("no game in progress"));
    }

    #[test]
    fn test_from_store_error() {
        let err = StoreError::Backend("down".into());
        let top: HiloError = err.into();
        assert!(matches!(top, HiloError::Store(_)));
        assert!(top.to_string().contains("down"));
    }
}
