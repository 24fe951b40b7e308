//! In-memory [`GameStore`] backend.
//!
//! One `Mutex<HashMap>` keyed by user. Every method takes the lock for
//! the duration of a plain map operation and releases it before
//! returning; nothing is held across an await point.
//!
//! This is the backend the tests and the console demo run against. A
//! production deployment implements [`GameStore`] over its database
//! instead; the semantics to copy are the ones encoded here.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Instant;

use hilo_protocol::{GameId, GameResult, UserId};

use crate::{GameStore, OutcomeRecord, StoreError, StoredSettings, UserState};

/// The live-game portion of a user's record.
#[derive(Debug, Clone)]
struct ActiveGame {
    game_id: GameId,
    started_at: Instant,
    attempts_left: u32,
    // Persisted with the game record; the core holds its own copy and
    // never reads it back.
    #[allow(dead_code)]
    target: i64,
}

/// Everything the store knows about one user.
#[derive(Debug, Default)]
struct UserRecord {
    settings: Option<StoredSettings>,
    state: UserState,
    game: Option<ActiveGame>,
    next_game: u64,
    wins: u64,
    losses: u64,
    history: Vec<OutcomeRecord>,
}

/// Process-local storage for tests and demos.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: Mutex<HashMap<UserId, UserRecord>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` on the user's record, creating the record if absent.
    fn with_user<T>(
        &self,
        user: UserId,
        f: impl FnOnce(&mut UserRecord) -> T,
    ) -> T {
        let mut users = self.users.lock().expect("store mutex poisoned");
        f(users.entry(user).or_default())
    }

    /// Runs `f` on the user's live game, or fails with `NoActiveGame`.
    fn with_game<T>(
        &self,
        user: UserId,
        f: impl FnOnce(&mut ActiveGame) -> T,
    ) -> Result<T, StoreError> {
        self.with_user(user, |rec| {
            rec.game
                .as_mut()
                .map(f)
                .ok_or(StoreError::NoActiveGame(user))
        })
    }
}

impl GameStore for MemoryStore {
    async fn load_settings(
        &self,
        user: UserId,
    ) -> Result<Option<StoredSettings>, StoreError> {
        Ok(self.with_user(user, |rec| rec.settings.clone()))
    }

    async fn save_settings(
        &self,
        user: UserId,
        settings: StoredSettings,
    ) -> Result<(), StoreError> {
        self.with_user(user, |rec| rec.settings = Some(settings));
        Ok(())
    }

    async fn user_state(&self, user: UserId) -> Result<UserState, StoreError> {
        Ok(self.with_user(user, |rec| rec.state))
    }

    async fn save_user_state(
        &self,
        user: UserId,
        state: UserState,
    ) -> Result<(), StoreError> {
        self.with_user(user, |rec| rec.state = state);
        tracing::debug!(%user, state = state.as_str(), "user state saved");
        Ok(())
    }

    async fn next_game_id(&self, user: UserId) -> Result<GameId, StoreError> {
        Ok(self.with_user(user, |rec| {
            rec.next_game += 1;
            GameId(rec.next_game)
        }))
    }

    async fn begin_game(
        &self,
        user: UserId,
        game_id: GameId,
        target: i64,
    ) -> Result<(), StoreError> {
        self.with_user(user, |rec| {
            rec.game = Some(ActiveGame {
                game_id,
                started_at: Instant::now(),
                attempts_left: 0,
                target,
            });
        });
        tracing::debug!(%user, %game_id, "game recorded");
        Ok(())
    }

    async fn reset_attempts(&self, user: UserId) -> Result<u32, StoreError> {
        let attempts = self
            .with_user(user, |rec| {
                rec.settings.as_ref().and_then(|s| s.attempts)
            })
            .ok_or(StoreError::IncompleteSettings(user))?;
        self.with_game(user, |game| game.attempts_left = attempts)?;
        Ok(attempts)
    }

    async fn decrement_attempts(
        &self,
        user: UserId,
    ) -> Result<u32, StoreError> {
        self.with_game(user, |game| {
            game.attempts_left = game.attempts_left.saturating_sub(1);
            game.attempts_left
        })
    }

    async fn elapsed_secs(&self, user: UserId) -> Result<u64, StoreError> {
        self.with_game(user, |game| game.started_at.elapsed().as_secs())
    }

    async fn append_outcome(
        &self,
        game_id: GameId,
        user: UserId,
        result: GameResult,
    ) -> Result<(), StoreError> {
        self.with_user(user, |rec| {
            rec.history.push(OutcomeRecord {
                game_id,
                user,
                result,
            });
        });
        tracing::debug!(%user, %game_id, %result, "outcome appended");
        Ok(())
    }

    async fn record_win(&self, user: UserId) -> Result<(), StoreError> {
        self.with_user(user, |rec| rec.wins += 1);
        Ok(())
    }

    async fn record_loss(&self, user: UserId) -> Result<(), StoreError> {
        self.with_user(user, |rec| rec.losses += 1);
        Ok(())
    }

    async fn tally(&self, user: UserId) -> Result<(u64, u64), StoreError> {
        Ok(self.with_user(user, |rec| (rec.wins, rec.losses)))
    }

    async fn history(
        &self,
        user: UserId,
    ) -> Result<Vec<OutcomeRecord>, StoreError> {
        Ok(self.with_user(user, |rec| rec.history.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uid(id: i64) -> UserId {
        UserId(id)
    }

    fn complete_settings() -> StoredSettings {
        StoredSettings {
            range_start: Some(1),
            range_end: Some(10),
            time_limit_secs: Some(60),
            attempts: Some(3),
        }
    }

    #[tokio::test]
    async fn test_load_settings_absent_returns_none() {
        let store = MemoryStore::new();
        let loaded = store.load_settings(uid(1)).await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_save_then_load_settings() {
        let store = MemoryStore::new();
        store.save_settings(uid(1), complete_settings()).await.unwrap();

        let loaded = store.load_settings(uid(1)).await.unwrap();
        assert_eq!(loaded, Some(complete_settings()));
    }

    #[tokio::test]
    async fn test_next_game_id_increments_per_user() {
        let store = MemoryStore::new();
        assert_eq!(store.next_game_id(uid(1)).await.unwrap(), GameId(1));
        assert_eq!(store.next_game_id(uid(1)).await.unwrap(), GameId(2));
        // Another user gets an independent sequence.
        assert_eq!(store.next_game_id(uid(2)).await.unwrap(), GameId(1));
    }

    #[tokio::test]
    async fn test_attempts_lifecycle() {
        let store = MemoryStore::new();
        store.save_settings(uid(1), complete_settings()).await.unwrap();
        store.begin_game(uid(1), GameId(1), 7).await.unwrap();

        assert_eq!(store.reset_attempts(uid(1)).await.unwrap(), 3);
        assert_eq!(store.decrement_attempts(uid(1)).await.unwrap(), 2);
        assert_eq!(store.decrement_attempts(uid(1)).await.unwrap(), 1);
        assert_eq!(store.decrement_attempts(uid(1)).await.unwrap(), 0);
        // Saturates instead of underflowing.
        assert_eq!(store.decrement_attempts(uid(1)).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_decrement_without_game_is_error() {
        let store = MemoryStore::new();
        let result = store.decrement_attempts(uid(1)).await;
        assert!(matches!(result, Err(StoreError::NoActiveGame(u)) if u == uid(1)));
    }

    #[tokio::test]
    async fn test_reset_attempts_needs_complete_settings() {
        let store = MemoryStore::new();
        store
            .save_settings(uid(1), StoredSettings::default())
            .await
            .unwrap();
        store.begin_game(uid(1), GameId(1), 7).await.unwrap();

        let result = store.reset_attempts(uid(1)).await;
        assert!(matches!(
            result,
            Err(StoreError::IncompleteSettings(u)) if u == uid(1)
        ));
    }

    #[tokio::test]
    async fn test_outcomes_and_tally() {
        let store = MemoryStore::new();
        store
            .append_outcome(GameId(1), uid(1), GameResult::Won)
            .await
            .unwrap();
        store.record_win(uid(1)).await.unwrap();
        store
            .append_outcome(GameId(2), uid(1), GameResult::Lost)
            .await
            .unwrap();
        store.record_loss(uid(1)).await.unwrap();

        assert_eq!(store.tally(uid(1)).await.unwrap(), (1, 1));
        let history = store.history(uid(1)).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].result, GameResult::Won);
        assert_eq!(history[1].result, GameResult::Lost);
    }

    #[tokio::test]
    async fn test_user_state_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.user_state(uid(1)).await.unwrap(), UserState::Idle);

        store.save_user_state(uid(1), UserState::InGame).await.unwrap();
        assert_eq!(store.user_state(uid(1)).await.unwrap(), UserState::InGame);
    }
}
