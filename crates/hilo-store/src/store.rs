//! The [`GameStore`] trait: the contract the game core depends on.
//!
//! Hilo doesn't pick a database; that's the deployment's job. The core
//! calls these methods and any backend that implements them works:
//! [`MemoryStore`](crate::MemoryStore) for tests and demos, a SQL or
//! key-value adapter in production.
//!
//! Methods return `impl Future<...> + Send` rather than plain `async fn`
//! so implementations can be driven from spawned tasks.

use std::future::Future;

use hilo_protocol::{GameId, GameResult, UserId};

use crate::{OutcomeRecord, StoreError, StoredSettings, UserState};

/// Persistent storage for settings, live game state, and history.
///
/// # Trait bounds
///
/// - `Send + Sync`: the store is shared across the session actors and
///   the hub, which may run on any runtime thread.
/// - `'static`: the store outlives every session that uses it.
///
/// # Consistency expectations
///
/// `decrement_attempts` and `elapsed_secs` must operate on the latest
/// persisted value, not a cached copy: the timeout monitor and the guess
/// path both read through these methods while racing each other.
pub trait GameStore: Send + Sync + 'static {
    // --- Settings ---

    /// Loads the user's stored settings. `None` means no record exists
    /// at all; callers treat that differently from a partially filled
    /// record.
    fn load_settings(
        &self,
        user: UserId,
    ) -> impl Future<Output = Result<Option<StoredSettings>, StoreError>> + Send;

    /// Creates or replaces the user's settings record.
    fn save_settings(
        &self,
        user: UserId,
        settings: StoredSettings,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    // --- Top-level user state ---

    /// Reads the user's persisted flow state.
    fn user_state(
        &self,
        user: UserId,
    ) -> impl Future<Output = Result<UserState, StoreError>> + Send;

    /// Persists a flow-state transition.
    fn save_user_state(
        &self,
        user: UserId,
        state: UserState,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    // --- Live game ---

    /// Allocates the id for the user's next game.
    fn next_game_id(
        &self,
        user: UserId,
    ) -> impl Future<Output = Result<GameId, StoreError>> + Send;

    /// Records a new game: its id, the drawn target, and the start
    /// timestamp (captured by the store at call time).
    fn begin_game(
        &self,
        user: UserId,
        game_id: GameId,
        target: i64,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Sets the live game's attempt counter from the stored attempt
    /// budget and returns the starting value.
    fn reset_attempts(
        &self,
        user: UserId,
    ) -> impl Future<Output = Result<u32, StoreError>> + Send;

    /// Decrements the live game's attempt counter by one and returns the
    /// new value. Saturates at zero.
    fn decrement_attempts(
        &self,
        user: UserId,
    ) -> impl Future<Output = Result<u32, StoreError>> + Send;

    /// Whole seconds elapsed since the live game started.
    fn elapsed_secs(
        &self,
        user: UserId,
    ) -> impl Future<Output = Result<u64, StoreError>> + Send;

    // --- History ---

    /// Appends one outcome record. Called exactly once per finished game,
    /// before the matching counter increment.
    fn append_outcome(
        &self,
        game_id: GameId,
        user: UserId,
        result: GameResult,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Increments the user's lifetime games-won counter.
    fn record_win(
        &self,
        user: UserId,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Increments the user's lifetime games-lost counter.
    fn record_loss(
        &self,
        user: UserId,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Returns the user's lifetime `(won, lost)` counters.
    fn tally(
        &self,
        user: UserId,
    ) -> impl Future<Output = Result<(u64, u64), StoreError>> + Send;

    /// Returns the user's outcome history, oldest first.
    fn history(
        &self,
        user: UserId,
    ) -> impl Future<Output = Result<Vec<OutcomeRecord>, StoreError>> + Send;
}
