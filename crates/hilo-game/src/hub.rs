//! The game hub: creates sessions and routes guesses to them.
//!
//! This is the entry point the dispatcher (or any other inbound layer)
//! talks to. It enforces the one-session-per-user invariant, runs the
//! start-game pipeline, and hands guesses to the owning session actor.

use std::collections::HashMap;
use std::sync::Arc;

use hilo_chat::Notifier;
use hilo_protocol::{GameId, Notice, UserId};
use hilo_store::{GameStore, UserState};
use tokio::sync::Mutex;

use crate::actor::spawn_session;
use crate::timeout::spawn_monitor;
use crate::{
    GameConfig, GameError, GameSession, SessionHandle, TargetSource,
    UniformTarget,
};

/// Command channel size per session actor. A single user racing one
/// timer never queues more than a handful of commands.
const SESSION_CHANNEL_SIZE: usize = 16;

/// Owns every live session in the process, keyed by user.
///
/// Finished sessions are pruned lazily: a handle whose actor has exited
/// is removed the next time that user starts or guesses.
pub struct GameHub<S, N, T = UniformTarget> {
    store: Arc<S>,
    notifier: Arc<N>,
    target_source: T,
    sessions: Mutex<HashMap<UserId, SessionHandle>>,
}

impl<S: GameStore, N: Notifier> GameHub<S, N> {
    /// Creates a hub drawing targets uniformly at random.
    pub fn new(store: Arc<S>, notifier: Arc<N>) -> Self {
        Self::with_target_source(store, notifier, UniformTarget)
    }
}

impl<S: GameStore, N: Notifier, T: TargetSource> GameHub<S, N, T> {
    /// Creates a hub with a custom target source (tests script the
    /// secret number this way).
    pub fn with_target_source(
        store: Arc<S>,
        notifier: Arc<N>,
        target_source: T,
    ) -> Self {
        Self {
            store,
            notifier,
            target_source,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Starts a new game for `user` and returns the attempt budget for
    /// the opening prompt.
    ///
    /// The pipeline: validate settings, allocate the game id, persist
    /// the Active transition, draw and persist the target, spawn the
    /// session actor, arm the timeout monitor, initialize the attempt
    /// counter, announce the game.
    ///
    /// Incomplete or absent settings notify the user (a re-prompt, not a
    /// crash) and return the matching error without any state change.
    ///
    /// # Errors
    /// - [`GameError::SessionActive`]: a game is already running.
    /// - [`GameError::SettingsNotFound`] / [`GameError::SettingsIncomplete`]
    ///   / [`GameError::InvalidSettings`]: configuration not playable.
    /// - [`GameError::Store`]: a persistence call failed mid-pipeline.
    pub async fn start_game(&self, user: UserId) -> Result<u32, GameError> {
        {
            let mut sessions = self.sessions.lock().await;
            match sessions.get(&user) {
                Some(handle) if handle.is_live() => {
                    return Err(GameError::SessionActive(user));
                }
                Some(_) => {
                    sessions.remove(&user);
                }
                None => {}
            }
        }

        let Some(stored) = self.store.load_settings(user).await? else {
            self.notifier.notify(user, Notice::SettingsNotFound).await;
            return Err(GameError::SettingsNotFound(user));
        };

        let config = match GameConfig::from_stored(user, &stored) {
            Ok(config) => config,
            Err(err) => {
                if let GameError::SettingsIncomplete { missing, .. } = &err {
                    self.notifier
                        .notify(
                            user,
                            Notice::SettingsIncomplete {
                                missing: missing
                                    .iter()
                                    .map(ToString::to_string)
                                    .collect(),
                            },
                        )
                        .await;
                }
                return Err(err);
            }
        };

        let game_id = self.store.next_game_id(user).await?;
        self.store.save_user_state(user, UserState::InGame).await?;

        let target = self
            .target_source
            .pick(config.range_start..=config.range_end);
        self.store.begin_game(user, game_id, target).await?;

        let session =
            GameSession::new(user, game_id, config.clone(), target);
        let handle = spawn_session(
            session,
            Arc::clone(&self.store),
            Arc::clone(&self.notifier),
            SESSION_CHANNEL_SIZE,
        );
        spawn_monitor(
            handle.command_sender(),
            user,
            game_id,
            config.time_limit,
        );

        let attempts_left = self.store.reset_attempts(user).await?;

        self.sessions.lock().await.insert(user, handle);

        self.notifier
            .notify(user, Notice::GameStarted { attempts_left })
            .await;
        tracing::info!(%user, %game_id, attempts_left, "game started");
        Ok(attempts_left)
    }

    /// Routes one guess to the user's live session.
    ///
    /// # Errors
    /// [`GameError::NoActiveSession`] if there is no live session: never
    /// started, or already finished (a guess after Ended is rejected,
    /// not evaluated).
    pub async fn guess(
        &self,
        user: UserId,
        value: i64,
    ) -> Result<(), GameError> {
        let handle = {
            let mut sessions = self.sessions.lock().await;
            match sessions.get(&user) {
                Some(handle) if handle.is_live() => handle.clone(),
                Some(_) => {
                    sessions.remove(&user);
                    return Err(GameError::NoActiveSession(user));
                }
                None => return Err(GameError::NoActiveSession(user)),
            }
        };
        // The actor may finalize between the liveness check and the
        // send; the closed channel maps to the same rejection.
        handle.guess(value).await
    }

    /// The id of the user's live game, if one is running.
    pub async fn active_game(&self, user: UserId) -> Option<GameId> {
        let sessions = self.sessions.lock().await;
        sessions
            .get(&user)
            .filter(|handle| handle.is_live())
            .map(SessionHandle::game_id)
    }

    /// Number of live sessions across all users.
    pub async fn session_count(&self) -> usize {
        let sessions = self.sessions.lock().await;
        sessions.values().filter(|handle| handle.is_live()).count()
    }
}
