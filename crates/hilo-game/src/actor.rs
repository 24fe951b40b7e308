//! Session actor: an isolated Tokio task that owns one live game.
//!
//! Every event that can mutate a session (a guess from the user, the
//! timeout monitor firing) is a command on the actor's channel, so
//! "check current state, then transition" is always a single logical
//! step inside one task. That serialization is what makes the
//! Active→Ended transition exclusive without locks or compare-and-set
//! on the store.

use std::cmp::Ordering;
use std::sync::Arc;

use hilo_chat::Notifier;
use hilo_protocol::{GameId, GameResult, Notice, UserId};
use hilo_store::{GameStore, UserState};
use tokio::sync::mpsc;

use crate::{GameError, GameSession, SessionState};

/// Commands delivered to a session actor through its channel.
pub(crate) enum SessionCommand {
    /// A numeric guess from the user.
    Guess { value: i64 },

    /// The timeout monitor for `game_id` fired. Carries the game
    /// identity so a monitor left over from an earlier game can never
    /// finalize a later one.
    TimeoutFired { game_id: GameId },
}

/// Handle to a running session actor.
///
/// Cheap to clone; just an `mpsc::Sender` wrapper. The
/// [`GameHub`](crate::GameHub) holds one per user with a live game.
#[derive(Clone)]
pub struct SessionHandle {
    user: UserId,
    game_id: GameId,
    sender: mpsc::Sender<SessionCommand>,
}

impl SessionHandle {
    /// The id of the game this handle belongs to.
    pub fn game_id(&self) -> GameId {
        self.game_id
    }

    /// Returns `true` while the actor is still accepting commands.
    /// Turns false the moment the session finalizes.
    pub fn is_live(&self) -> bool {
        !self.sender.is_closed()
    }

    /// Queues a guess for evaluation.
    ///
    /// # Errors
    /// [`GameError::NoActiveSession`] if the session already ended.
    pub async fn guess(&self, value: i64) -> Result<(), GameError> {
        self.sender
            .send(SessionCommand::Guess { value })
            .await
            .map_err(|_| GameError::NoActiveSession(self.user))
    }

    /// The raw command sender, for wiring up the timeout monitor.
    pub(crate) fn command_sender(&self) -> mpsc::Sender<SessionCommand> {
        self.sender.clone()
    }
}

/// The internal actor state. Runs inside a Tokio task.
struct SessionActor<S, N> {
    session: GameSession,
    store: Arc<S>,
    notifier: Arc<N>,
    receiver: mpsc::Receiver<SessionCommand>,
}

impl<S: GameStore, N: Notifier> SessionActor<S, N> {
    /// Runs the actor loop until the session reaches a terminal state.
    async fn run(mut self) {
        let user = self.session.user;
        let game_id = self.session.game_id;
        tracing::info!(%user, %game_id, "session actor started");

        while let Some(cmd) = self.receiver.recv().await {
            let finished = match cmd {
                SessionCommand::Guess { value } => {
                    self.handle_guess(value).await
                }
                SessionCommand::TimeoutFired { game_id } => {
                    self.handle_timeout(game_id).await
                }
            };
            if finished {
                break;
            }
        }

        tracing::info!(%user, %game_id, "session actor stopped");
    }

    /// Evaluates one guess. Returns `true` if the session ended.
    ///
    /// Ordering is deliberate and preserved from the original product:
    /// the attempt counter is decremented first, and reaching zero is an
    /// immediate loss; the comparison is skipped even when the
    /// exhausting guess is correct.
    async fn handle_guess(&mut self, value: i64) -> bool {
        if !self.session.state.is_active() {
            return true;
        }
        let user = self.session.user;

        // Read-then-write against the persisted counter, then mirror it.
        let attempts_left =
            match self.store.decrement_attempts(user).await {
                Ok(left) => left,
                Err(err) => {
                    tracing::error!(
                        %user, error = %err,
                        "attempt decrement failed, guess dropped"
                    );
                    return false;
                }
            };
        self.session.attempts_left = attempts_left;

        if attempts_left == 0 {
            self.finalize(GameResult::Lost).await;
            self.notify(Notice::GameLostAttempts).await;
            return true;
        }

        match self.session.classify(value) {
            Ordering::Less => {
                self.notify(Notice::TargetHigher { attempts_left }).await;
                false
            }
            Ordering::Greater => {
                self.notify(Notice::TargetLower { attempts_left }).await;
                false
            }
            Ordering::Equal => {
                // Elapsed time comes from the store's start timestamp,
                // read before the game record is finalized away.
                let elapsed_secs = match self.store.elapsed_secs(user).await
                {
                    Ok(secs) => secs,
                    Err(err) => {
                        tracing::warn!(
                            %user, error = %err,
                            "elapsed-time lookup failed"
                        );
                        0
                    }
                };
                let attempts_used = self.session.attempts_used();
                self.finalize(GameResult::Won).await;
                self.notify(Notice::GameWon {
                    attempts_used,
                    elapsed_secs,
                })
                .await;
                true
            }
        }
    }

    /// Handles a timeout fire. Returns `true` if the session ended.
    async fn handle_timeout(&mut self, game_id: GameId) -> bool {
        if game_id != self.session.game_id {
            tracing::warn!(
                user = %self.session.user,
                stale = %game_id,
                current = %self.session.game_id,
                "timeout from another game ignored"
            );
            return false;
        }
        if !self.session.state.is_active() {
            return true;
        }

        let time_limit_secs = self.session.config.time_limit.as_secs();
        self.finalize(GameResult::Lost).await;
        self.notify(Notice::GameLostTimeout { time_limit_secs }).await;
        true
    }

    /// The terminal transition: outcome record, state change, counter,
    /// in that order.
    ///
    /// The outcome write comes first; if it fails, the counter update is
    /// skipped so a lifetime counter can never exceed recorded history.
    /// The in-memory transition completes regardless, so the session
    /// terminates and the finalization race stays settled.
    async fn finalize(&mut self, result: GameResult) {
        if self.session.state == SessionState::Ended {
            return;
        }
        // No further commands once the terminal transition begins.
        // Senders observe the closed channel as "no active session".
        self.receiver.close();

        let user = self.session.user;
        let game_id = self.session.game_id;

        let outcome_written = match self
            .store
            .append_outcome(game_id, user, result)
            .await
        {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(
                    %user, %game_id, error = %err,
                    "outcome write failed, counter update skipped"
                );
                false
            }
        };

        self.session.try_end();
        if let Err(err) =
            self.store.save_user_state(user, UserState::Idle).await
        {
            tracing::warn!(
                %user, %game_id, error = %err,
                "user state persist failed at finalize"
            );
        }

        if outcome_written {
            let counter = match result {
                GameResult::Won => self.store.record_win(user).await,
                GameResult::Lost => self.store.record_loss(user).await,
            };
            if let Err(err) = counter {
                tracing::warn!(
                    %user, %game_id, error = %err,
                    "lifetime counter update failed"
                );
            }
        }

        tracing::info!(%user, %game_id, %result, "game finished");
    }

    async fn notify(&self, notice: Notice) {
        self.notifier.notify(self.session.user, notice).await;
    }
}

/// Spawns a session actor task and returns the handle to command it.
pub(crate) fn spawn_session<S: GameStore, N: Notifier>(
    session: GameSession,
    store: Arc<S>,
    notifier: Arc<N>,
    channel_size: usize,
) -> SessionHandle {
    let user = session.user;
    let game_id = session.game_id;
    let (sender, receiver) = mpsc::channel(channel_size);

    let actor = SessionActor {
        session,
        store,
        notifier,
        receiver,
    };
    tokio::spawn(actor.run());

    SessionHandle {
        user,
        game_id,
        sender,
    }
}
