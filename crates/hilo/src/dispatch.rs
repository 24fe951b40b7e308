//! Inbound event dispatch: from raw chat events to game operations.
//!
//! The chat transport, whatever it is, resolves each inbound update
//! into an [`InboundEvent`] and hands it here. The dispatcher is the
//! input filter the core relies on: it drops events with no resolvable
//! user, ignores non-numeric text, and treats "settings not ready"
//! outcomes as re-prompts rather than failures.

use hilo_chat::Notifier;
use hilo_game::{GameError, GameHub, TargetSource};
use hilo_protocol::UserId;
use hilo_store::GameStore;

use crate::HiloError;

/// What an inbound chat update meant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundKind {
    /// The user asked to start a game (button press / command).
    Play,
    /// A plain text message. Numeric text is a guess while a game is
    /// running; everything else is ignored here.
    Text(String),
}

/// One resolved inbound chat event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundEvent {
    /// The sender, if the transport could resolve one. Events without a
    /// user are logged and dropped without touching any state.
    pub user: Option<UserId>,
    pub kind: InboundKind,
}

impl InboundEvent {
    /// A play request from `user`.
    pub fn play(user: UserId) -> Self {
        Self {
            user: Some(user),
            kind: InboundKind::Play,
        }
    }

    /// A text message from `user`.
    pub fn text(user: UserId, text: impl Into<String>) -> Self {
        Self {
            user: Some(user),
            kind: InboundKind::Text(text.into()),
        }
    }
}

/// Routes inbound events into the game hub.
pub struct Dispatcher<S, N, T> {
    hub: GameHub<S, N, T>,
}

impl<S: GameStore, N: Notifier, T: TargetSource> Dispatcher<S, N, T> {
    /// Wraps a hub.
    pub fn new(hub: GameHub<S, N, T>) -> Self {
        Self { hub }
    }

    /// The underlying hub, for callers that need direct queries.
    pub fn hub(&self) -> &GameHub<S, N, T> {
        &self.hub
    }

    /// Handles one inbound event.
    ///
    /// Recoverable conditions (unresolvable user, non-numeric text,
    /// settings not ready, no game running, play pressed twice) are
    /// logged and swallowed: the user was already notified where a
    /// notice applies, and a chat bot must not crash on stray input.
    ///
    /// # Errors
    /// Only infrastructure failures (storage) surface as errors.
    pub async fn handle(&self, event: InboundEvent) -> Result<(), HiloError> {
        let Some(user) = event.user else {
            tracing::warn!("inbound event without resolvable user, dropped");
            return Ok(());
        };

        match event.kind {
            InboundKind::Play => match self.hub.start_game(user).await {
                Ok(attempts_left) => {
                    tracing::debug!(%user, attempts_left, "play accepted");
                    Ok(())
                }
                Err(
                    GameError::SettingsNotFound(_)
                    | GameError::SettingsIncomplete { .. }
                    | GameError::InvalidSettings { .. },
                ) => {
                    // User already re-prompted via notice.
                    tracing::debug!(%user, "play rejected: settings not ready");
                    Ok(())
                }
                Err(GameError::SessionActive(_)) => {
                    tracing::debug!(%user, "play ignored: game already running");
                    Ok(())
                }
                Err(err) => Err(err.into()),
            },
            InboundKind::Text(text) => {
                let Ok(value) = text.trim().parse::<i64>() else {
                    tracing::debug!(%user, "non-numeric message ignored");
                    return Ok(());
                };
                match self.hub.guess(user, value).await {
                    Ok(()) => Ok(()),
                    Err(GameError::NoActiveSession(_)) => {
                        tracing::debug!(%user, "guess ignored: no game running");
                        Ok(())
                    }
                    Err(err) => Err(err.into()),
                }
            }
        }
    }
}
