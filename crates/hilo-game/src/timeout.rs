//! Timeout monitor: the one-shot timer racing the user's guesses.
//!
//! One monitor per started game. It sleeps for the configured time
//! limit, then drops a [`SessionCommand::TimeoutFired`] into the
//! session actor's queue. There is no cancel API: if the game already
//! ended, the actor's channel is closed and the send simply fails;
//! the fire degrades to a no-op, not an error.

use std::time::Duration;

use hilo_protocol::{GameId, UserId};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::actor::SessionCommand;

/// Arms the timeout for one game.
///
/// The monitor is scoped to `game_id`, not just the user: even if a
/// stale monitor outlives a rapid restart, it can neither reach the new
/// game's actor (different channel) nor pass the actor's id check.
pub(crate) fn spawn_monitor(
    commands: mpsc::Sender<SessionCommand>,
    user: UserId,
    game_id: GameId,
    time_limit: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(time_limit).await;
        tracing::debug!(%user, %game_id, "time limit elapsed");
        if commands
            .send(SessionCommand::TimeoutFired { game_id })
            .await
            .is_err()
        {
            // Session already finalized; nothing to do.
            tracing::trace!(%user, %game_id, "timeout fire after session end");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_monitor_fires_after_time_limit() {
        let (tx, mut rx) = mpsc::channel(4);
        spawn_monitor(tx, UserId(1), GameId(1), Duration::from_secs(60));

        // Paused clock auto-advances to the sleep deadline.
        let cmd = rx.recv().await.expect("monitor should fire");
        assert!(
            matches!(cmd, SessionCommand::TimeoutFired { game_id } if game_id == GameId(1))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_monitor_tolerates_closed_channel() {
        let (tx, rx) = mpsc::channel(4);
        let handle =
            spawn_monitor(tx, UserId(1), GameId(1), Duration::from_secs(60));
        drop(rx);

        // Must complete without panicking even though the send fails.
        handle.await.expect("monitor task should not panic");
    }

    #[tokio::test(start_paused = true)]
    async fn test_monitor_does_not_fire_early() {
        let (tx, mut rx) = mpsc::channel(4);
        spawn_monitor(tx, UserId(1), GameId(1), Duration::from_secs(60));

        tokio::time::sleep(Duration::from_secs(59)).await;
        assert!(
            rx.try_recv().is_err(),
            "monitor fired before the time limit"
        );
    }
}
