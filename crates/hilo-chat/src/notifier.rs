//! The [`Notifier`] trait and the two built-in implementations.

use std::future::Future;

use hilo_protocol::{Notice, UserId};
use tokio::sync::mpsc;

use crate::text;

/// Delivers a notice to a user. Fire-and-forget.
///
/// The core calls this at every user-visible moment of a game. Delivery
/// failures are an implementation concern: log them and move on; the
/// game must never stall or unwind because a chat API hiccuped.
///
/// # Example
///
/// ```rust
/// use hilo_chat::Notifier;
/// use hilo_protocol::{Notice, UserId};
///
/// /// Swallows everything. Useful as a placeholder in benchmarks.
/// struct NullNotifier;
///
/// impl Notifier for NullNotifier {
///     async fn notify(&self, _user: UserId, _notice: Notice) {}
/// }
/// ```
pub trait Notifier: Send + Sync + 'static {
    /// Delivers `notice` to `user`, best effort.
    fn notify(
        &self,
        user: UserId,
        notice: Notice,
    ) -> impl Future<Output = ()> + Send;
}

/// Captures notices in an mpsc channel instead of delivering them.
///
/// Tests create one, hold the receiving end, and assert on the exact
/// sequence of `(UserId, Notice)` pairs the core produced.
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<(UserId, Notice)>,
}

impl ChannelNotifier {
    /// Creates the notifier and the receiver to observe it with.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<(UserId, Notice)>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Notifier for ChannelNotifier {
    async fn notify(&self, user: UserId, notice: Notice) {
        // Receiver gone means the test is done looking; drop silently.
        let _ = self.sender.send((user, notice));
    }
}

/// Renders notices through the text catalog and prints them to stdout.
///
/// The console demo's stand-in for a chat window.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    async fn notify(&self, user: UserId, notice: Notice) {
        println!("[{user}] {}", text::render(&notice));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_channel_notifier_captures_in_order() {
        let (notifier, mut rx) = ChannelNotifier::new();

        notifier
            .notify(UserId(1), Notice::GameStarted { attempts_left: 3 })
            .await;
        notifier
            .notify(UserId(1), Notice::TargetHigher { attempts_left: 2 })
            .await;

        let (user, first) = rx.recv().await.unwrap();
        assert_eq!(user, UserId(1));
        assert_eq!(first, Notice::GameStarted { attempts_left: 3 });
        let (_, second) = rx.recv().await.unwrap();
        assert_eq!(second, Notice::TargetHigher { attempts_left: 2 });
    }

    #[tokio::test]
    async fn test_channel_notifier_survives_dropped_receiver() {
        let (notifier, rx) = ChannelNotifier::new();
        drop(rx);

        // Must not panic or error.
        notifier.notify(UserId(1), Notice::GameLostAttempts).await;
    }
}
