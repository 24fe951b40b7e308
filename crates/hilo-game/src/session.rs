//! Session types: the state machine and the live game it guards.

use std::cmp::Ordering;
use std::fmt;

use hilo_protocol::{GameId, UserId};

use crate::GameConfig;

/// The lifecycle state of a user's game session.
///
/// Transitions are strictly ordered; no skipping states:
///
/// ```text
/// NotStarted → Configuring → Active → Ended
/// ```
///
/// - **NotStarted**: the user has never entered the game flow.
/// - **Configuring**: the settings menu is collecting fields. Owned by
///   the upstream flow; the core only observes it.
/// - **Active**: a game is running. Guesses are evaluated, the timeout
///   monitor is armed.
/// - **Ended**: terminal. Reached exactly once, by exactly one of
///   timeout, exhausted attempts, or a correct guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    Configuring,
    Active,
    Ended,
}

impl SessionState {
    /// Returns `true` if a game is running in this state.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Attempts to transition to the next state.
    ///
    /// Returns `Some(next)` if the transition is valid, `None` if not.
    /// `Ended` is terminal.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::NotStarted => Some(Self::Configuring),
            Self::Configuring => Some(Self::Active),
            Self::Active => Some(Self::Ended),
            Self::Ended => None,
        }
    }

    /// Returns `true` if transitioning to `target` is valid.
    pub fn can_transition_to(self, target: Self) -> bool {
        self.next() == Some(target)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "NotStarted"),
            Self::Configuring => write!(f, "Configuring"),
            Self::Active => write!(f, "Active"),
            Self::Ended => write!(f, "Ended"),
        }
    }
}

/// One live game for one user.
///
/// Created at Active entry with a freshly drawn target; owned by the
/// session actor for its whole life, so nothing else ever mutates it.
#[derive(Debug)]
pub struct GameSession {
    pub user: UserId,
    pub game_id: GameId,
    pub config: GameConfig,
    pub state: SessionState,
    /// Mirror of the persisted attempt counter; updated from the store's
    /// decrement result, never computed locally.
    pub attempts_left: u32,
    /// The secret. Immutable once drawn, never exposed unguessed.
    target: i64,
}

impl GameSession {
    /// Creates a session entering the Active state.
    pub fn new(
        user: UserId,
        game_id: GameId,
        config: GameConfig,
        target: i64,
    ) -> Self {
        let attempts_left = config.attempts;
        Self {
            user,
            game_id,
            config,
            state: SessionState::Active,
            attempts_left,
            target,
        }
    }

    /// Compares a guess against the target without revealing it:
    /// `Less` means the guess is below the target.
    pub fn classify(&self, guess: i64) -> Ordering {
        guess.cmp(&self.target)
    }

    /// Attempts consumed so far.
    pub fn attempts_used(&self) -> u32 {
        self.config.attempts - self.attempts_left
    }

    /// The exclusive terminal transition.
    ///
    /// Returns `true` exactly once; later calls observe `Ended` and
    /// return `false`. This is the guard that lets the timeout path and
    /// the guess path race safely.
    pub fn try_end(&mut self) -> bool {
        if self.state == SessionState::Ended {
            return false;
        }
        self.state = SessionState::Ended;
        true
    }
}
