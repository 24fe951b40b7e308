//! Game session core for Hilo.
//!
//! Everything with real state-transition logic lives here: settings
//! validation, the session lifecycle, guess evaluation, and the timeout
//! monitor that races user input.
//!
//! # Key types
//!
//! - [`GameHub`]: creates sessions, routes guesses, owns the registry
//! - [`GameConfig`] / [`missing_settings`]: settings validation
//! - [`SessionState`] / [`GameSession`]: the lifecycle state machine
//! - [`TargetSource`]: where the secret number comes from
//!
//! # Concurrency
//!
//! Each started game runs as an isolated actor task; the user's guesses
//! and the timeout fire arrive as commands on the same queue. Whichever
//! reaches the actor first performs the exclusive Active→Ended
//! transition; the loser observes Ended (or a closed channel) and
//! degrades to a no-op.
//!
//! ```text
//! Dispatcher (above)  ← start_game / guess
//!     ↕
//! Game core (this crate)  ← hub → session actors → timeout monitors
//!     ↕
//! Store + chat boundaries (below)  ← GameStore, Notifier
//! ```

mod actor;
mod error;
mod hub;
mod session;
mod settings;
mod target;
mod timeout;

pub use actor::SessionHandle;
pub use error::GameError;
pub use hub::GameHub;
pub use session::{GameSession, SessionState};
pub use settings::{missing_settings, GameConfig, MissingSetting};
pub use target::{FixedTarget, TargetSource, UniformTarget};
