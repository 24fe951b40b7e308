//! # Hilo
//!
//! Backend for a chat-based "guess the number" game: the user configures
//! a range, a time limit and an attempt count; the bot draws a secret
//! number and evaluates guesses until a win, an exhausted budget, or a
//! timeout.
//!
//! The meta-crate ties the layers together:
//!
//! ```text
//! chat transport → Dispatcher → GameHub → session actors
//!                                  ↕            ↕
//!                              GameStore     Notifier
//! ```
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use hilo::prelude::*;
//!
//! # async fn run() -> Result<(), HiloError> {
//! let store = Arc::new(MemoryStore::new());
//! let hub = GameHub::new(Arc::clone(&store), Arc::new(ConsoleNotifier));
//! let bot = Dispatcher::new(hub);
//!
//! bot.handle(InboundEvent::play(UserId(1))).await?;
//! bot.handle(InboundEvent::text(UserId(1), "42")).await?;
//! # Ok(())
//! # }
//! ```

mod dispatch;
mod error;

pub use dispatch::{Dispatcher, InboundEvent, InboundKind};
pub use error::HiloError;

/// The common imports for building a bot on Hilo.
pub mod prelude {
    pub use crate::{Dispatcher, HiloError, InboundEvent, InboundKind};
    pub use hilo_chat::{ChannelNotifier, ConsoleNotifier, Notifier};
    pub use hilo_game::{
        FixedTarget, GameConfig, GameError, GameHub, SessionState,
        TargetSource, UniformTarget,
    };
    pub use hilo_protocol::{GameId, GameResult, Notice, UserId};
    pub use hilo_store::{
        GameStore, MemoryStore, StoreError, StoredSettings, UserState,
    };
}
