//! Shared vocabulary for Hilo.
//!
//! This crate defines the types every other layer speaks in:
//!
//! - **Identity** ([`UserId`], [`GameId`]): who is playing, which game.
//! - **Results** ([`GameResult`]): how a finished game is recorded.
//! - **Notices** ([`Notice`]): the typed user-facing notification events
//!   the core emits through the chat boundary.
//!
//! It sits below everything else and knows nothing about storage, timers,
//! or chat transports:
//!
//! ```text
//! Game core (above)  ← emits Notices keyed by UserId
//!     ↕
//! Protocol (this crate)
//!     ↕
//! Store / chat boundaries (siblings)  ← persist and deliver these types
//! ```

mod notice;
mod types;

pub use notice::Notice;
pub use types::{GameId, GameResult, UserId};
