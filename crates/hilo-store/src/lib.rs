//! Persistence boundary for Hilo.
//!
//! The game core never talks to a database directly. It calls the
//! [`GameStore`] trait, which covers three concerns:
//!
//! 1. **Settings**: the user's stored game configuration
//! 2. **Live game state**: target number, start time, attempts left
//! 3. **History**: append-only outcome records and lifetime counters
//!
//! # How it fits in the stack
//!
//! ```text
//! Game core (above)  ← reads/writes everything through GameStore
//!     ↕
//! Store layer (this crate)  ← trait + record shapes + MemoryStore
//!     ↕
//! Protocol layer (below)  ← provides UserId, GameId, GameResult
//! ```
//!
//! [`MemoryStore`] is the process-local backend used by tests and the
//! demo; a real deployment implements [`GameStore`] over its database.

mod error;
mod memory;
mod records;
mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use records::{OutcomeRecord, StoredSettings, UserState};
pub use store::GameStore;
