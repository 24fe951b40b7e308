//! User-facing notification events.
//!
//! The game core never formats chat text itself. It emits a [`Notice`],
//! a template key plus its parameters, and the chat boundary turns that
//! into a message for whatever platform is attached. Keeping the
//! parameters typed here means the core cannot forget a format slot and
//! the text catalog can be swapped without touching game logic.

use serde::{Deserialize, Serialize};

/// A notification the core wants delivered to a user.
///
/// Each variant corresponds to one moment in the game lifecycle; the
/// fields are the values the rendered text interpolates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// A new game started; invite the first guess.
    GameStarted { attempts_left: u32 },

    /// The user has no stored settings record at all.
    SettingsNotFound,

    /// Settings exist but required fields are unset.
    /// `missing` holds the human-readable field names, in display order.
    SettingsIncomplete { missing: Vec<String> },

    /// The guess was below the target: the secret number is higher.
    TargetHigher { attempts_left: u32 },

    /// The guess was above the target: the secret number is lower.
    TargetLower { attempts_left: u32 },

    /// The user guessed the target.
    GameWon { attempts_used: u32, elapsed_secs: u64 },

    /// The attempt budget ran out.
    GameLostAttempts,

    /// The time limit elapsed before a correct guess.
    GameLostTimeout { time_limit_secs: u64 },
}
