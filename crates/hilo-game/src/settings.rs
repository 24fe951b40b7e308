//! Settings validation: from a partially filled stored record to a
//! complete, satisfiable game configuration.

use std::fmt;
use std::time::Duration;

use hilo_protocol::UserId;
use hilo_store::StoredSettings;

use crate::GameError;

/// A required settings field that is not filled in yet.
///
/// The `Display` impl renders the names users see in the "missing
/// settings" notice. The range counts as a single field: it is missing
/// when either bound is unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingSetting {
    Range,
    TimeLimit,
    Attempts,
}

impl fmt::Display for MissingSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range => write!(f, "range"),
            Self::TimeLimit => write!(f, "time limit"),
            Self::Attempts => write!(f, "attempt count"),
        }
    }
}

/// Reports which required fields are unset, in display order.
///
/// Pure; no side effects. Absence of the settings record itself is the
/// caller's concern (a different error path), not a missing-field list.
pub fn missing_settings(settings: &StoredSettings) -> Vec<MissingSetting> {
    let mut missing = Vec::new();
    if settings.range_start.is_none() || settings.range_end.is_none() {
        missing.push(MissingSetting::Range);
    }
    if settings.time_limit_secs.is_none() {
        missing.push(MissingSetting::TimeLimit);
    }
    if settings.attempts.is_none() {
        missing.push(MissingSetting::Attempts);
    }
    missing
}

/// A validated, complete game configuration.
///
/// Construction is the only way to get one, so holding a `GameConfig`
/// means: all fields present, range non-empty, attempts and time limit
/// positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Lower bound of the guessing range (inclusive).
    pub range_start: i64,
    /// Upper bound of the guessing range (inclusive).
    pub range_end: i64,
    /// How long one game may run before the timeout monitor ends it.
    pub time_limit: Duration,
    /// Attempt budget for one game.
    pub attempts: u32,
}

impl GameConfig {
    /// Validates a stored settings record into a usable configuration.
    ///
    /// # Errors
    /// - [`GameError::SettingsIncomplete`]: one or more fields unset.
    /// - [`GameError::InvalidSettings`]: fields set but unsatisfiable.
    pub fn from_stored(
        user: UserId,
        stored: &StoredSettings,
    ) -> Result<Self, GameError> {
        let (Some(range_start), Some(range_end), Some(limit_secs), Some(attempts)) = (
            stored.range_start,
            stored.range_end,
            stored.time_limit_secs,
            stored.attempts,
        ) else {
            return Err(GameError::SettingsIncomplete {
                user,
                missing: missing_settings(stored),
            });
        };

        if range_start > range_end {
            return Err(GameError::InvalidSettings {
                user,
                reason: format!("range {range_start}..={range_end} is empty"),
            });
        }
        if attempts == 0 {
            return Err(GameError::InvalidSettings {
                user,
                reason: "attempt count is zero".into(),
            });
        }
        if limit_secs == 0 {
            return Err(GameError::InvalidSettings {
                user,
                reason: "time limit is zero".into(),
            });
        }

        Ok(Self {
            range_start,
            range_end,
            time_limit: Duration::from_secs(limit_secs),
            attempts,
        })
    }
}
