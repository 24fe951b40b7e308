//! The text catalog: one user-facing string per [`Notice`] variant.
//!
//! Kept in a single function so the whole message surface is reviewable
//! at a glance and swappable for another language without touching the
//! core.

use hilo_protocol::Notice;

/// Renders a notice to the string a user reads.
pub fn render(notice: &Notice) -> String {
    match notice {
        Notice::GameStarted { attempts_left } => format!(
            "I picked a number. You have {attempts_left} attempts. Send me your first guess."
        ),
        Notice::SettingsNotFound => {
            "You haven't configured the game yet. Set a range, a time limit and an attempt count first.".to_string()
        }
        Notice::SettingsIncomplete { missing } => format!(
            "Some settings are still missing: {}. Fill them in before playing.",
            missing.join(", ")
        ),
        Notice::TargetHigher { attempts_left } => {
            format!("My number is higher. Attempts left: {attempts_left}.")
        }
        Notice::TargetLower { attempts_left } => {
            format!("My number is lower. Attempts left: {attempts_left}.")
        }
        Notice::GameWon {
            attempts_used,
            elapsed_secs,
        } => format!(
            "You got it! Attempts used: {attempts_used}, time: {elapsed_secs} s."
        ),
        Notice::GameLostAttempts => {
            "You are out of attempts. This one goes to me.".to_string()
        }
        Notice::GameLostTimeout { time_limit_secs } => format!(
            "Time's up ({time_limit_secs} s). This one goes to me."
        ),
    }
}
