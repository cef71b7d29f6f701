//! Streak tracking across completion events.

use chrono::{DateTime, Utc};

use super::ledger::StatsLedger;

/// Advance the completion streak. Called exactly once per completion event.
///
/// The day difference is the whole-day floor of `now - last_completion_date`:
/// 0 leaves the streak unchanged (same day), 1 extends it, 2 or more resets
/// it to 1. A negative difference (clock skew or a backdated completion) is
/// treated as same-day rather than an error.
///
/// There is deliberately no inverse operation: reversing a completion does
/// not roll back streak state.
pub fn advance_streak(ledger: &mut StatsLedger, now: DateTime<Utc>) {
    match ledger.last_completion_date {
        None => ledger.streak = 1,
        Some(last) => {
            let days = (now - last).num_days();
            if days == 1 {
                ledger.streak += 1;
            } else if days >= 2 {
                ledger.streak = 1;
            }
            // days <= 0: same day or skew, streak unchanged
        }
    }
    ledger.last_completion_date = Some(now);
    ledger.best_streak = ledger.best_streak.max(ledger.streak);
}
