//! Per-day completion progress.
//!
//! The ledger's daily fields only ever describe `daily_progress_date`.
//! `sync_day` is the single reset entry point: every operation that reads
//! or writes a daily field calls it first, so the rollover logic lives in
//! exactly one place.

use chrono::{DateTime, Utc};

use super::ledger::StatsLedger;

/// Roll the daily counters over to `now`'s calendar day if needed.
/// Idempotent; safe to call before any read or write of daily fields.
pub fn sync_day(ledger: &mut StatsLedger, now: DateTime<Utc>) {
    let today = now.date_naive();
    if ledger.daily_progress_date != Some(today) {
        ledger.daily_progress = 0;
        ledger.goal_rewarded_today = false;
        ledger.daily_progress_date = Some(today);
    }
}

/// Count one completion toward today's progress.
///
/// The goal bonus itself is paid by the scoring engine afterwards, gated
/// by `goal_rewarded_today`.
pub fn record_completion(ledger: &mut StatsLedger, now: DateTime<Utc>) {
    sync_day(ledger, now);
    ledger.daily_progress += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn first_sync_sets_the_day() {
        let mut ledger = StatsLedger::default();
        sync_day(&mut ledger, at(1, 8));
        assert_eq!(ledger.daily_progress_date, Some(at(1, 8).date_naive()));
        assert_eq!(ledger.daily_progress, 0);
    }

    #[test]
    fn sync_is_idempotent_within_a_day() {
        let mut ledger = StatsLedger::default();
        record_completion(&mut ledger, at(1, 8));
        record_completion(&mut ledger, at(1, 12));
        sync_day(&mut ledger, at(1, 23));
        assert_eq!(ledger.daily_progress, 2);
    }

    #[test]
    fn new_day_resets_progress_and_goal_flag() {
        let mut ledger = StatsLedger::default();
        record_completion(&mut ledger, at(1, 8));
        ledger.goal_rewarded_today = true;

        record_completion(&mut ledger, at(2, 8));
        assert_eq!(ledger.daily_progress, 1);
        assert!(!ledger.goal_rewarded_today);
        assert_eq!(ledger.daily_progress_date, Some(at(2, 8).date_naive()));
    }
}
