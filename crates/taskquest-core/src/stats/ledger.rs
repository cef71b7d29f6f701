//! The stats ledger: the durable aggregate of gamification counters.
//!
//! The ledger is created once with default values, mutated by the scoring
//! engine on every task lifecycle event, and persisted as an opaque JSON
//! snapshot. Every field carries a serde default so snapshots written by
//! older versions load cleanly with the documented defaults.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::task::Priority;

/// Default completions-per-day target.
pub const DEFAULT_DAILY_GOAL: u32 = 5;

fn default_daily_goal() -> u32 {
    DEFAULT_DAILY_GOAL
}

/// Cumulative gamification state for one user.
///
/// Invariants upheld by the engine:
/// - `best_streak >= streak`
/// - `daily_progress` pertains only to `daily_progress_date`
/// - achievements and `streak_bonus_awarded` entries are never removed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsLedger {
    /// Total points. Reversals clamp at zero, never below.
    #[serde(default)]
    pub points: u64,
    /// Completions currently active (decremented on un-completion).
    #[serde(default)]
    pub total_completed: u64,
    /// Completions of urgent-priority tasks. Not reversed on un-completion.
    #[serde(default)]
    pub urgent_completed: u64,
    /// Consecutive calendar days with at least one completion.
    #[serde(default)]
    pub streak: u32,
    /// High-water mark of `streak`.
    #[serde(default)]
    pub best_streak: u32,
    /// Timestamp of the most recent completion event.
    #[serde(default)]
    pub last_completion_date: Option<DateTime<Utc>>,
    /// Completions-per-day target for the daily goal bonus.
    #[serde(default = "default_daily_goal")]
    pub daily_goal: u32,
    /// Completions recorded for `daily_progress_date`.
    #[serde(default)]
    pub daily_progress: u32,
    /// Calendar day `daily_progress` applies to.
    #[serde(default)]
    pub daily_progress_date: Option<NaiveDate>,
    /// Whether the daily goal bonus has been paid for `daily_progress_date`.
    #[serde(default)]
    pub goal_rewarded_today: bool,
    /// Priority levels ever used at task creation.
    #[serde(default)]
    pub used_priorities: BTreeSet<Priority>,
    /// Tasks created, lifetime. Monotonic.
    #[serde(default)]
    pub tasks_created: u64,
    /// Streak milestones already paid out. Lifetime, never reset, so a
    /// milestone bonus is paid at most once even across streak resets.
    #[serde(default)]
    pub streak_bonus_awarded: BTreeSet<u32>,
    /// Unlocked achievements, id to unlock timestamp. Absent = locked.
    #[serde(default)]
    pub achievements: BTreeMap<String, DateTime<Utc>>,
}

impl Default for StatsLedger {
    fn default() -> Self {
        StatsLedger {
            points: 0,
            total_completed: 0,
            urgent_completed: 0,
            streak: 0,
            best_streak: 0,
            last_completion_date: None,
            daily_goal: DEFAULT_DAILY_GOAL,
            daily_progress: 0,
            daily_progress_date: None,
            goal_rewarded_today: false,
            used_priorities: BTreeSet::new(),
            tasks_created: 0,
            streak_bonus_awarded: BTreeSet::new(),
            achievements: BTreeMap::new(),
        }
    }
}

impl StatsLedger {
    /// Progress toward the daily goal as a percentage, capped at 100.
    pub fn daily_goal_percent(&self) -> u32 {
        if self.daily_goal == 0 {
            return 100;
        }
        (self.daily_progress * 100 / self.daily_goal).min(100)
    }

    /// Whether the achievement with the given id is unlocked.
    pub fn is_unlocked(&self, id: &str) -> bool {
        self.achievements.contains_key(id)
    }
}
