//! Achievement definitions and evaluation.
//!
//! Achievements are a fixed ordered table of tagged records whose
//! predicates are pure functions of ledger state. Evaluation unlocks each
//! satisfied achievement exactly once; an unlocked achievement is never
//! re-locked or re-timed, so the scan is safe to run after any ledger
//! mutation and on passive reads.

use chrono::{DateTime, Utc};

use super::ledger::StatsLedger;
use crate::task::Priority;

/// A single achievement rule.
pub struct AchievementDef {
    /// Stable identifier, used as the ledger map key.
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Display description
    pub description: &'static str,
    /// Display grouping
    pub category: &'static str,
    /// Unlock predicate over ledger state.
    pub check: fn(&StatsLedger) -> bool,
}

/// All achievements, in evaluation (and display) order.
pub const DEFINITIONS: &[AchievementDef] = &[
    AchievementDef {
        id: "first-step",
        name: "First Step",
        description: "Complete your first task",
        category: "Starter",
        check: |l| l.total_completed >= 1,
    },
    AchievementDef {
        id: "getting-started",
        name: "Getting Started",
        description: "Create five tasks",
        category: "Starter",
        check: |l| l.tasks_created >= 5,
    },
    AchievementDef {
        id: "organized",
        name: "Organized",
        description: "Use each priority level at least once",
        category: "Starter",
        check: |l| Priority::ALL.iter().all(|p| l.used_priorities.contains(p)),
    },
    AchievementDef {
        id: "productive-day",
        name: "Productive Day",
        description: "Complete five tasks in a single day",
        category: "Productivity",
        check: |l| l.daily_progress >= 5,
    },
    AchievementDef {
        id: "week-warrior",
        name: "Week Warrior",
        description: "Complete twenty total tasks",
        category: "Productivity",
        check: |l| l.total_completed >= 20,
    },
    AchievementDef {
        id: "on-a-roll",
        name: "On a Roll",
        description: "Maintain a three day streak",
        category: "Streak",
        check: |l| l.streak >= 3,
    },
    AchievementDef {
        id: "committed",
        name: "Committed",
        description: "Maintain a seven day streak",
        category: "Streak",
        check: |l| l.streak >= 7,
    },
    AchievementDef {
        id: "priority-master",
        name: "Priority Master",
        description: "Complete ten urgent tasks",
        category: "Special",
        check: |l| l.urgent_completed >= 10,
    },
];

/// Look up a definition by id.
pub fn find(id: &str) -> Option<&'static AchievementDef> {
    DEFINITIONS.iter().find(|d| d.id == id)
}

/// Scan the table in order and unlock newly satisfied achievements,
/// recording `now` as the unlock time. Returns what was unlocked by this
/// call. Idempotent.
pub fn evaluate(ledger: &mut StatsLedger, now: DateTime<Utc>) -> Vec<&'static AchievementDef> {
    let mut unlocked = Vec::new();
    for def in DEFINITIONS {
        if !ledger.achievements.contains_key(def.id) && (def.check)(ledger) {
            ledger.achievements.insert(def.id.to_string(), now);
            unlocked.push(def);
        }
    }
    unlocked
}
