//! The scoring engine: converts task lifecycle events into ledger state.
//!
//! Point sources on completion, in order: priority base points, due-date
//! timing bonus, once-per-day goal bonus, once-ever streak milestone bonus.
//! Un-completion reverses only the base points and the completion count;
//! streak, daily progress, urgent count and bonus awards stay as they are.
//! That asymmetry is deliberate and covered by tests.
//!
//! Operations mutate the ledger in place and return the events they
//! produced, finishing with an achievement scan. Inputs are pre-validated
//! by the caller; nothing here can fail.

use chrono::{DateTime, NaiveDate, Utc};

use super::{achievements, daily, ledger::StatsLedger, streak};
use crate::events::Event;
use crate::task::{Priority, Task};

/// Bonus for completing strictly before the due date.
pub const EARLY_BONUS: u64 = 10;
/// Bonus for completing on the due date itself.
pub const DUE_DAY_BONUS: u64 = 5;
/// Once-per-day bonus for reaching the daily goal.
pub const DAILY_GOAL_BONUS: u64 = 25;
/// Once-ever bonus for each streak milestone.
pub const STREAK_MILESTONE_BONUS: u64 = 50;
/// Streak lengths that pay a milestone bonus.
pub const STREAK_MILESTONES: [u32; 3] = [3, 7, 30];

/// Timing bonus for completing at `now` against an optional due date.
fn timing_bonus(due_date: Option<NaiveDate>, now: DateTime<Utc>) -> u64 {
    let Some(due) = due_date else { return 0 };
    let today = now.date_naive();
    if today < due {
        EARLY_BONUS
    } else if today == due {
        DUE_DAY_BONUS
    } else {
        0
    }
}

/// Record a task creation.
pub fn create(ledger: &mut StatsLedger, priority: Priority, now: DateTime<Utc>) -> Vec<Event> {
    ledger.tasks_created += 1;
    ledger.used_priorities.insert(priority);

    let mut events = vec![Event::TaskCreated { priority, at: now }];
    push_unlocks(&mut events, achievements::evaluate(ledger, now), now);
    events
}

/// Record a task completion and pay out every applicable award.
pub fn complete(ledger: &mut StatsLedger, task: &Task, now: DateTime<Utc>) -> Vec<Event> {
    let base = task.priority.base_points();
    let timing = timing_bonus(task.due_date, now);

    ledger.points += base + timing;
    ledger.total_completed += 1;
    if task.priority == Priority::Urgent {
        ledger.urgent_completed += 1;
    }

    streak::advance_streak(ledger, now);
    daily::record_completion(ledger, now);

    let mut events = vec![Event::TaskCompleted {
        task_id: task.id.clone(),
        base_points: base,
        timing_bonus: timing,
        at: now,
    }];

    if ledger.daily_progress >= ledger.daily_goal && !ledger.goal_rewarded_today {
        ledger.points += DAILY_GOAL_BONUS;
        ledger.goal_rewarded_today = true;
        events.push(Event::DailyGoalReached {
            goal: ledger.daily_goal,
            bonus: DAILY_GOAL_BONUS,
            at: now,
        });
    }

    if STREAK_MILESTONES.contains(&ledger.streak)
        && !ledger.streak_bonus_awarded.contains(&ledger.streak)
    {
        ledger.points += STREAK_MILESTONE_BONUS;
        ledger.streak_bonus_awarded.insert(ledger.streak);
        events.push(Event::StreakMilestone {
            length: ledger.streak,
            bonus: STREAK_MILESTONE_BONUS,
            at: now,
        });
    }

    push_unlocks(&mut events, achievements::evaluate(ledger, now), now);
    events
}

/// Reverse a completion. Takes back the base priority points and the
/// completion count, both clamped at zero. `now` stamps the emitted
/// events only; no scoring decision reads it.
pub fn uncomplete(ledger: &mut StatsLedger, task: &Task, now: DateTime<Utc>) -> Vec<Event> {
    let base = task.priority.base_points();
    ledger.total_completed = ledger.total_completed.saturating_sub(1);
    ledger.points = ledger.points.saturating_sub(base);

    let mut events = vec![Event::TaskReopened {
        task_id: task.id.clone(),
        points_reversed: base,
        at: now,
    }];
    // Counters only decreased, so this cannot unlock anything; the scan
    // runs anyway to keep the one control path per mutation.
    push_unlocks(&mut events, achievements::evaluate(ledger, now), now);
    events
}

fn push_unlocks(
    events: &mut Vec<Event>,
    unlocked: Vec<&'static achievements::AchievementDef>,
    now: DateTime<Utc>,
) {
    for def in unlocked {
        events.push(Event::AchievementUnlocked {
            id: def.id.to_string(),
            name: def.name.to_string(),
            at: now,
        });
    }
}
