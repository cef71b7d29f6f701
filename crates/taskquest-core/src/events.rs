use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::Priority;

/// Every ledger mutation produces one or more Events.
/// The host renders or logs them; the engine never interprets them back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TaskCreated {
        priority: Priority,
        at: DateTime<Utc>,
    },
    TaskCompleted {
        task_id: String,
        base_points: u64,
        timing_bonus: u64,
        at: DateTime<Utc>,
    },
    /// A completion was reversed. Only the base points come back off.
    TaskReopened {
        task_id: String,
        points_reversed: u64,
        at: DateTime<Utc>,
    },
    /// Today's completion count reached the daily goal.
    DailyGoalReached {
        goal: u32,
        bonus: u64,
        at: DateTime<Utc>,
    },
    /// The streak hit a milestone length for the first time ever.
    StreakMilestone {
        length: u32,
        bonus: u64,
        at: DateTime<Utc>,
    },
    AchievementUnlocked {
        id: String,
        name: String,
        at: DateTime<Utc>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn events_serialize_with_type_tag() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let event = Event::StreakMilestone {
            length: 3,
            bonus: 50,
            at,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "StreakMilestone");
        assert_eq!(json["length"], 3);
    }
}
