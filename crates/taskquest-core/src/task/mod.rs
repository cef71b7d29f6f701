//! Task model.
//!
//! Tasks are owned by the CRUD layer (storage + CLI); the gamification
//! engine consumes them read-only. All timestamps are set by the caller so
//! the engine stays deterministic under test.

pub mod view;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Task priority level.
///
/// Each level maps to a fixed base point value paid out on completion.
/// Ordering is by weight (`Low < Medium < High < Urgent`), which also
/// drives priority sorting in list views.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority (10 points)
    Low,
    /// Medium priority (20 points)
    Medium,
    /// High priority (30 points)
    High,
    /// Urgent priority (50 points)
    Urgent,
}

impl Priority {
    /// All priority levels, in ascending weight order.
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];

    /// Base points awarded when a task of this priority is completed.
    pub fn base_points(&self) -> u64 {
        match self {
            Priority::Low => 10,
            Priority::Medium => 20,
            Priority::High => 30,
            Priority::Urgent => 50,
        }
    }

    /// Stable lowercase name, used for storage and CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Low
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "urgent" => Ok(Priority::Urgent),
            other => Err(format!("unknown priority: {other}")),
        }
    }
}

/// A single tracked task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: String,
    /// Task title
    pub title: String,
    /// Optional description
    pub description: Option<String>,
    /// Priority level
    pub priority: Priority,
    /// Optional due date (date only, no time component)
    pub due_date: Option<NaiveDate>,
    /// Optional free-form category tag
    pub category: Option<String>,
    /// Whether the task is completed
    pub completed: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Completion timestamp (absent while not completed)
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a new task. `now` becomes the creation timestamp.
    pub fn new(title: impl Into<String>, priority: Priority, now: DateTime<Utc>) -> Self {
        Task {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            description: None,
            priority,
            due_date: None,
            category: None,
            completed: false,
            created_at: now,
            completed_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn priority_base_points() {
        assert_eq!(Priority::Low.base_points(), 10);
        assert_eq!(Priority::Medium.base_points(), 20);
        assert_eq!(Priority::High.base_points(), 30);
        assert_eq!(Priority::Urgent.base_points(), 50);
    }

    #[test]
    fn priority_ordering_by_weight() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
        assert!(Priority::High < Priority::Urgent);
    }

    #[test]
    fn priority_roundtrip_via_str() {
        for p in Priority::ALL {
            assert_eq!(p.as_str().parse::<Priority>().unwrap(), p);
        }
        assert!("critical".parse::<Priority>().is_err());
    }

    #[test]
    fn task_creation() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        let task = Task::new("Write report", Priority::High, now);
        assert_eq!(task.title, "Write report");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.created_at, now);
        assert!(!task.completed);
        assert!(task.completed_at.is_none());
        assert!(task.due_date.is_none());
    }
}
