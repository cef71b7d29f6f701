//! List-view helpers: filtering and sorting of task collections.
//!
//! Pure functions over in-memory task lists; the storage layer returns
//! everything and the presentation layer narrows it down.

use std::cmp::Ordering;
use std::str::FromStr;

use super::{Priority, Task};

/// Completion-status filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    /// Both active and completed tasks
    All,
    /// Not yet completed
    Active,
    /// Completed only
    Completed,
}

impl Default for StatusFilter {
    fn default() -> Self {
        StatusFilter::All
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "completed" => Ok(StatusFilter::Completed),
            other => Err(format!("unknown status filter: {other}")),
        }
    }
}

/// Filter criteria for task list views. Empty criteria match everything.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub status: StatusFilter,
    pub priority: Option<Priority>,
    /// Case-insensitive substring match against the category tag.
    pub category: Option<String>,
    /// Case-insensitive substring match against title and description.
    pub search: Option<String>,
}

impl TaskFilter {
    /// Whether a task passes every criterion.
    pub fn matches(&self, task: &Task) -> bool {
        match self.status {
            StatusFilter::All => {}
            StatusFilter::Active => {
                if task.completed {
                    return false;
                }
            }
            StatusFilter::Completed => {
                if !task.completed {
                    return false;
                }
            }
        }

        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }

        if let Some(ref category) = self.category {
            let needle = category.to_lowercase();
            let hit = task
                .category
                .as_deref()
                .map(|c| c.to_lowercase().contains(&needle))
                .unwrap_or(false);
            if !hit {
                return false;
            }
        }

        if let Some(ref query) = self.search {
            let needle = query.to_lowercase();
            let in_title = task.title.to_lowercase().contains(&needle);
            let in_description = task
                .description
                .as_deref()
                .map(|d| d.to_lowercase().contains(&needle))
                .unwrap_or(false);
            if !in_title && !in_description {
                return false;
            }
        }

        true
    }

    /// Apply the filter to a task list.
    pub fn apply(&self, tasks: Vec<Task>) -> Vec<Task> {
        tasks.into_iter().filter(|t| self.matches(t)).collect()
    }
}

/// Sort order for task list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Newest first (default)
    CreatedDesc,
    /// Oldest first
    CreatedAsc,
    /// Due date ascending; tasks without a due date last
    DueAsc,
    /// Heaviest priority first
    PriorityDesc,
    /// Title, lexicographic
    TitleAsc,
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::CreatedDesc
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created-desc" => Ok(SortKey::CreatedDesc),
            "created-asc" => Ok(SortKey::CreatedAsc),
            "due-asc" => Ok(SortKey::DueAsc),
            "priority-desc" => Ok(SortKey::PriorityDesc),
            "title-asc" => Ok(SortKey::TitleAsc),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

/// Sort a task list in place by the given key.
pub fn sort_tasks(tasks: &mut [Task], key: SortKey) {
    match key {
        SortKey::CreatedDesc => tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::CreatedAsc => tasks.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortKey::DueAsc => tasks.sort_by(|a, b| {
            // Missing due dates sort last; ties fall back to creation order.
            match (a.due_date, b.due_date) {
                (Some(da), Some(db)) => da
                    .cmp(&db)
                    .then_with(|| a.created_at.cmp(&b.created_at)),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => a.created_at.cmp(&b.created_at),
            }
        }),
        SortKey::PriorityDesc => tasks.sort_by(|a, b| b.priority.cmp(&a.priority)),
        SortKey::TitleAsc => tasks.sort_by(|a, b| a.title.cmp(&b.title)),
    }
}
