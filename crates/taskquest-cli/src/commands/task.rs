//! Task management commands for CLI.

use chrono::{NaiveDate, Utc};
use clap::Subcommand;
use taskquest_core::motivation::{self, MessageKind};
use taskquest_core::stats::scoring;
use taskquest_core::storage::{Config, Database};
use taskquest_core::task::view::{sort_tasks, SortKey, StatusFilter, TaskFilter};
use taskquest_core::task::{Priority, Task};
use taskquest_core::{CoreError, Event};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a new task
    Add {
        /// Task title
        title: String,
        /// Task description
        #[arg(long)]
        description: Option<String>,
        /// Priority: low, medium, high or urgent
        #[arg(long, default_value = "low")]
        priority: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
        /// Free-form category tag
        #[arg(long)]
        category: Option<String>,
    },
    /// List tasks
    List {
        /// Filter by status: all, active or completed
        #[arg(long, default_value = "all")]
        status: String,
        /// Filter by priority
        #[arg(long)]
        priority: Option<String>,
        /// Filter by category (substring match)
        #[arg(long)]
        category: Option<String>,
        /// Search in title and description
        #[arg(long)]
        search: Option<String>,
        /// Sort: created-desc, created-asc, due-asc, priority-desc, title-asc
        #[arg(long, default_value = "created-desc")]
        sort: String,
    },
    /// Get task details
    Show {
        /// Task ID
        id: String,
    },
    /// Update a task
    Update {
        /// Task ID
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New priority
        #[arg(long)]
        priority: Option<String>,
        /// New due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
        /// New category
        #[arg(long)]
        category: Option<String>,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
    /// Complete a task and collect the rewards
    Complete {
        /// Task ID
        id: String,
    },
    /// Reopen a completed task
    Reopen {
        /// Task ID
        id: String,
    },
}

fn parse_due(due: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(due, "%Y-%m-%d")
        .map_err(|_| CoreError::Custom(format!("invalid due date (expected YYYY-MM-DD): {due}")))
}

fn parse_priority(s: &str) -> Result<Priority, CoreError> {
    s.parse().map_err(CoreError::Custom)
}

/// Render engine events as human-readable lines.
fn print_events(events: &[Event]) {
    for event in events {
        match event {
            Event::TaskCompleted {
                base_points,
                timing_bonus,
                ..
            } => {
                if *timing_bonus > 0 {
                    println!("+{} points ({} base, {} timing bonus)", base_points + timing_bonus, base_points, timing_bonus);
                } else {
                    println!("+{base_points} points");
                }
            }
            Event::DailyGoalReached { goal, bonus, .. } => {
                println!("Daily goal of {goal} reached: +{bonus} bonus points!");
            }
            Event::StreakMilestone { length, bonus, .. } => {
                println!("{length}-day streak milestone: +{bonus} bonus points!");
            }
            Event::AchievementUnlocked { name, .. } => {
                println!("Achievement unlocked: {name}");
            }
            Event::TaskReopened {
                points_reversed, ..
            } => {
                println!("-{points_reversed} points");
            }
            Event::TaskCreated { .. } => {}
        }
    }
}

fn maybe_motivate(config: &Config, kind: MessageKind) {
    if config.motivation.enabled {
        println!("{}", motivation::pick(kind));
    }
}

pub fn run(action: TaskAction) -> Result<(), CoreError> {
    let db = Database::open()?;
    let config = Config::load_or_default();

    match action {
        TaskAction::Add {
            title,
            description,
            priority,
            due,
            category,
        } => {
            let now = Utc::now();
            let priority = parse_priority(&priority)?;
            let mut task = Task::new(title, priority, now);
            task.description = description;
            task.category = category;
            if let Some(due) = due {
                task.due_date = Some(parse_due(&due)?);
            }
            db.insert_task(&task)?;

            let mut ledger = db.load_ledger()?;
            ledger.daily_goal = config.stats.daily_goal;
            let events = scoring::create(&mut ledger, priority, now);
            db.save_ledger(&ledger)?;

            println!("Task created: {}", task.id);
            print_events(&events);
            maybe_motivate(&config, MessageKind::Creation);
        }
        TaskAction::List {
            status,
            priority,
            category,
            search,
            sort,
        } => {
            let filter = TaskFilter {
                status: status
                    .parse::<StatusFilter>()
                    .map_err(CoreError::Custom)?,
                priority: priority.as_deref().map(parse_priority).transpose()?,
                category,
                search,
            };
            let sort = sort.parse::<SortKey>().map_err(CoreError::Custom)?;

            let mut tasks = filter.apply(db.list_tasks()?);
            sort_tasks(&mut tasks, sort);
            println!("{}", serde_json::to_string_pretty(&tasks)?);
        }
        TaskAction::Show { id } => match db.get_task(&id)? {
            Some(task) => println!("{}", serde_json::to_string_pretty(&task)?),
            None => println!("Task not found: {id}"),
        },
        TaskAction::Update {
            id,
            title,
            description,
            priority,
            due,
            category,
        } => {
            let mut task = db
                .get_task(&id)?
                .ok_or_else(|| CoreError::Custom(format!("Task not found: {id}")))?;

            if let Some(t) = title {
                task.title = t;
            }
            if let Some(d) = description {
                task.description = Some(d);
            }
            if let Some(p) = priority {
                task.priority = parse_priority(&p)?;
            }
            if let Some(d) = due {
                task.due_date = Some(parse_due(&d)?);
            }
            if let Some(c) = category {
                task.category = Some(c);
            }

            db.update_task(&task)?;
            println!("Task updated:");
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::Delete { id } => {
            db.delete_task(&id)?;
            println!("Task deleted: {id}");
        }
        TaskAction::Complete { id } => {
            let mut task = db
                .get_task(&id)?
                .ok_or_else(|| CoreError::Custom(format!("Task not found: {id}")))?;
            if task.completed {
                println!("Task already completed: {id}");
                return Ok(());
            }

            let now = Utc::now();
            task.completed = true;
            task.completed_at = Some(now);

            let mut ledger = db.load_ledger()?;
            ledger.daily_goal = config.stats.daily_goal;
            let events = scoring::complete(&mut ledger, &task, now);

            db.update_task(&task)?;
            db.save_ledger(&ledger)?;

            println!("Task completed: {}", task.title);
            print_events(&events);
            println!(
                "Daily progress: {}/{}",
                ledger.daily_progress, ledger.daily_goal
            );
            maybe_motivate(&config, MessageKind::Completion);
        }
        TaskAction::Reopen { id } => {
            let mut task = db
                .get_task(&id)?
                .ok_or_else(|| CoreError::Custom(format!("Task not found: {id}")))?;
            if !task.completed {
                println!("Task is not completed: {id}");
                return Ok(());
            }

            let now = Utc::now();
            task.completed = false;
            task.completed_at = None;

            let mut ledger = db.load_ledger()?;
            ledger.daily_goal = config.stats.daily_goal;
            let events = scoring::uncomplete(&mut ledger, &task, now);

            db.update_task(&task)?;
            db.save_ledger(&ledger)?;

            println!("Task reopened: {}", task.title);
            print_events(&events);
        }
    }
    Ok(())
}
