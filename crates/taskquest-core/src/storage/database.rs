//! SQLite-based storage for tasks and the stats ledger snapshot.
//!
//! Tasks live in a `tasks` table; the ledger is a JSON snapshot under the
//! `stats` key of a `kv` table. Loading the snapshot never fails: a missing
//! key or corrupt JSON yields a fresh default ledger (data loss is
//! preferred over a crash), and fields added after a snapshot was written
//! fill in via serde defaults.

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use super::data_dir;
use crate::error::StorageError;
use crate::stats::StatsLedger;
use crate::task::{Priority, Task};

const LEDGER_KEY: &str = "stats";

// === Row helpers ===

/// Parse priority from its storage string.
fn parse_priority(s: &str) -> Priority {
    s.parse().unwrap_or(Priority::Low)
}

/// Parse an RFC3339 timestamp column, falling back to the epoch.
fn parse_datetime(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| DateTime::<Utc>::UNIX_EPOCH)
}

/// Parse a `%Y-%m-%d` date column.
fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Build a Task from a `SELECT *` row in column order.
fn row_to_task(row: &rusqlite::Row) -> Result<Task, rusqlite::Error> {
    let priority_str: String = row.get(3)?;
    let due_str: Option<String> = row.get(4)?;
    let created_str: String = row.get(7)?;
    let completed_str: Option<String> = row.get(8)?;

    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        priority: parse_priority(&priority_str),
        due_date: due_str.as_deref().and_then(parse_date),
        category: row.get(5)?,
        completed: row.get(6)?,
        created_at: parse_datetime(&created_str),
        completed_at: completed_str.as_deref().map(parse_datetime),
    })
}

/// SQLite database for tasks and the ledger snapshot.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/taskquest/taskquest.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, StorageError> {
        Self::open_at(data_dir()?.join("taskquest.db"))
    }

    /// Open the database at an explicit path.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| StorageError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS tasks (
                id           TEXT PRIMARY KEY,
                title        TEXT NOT NULL,
                description  TEXT,
                priority     TEXT NOT NULL,
                due_date     TEXT,
                category     TEXT,
                completed    INTEGER NOT NULL DEFAULT 0,
                created_at   TEXT NOT NULL,
                completed_at TEXT
            );

            CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_tasks_completed ON tasks(completed);
            CREATE INDEX IF NOT EXISTS idx_tasks_created_at ON tasks(created_at);",
        )?;
        Ok(())
    }

    // === Task CRUD ===

    /// Insert a new task.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub fn insert_task(&self, task: &Task) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO tasks (id, title, description, priority, due_date, category, completed, created_at, completed_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                task.id,
                task.title,
                task.description,
                task.priority.as_str(),
                task.due_date.map(|d| d.format("%Y-%m-%d").to_string()),
                task.category,
                task.completed,
                task.created_at.to_rfc3339(),
                task.completed_at.map(|t| t.to_rfc3339()),
            ],
        )?;
        Ok(())
    }

    /// Fetch a task by id.
    pub fn get_task(&self, id: &str) -> Result<Option<Task>, StorageError> {
        let task = self
            .conn
            .query_row("SELECT * FROM tasks WHERE id = ?1", params![id], |row| {
                row_to_task(row)
            })
            .optional()?;
        Ok(task)
    }

    /// Overwrite an existing task.
    ///
    /// # Errors
    /// Returns an error if the update fails.
    pub fn update_task(&self, task: &Task) -> Result<(), StorageError> {
        self.conn.execute(
            "UPDATE tasks SET title = ?2, description = ?3, priority = ?4, due_date = ?5,
                    category = ?6, completed = ?7, created_at = ?8, completed_at = ?9
             WHERE id = ?1",
            params![
                task.id,
                task.title,
                task.description,
                task.priority.as_str(),
                task.due_date.map(|d| d.format("%Y-%m-%d").to_string()),
                task.category,
                task.completed,
                task.created_at.to_rfc3339(),
                task.completed_at.map(|t| t.to_rfc3339()),
            ],
        )?;
        Ok(())
    }

    /// Delete a task by id.
    pub fn delete_task(&self, id: &str) -> Result<(), StorageError> {
        self.conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        Ok(())
    }

    /// All tasks, newest first.
    pub fn list_tasks(&self) -> Result<Vec<Task>, StorageError> {
        let mut stmt = self
            .conn
            .prepare("SELECT * FROM tasks ORDER BY created_at DESC")?;
        let rows = stmt.query_map([], |row| row_to_task(row))?;
        let mut tasks = Vec::new();
        for row in rows {
            tasks.push(row?);
        }
        Ok(tasks)
    }

    // === Ledger snapshot ===

    /// Load the stats ledger snapshot.
    ///
    /// A missing or unreadable snapshot yields `StatsLedger::default()`;
    /// only the underlying query can fail.
    pub fn load_ledger(&self) -> Result<StatsLedger, StorageError> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![LEDGER_KEY],
                |row| row.get(0),
            )
            .optional()?;

        Ok(raw
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default())
    }

    /// Persist the stats ledger snapshot. Called after every mutation.
    ///
    /// # Errors
    /// Returns an error if serialization or the upsert fails.
    pub fn save_ledger(&self, ledger: &StatsLedger) -> Result<(), StorageError> {
        let json = serde_json::to_string(ledger)?;
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![LEDGER_KEY, json],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_task() -> Task {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        let mut task = Task::new("Water the plants", Priority::Medium, now);
        task.due_date = NaiveDate::from_ymd_opt(2024, 6, 3);
        task.category = Some("home".into());
        task
    }

    #[test]
    fn task_roundtrip() {
        let db = Database::open_memory().unwrap();
        let task = sample_task();
        db.insert_task(&task).unwrap();

        let loaded = db.get_task(&task.id).unwrap().unwrap();
        assert_eq!(loaded.title, task.title);
        assert_eq!(loaded.priority, Priority::Medium);
        assert_eq!(loaded.due_date, task.due_date);
        assert_eq!(loaded.category.as_deref(), Some("home"));
        assert_eq!(loaded.created_at, task.created_at);
        assert!(!loaded.completed);
    }

    #[test]
    fn update_and_delete_task() {
        let db = Database::open_memory().unwrap();
        let mut task = sample_task();
        db.insert_task(&task).unwrap();

        task.completed = true;
        task.completed_at = Some(Utc.with_ymd_and_hms(2024, 6, 2, 10, 0, 0).unwrap());
        db.update_task(&task).unwrap();
        let loaded = db.get_task(&task.id).unwrap().unwrap();
        assert!(loaded.completed);
        assert_eq!(loaded.completed_at, task.completed_at);

        db.delete_task(&task.id).unwrap();
        assert!(db.get_task(&task.id).unwrap().is_none());
    }

    #[test]
    fn list_tasks_newest_first() {
        let db = Database::open_memory().unwrap();
        for hour in [9, 11, 10] {
            let now = Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap();
            db.insert_task(&Task::new(format!("t{hour}"), Priority::Low, now))
                .unwrap();
        }
        let tasks = db.list_tasks().unwrap();
        assert_eq!(tasks[0].title, "t11");
        assert_eq!(tasks[2].title, "t9");
    }

    #[test]
    fn missing_ledger_snapshot_defaults() {
        let db = Database::open_memory().unwrap();
        let ledger = db.load_ledger().unwrap();
        assert_eq!(ledger.points, 0);
        assert_eq!(ledger.daily_goal, 5);
    }

    #[test]
    fn ledger_snapshot_roundtrip() {
        let db = Database::open_memory().unwrap();
        let mut ledger = StatsLedger::default();
        ledger.points = 85;
        ledger.streak = 3;
        ledger.streak_bonus_awarded.insert(3);
        db.save_ledger(&ledger).unwrap();

        let loaded = db.load_ledger().unwrap();
        assert_eq!(loaded.points, 85);
        assert_eq!(loaded.streak, 3);
        assert!(loaded.streak_bonus_awarded.contains(&3));
    }

    #[test]
    fn corrupt_ledger_snapshot_falls_back_to_default() {
        let db = Database::open_memory().unwrap();
        db.conn
            .execute(
                "INSERT INTO kv (key, value) VALUES ('stats', '{not json')",
                [],
            )
            .unwrap();
        let ledger = db.load_ledger().unwrap();
        assert_eq!(ledger.points, 0);
        assert!(ledger.achievements.is_empty());
    }

    #[test]
    fn data_survives_reopen() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("taskquest.db");

        {
            let db = Database::open_at(&path).unwrap();
            db.insert_task(&sample_task()).unwrap();
            let mut ledger = StatsLedger::default();
            ledger.points = 42;
            db.save_ledger(&ledger).unwrap();
        }

        let db = Database::open_at(&path).unwrap();
        assert_eq!(db.list_tasks().unwrap().len(), 1);
        assert_eq!(db.load_ledger().unwrap().points, 42);
    }

    #[test]
    fn save_ledger_overwrites_previous_snapshot() {
        let db = Database::open_memory().unwrap();
        let mut ledger = StatsLedger::default();
        db.save_ledger(&ledger).unwrap();
        ledger.points = 10;
        db.save_ledger(&ledger).unwrap();
        assert_eq!(db.load_ledger().unwrap().points, 10);
    }
}
