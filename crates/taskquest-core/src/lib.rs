//! # Taskquest Core Library
//!
//! Core business logic for Taskquest, a gamified personal task tracker.
//! All operations are available through this library; the CLI binary is a
//! thin layer over it.
//!
//! ## Architecture
//!
//! - **Stats engine**: converts task lifecycle events (create, complete,
//!   uncomplete) into points, streaks, daily-goal bonuses and achievement
//!   unlocks. Every time-sensitive operation takes `now` explicitly, so
//!   the engine is deterministic under test.
//! - **Storage**: SQLite task store plus a JSON ledger snapshot, and
//!   TOML-based configuration
//! - **Events**: every ledger mutation produces [`Event`]s for the host to
//!   render
//!
//! ## Key Components
//!
//! - [`StatsLedger`]: the durable aggregate of gamification counters
//! - [`stats::scoring`]: the award/reversal pipeline
//! - [`stats::achievements`]: the fixed achievement rule table
//! - [`Database`]: task and ledger persistence
//! - [`Config`]: application configuration management

pub mod error;
pub mod events;
pub mod motivation;
pub mod stats;
pub mod storage;
pub mod task;

pub use error::{ConfigError, CoreError, StorageError};
pub use events::Event;
pub use stats::{AchievementDef, StatsLedger, DEFAULT_DAILY_GOAL, DEFINITIONS};
pub use storage::{Config, Database};
pub use task::{Priority, Task};
