//! Stats and gamification engine.
//!
//! Task lifecycle events (creation, completion, un-completion) flow through
//! the scoring engine, which mutates the [`StatsLedger`] via the streak and
//! daily progress trackers and finishes with an achievement scan. All
//! operations take `now` explicitly and are infallible.

pub mod achievements;
pub mod daily;
pub mod ledger;
pub mod scoring;
pub mod streak;

pub use achievements::{evaluate, AchievementDef, DEFINITIONS};
pub use ledger::{StatsLedger, DEFAULT_DAILY_GOAL};
