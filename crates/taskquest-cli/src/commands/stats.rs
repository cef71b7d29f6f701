use chrono::Utc;
use clap::Subcommand;
use taskquest_core::motivation::{self, MessageKind};
use taskquest_core::stats::daily;
use taskquest_core::storage::{Config, Database};
use taskquest_core::CoreError;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Full ledger as JSON
    Show,
    /// Human-readable summary
    Summary,
}

pub fn run(action: StatsAction) -> Result<(), CoreError> {
    let db = Database::open()?;
    let config = Config::load_or_default();

    let mut ledger = db.load_ledger()?;
    ledger.daily_goal = config.stats.daily_goal;
    // Roll the daily counters over before presenting them.
    daily::sync_day(&mut ledger, Utc::now());
    db.save_ledger(&ledger)?;

    match action {
        StatsAction::Show => {
            println!("{}", serde_json::to_string_pretty(&ledger)?);
        }
        StatsAction::Summary => {
            println!("Points:         {}", ledger.points);
            println!(
                "Completed:      {} ({} urgent)",
                ledger.total_completed, ledger.urgent_completed
            );
            println!(
                "Streak:         {} day(s), best {}",
                ledger.streak, ledger.best_streak
            );
            println!(
                "Daily progress: {}/{} ({}%)",
                ledger.daily_progress,
                ledger.daily_goal,
                ledger.daily_goal_percent()
            );
            println!(
                "Achievements:   {}/{}",
                ledger.achievements.len(),
                taskquest_core::DEFINITIONS.len()
            );
            if config.motivation.enabled {
                println!();
                println!("{}", motivation::pick(MessageKind::General));
            }
        }
    }
    Ok(())
}
