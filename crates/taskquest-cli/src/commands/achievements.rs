use chrono::Utc;
use clap::Subcommand;
use taskquest_core::stats::{achievements, daily};
use taskquest_core::storage::{Config, Database};
use taskquest_core::CoreError;

#[derive(Subcommand)]
pub enum AchievementsAction {
    /// List all achievements with their unlock state
    List,
}

pub fn run(action: AchievementsAction) -> Result<(), CoreError> {
    let db = Database::open()?;
    let config = Config::load_or_default();

    match action {
        AchievementsAction::List => {
            let now = Utc::now();
            let mut ledger = db.load_ledger()?;
            ledger.daily_goal = config.stats.daily_goal;
            daily::sync_day(&mut ledger, now);
            // A passive scan can still unlock: state may have changed
            // since the last lifecycle event was scored.
            let newly = achievements::evaluate(&mut ledger, now);
            db.save_ledger(&ledger)?;

            for def in taskquest_core::DEFINITIONS {
                let status = match ledger.achievements.get(def.id) {
                    Some(at) => format!("unlocked {}", at.format("%Y-%m-%d")),
                    None => "locked".to_string(),
                };
                println!(
                    "[{}] {} - {} ({})",
                    def.category, def.name, def.description, status
                );
            }
            if !newly.is_empty() {
                println!();
                for def in newly {
                    println!("Achievement unlocked: {}", def.name);
                }
            }
        }
    }
    Ok(())
}
