//! Scheduling commands for CLI.

use clap::Subcommand;
use timeblock_core::{Scheduler, SchedulerConfig};

use crate::store;

#[derive(Subcommand)]
pub enum PlanAction {
    /// Run the scheduler over stored tasks and free time
    Run {
        /// Reference date override (YYYY-MM-DD); defaults to today
        #[arg(long)]
        today: Option<chrono::NaiveDate>,
    },
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PlanAction::Run { today } => {
            let tasks = store::load_tasks()?;
            let windows = store::load_windows()?;

            let mut config = SchedulerConfig::default();
            if let Some(today) = today {
                config.today = today;
            }

            let plan = Scheduler::with_config(config).schedule(&tasks, &windows);
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
    }

    Ok(())
}
