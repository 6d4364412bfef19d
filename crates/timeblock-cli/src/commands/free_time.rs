//! Free-time window commands for CLI.

use clap::Subcommand;
use timeblock_core::FreeWindow;

use crate::store;

#[derive(Subcommand)]
pub enum FreeTimeAction {
    /// Add a free-time window
    Add {
        /// Window date (YYYY-MM-DD)
        date: chrono::NaiveDate,
        /// Available hours
        hours: f64,
    },
    /// List windows
    List,
    /// Remove a window by index
    Remove {
        /// Window index
        index: usize,
    },
}

pub fn run(action: FreeTimeAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        FreeTimeAction::Add { date, hours } => {
            let mut windows = store::load_windows()?;
            windows.push(FreeWindow::new(date, hours));
            store::save_windows(&windows)?;
            println!("Free time added: {date} ({hours}h)");
        }
        FreeTimeAction::List => {
            let windows = store::load_windows()?;
            println!("{}", serde_json::to_string_pretty(&windows)?);
        }
        FreeTimeAction::Remove { index } => {
            let mut windows = store::load_windows()?;
            if index >= windows.len() {
                return Err(format!(
                    "window index {index} out of range (length: {})",
                    windows.len()
                )
                .into());
            }
            windows.remove(index);
            store::save_windows(&windows)?;
            println!("Free time removed: {index}");
        }
    }

    Ok(())
}
