//! Configuration commands for CLI.

use clap::Subcommand;

use crate::store::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (currently only `data_dir`)
        key: String,
        /// New value
        value: String,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            match key.as_str() {
                "data_dir" => config.data_dir = Some(value.clone().into()),
                _ => return Err(format!("unknown config key: {key}").into()),
            }
            config.save()?;
            println!("Set {key} = {value}");
        }
    }

    Ok(())
}
