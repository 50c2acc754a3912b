//! Config commands

use crate::config::Config;
use crate::ConfigCommands;

pub async fn handle(action: ConfigCommands) -> Result<(), String> {
    match action {
        ConfigCommands::Init => {
            let config = Config::default();
            config.save()?;
            println!("Configuration initialized");
        }
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load(None)?;
            match key.as_str() {
                "api_url" => config.api_url = Some(value),
                "default_format" => config.default_format = Some(value),
                other => return Err(format!("unknown config key: {}", other)),
            }
            config.save()?;
            println!("Set {}", key);
        }
        ConfigCommands::Get { key } => {
            let config = Config::load(None)?;
            let value = match key.as_str() {
                "api_url" => config.api_url,
                "default_format" => config.default_format,
                other => return Err(format!("unknown config key: {}", other)),
            };
            println!("{}", value.unwrap_or_else(|| "(unset)".into()));
        }
        ConfigCommands::List => {
            let config = Config::load(None)?;
            println!(
                "api_url = {}",
                config.api_url.unwrap_or_else(|| "(unset)".into())
            );
            println!(
                "default_format = {}",
                config.default_format.unwrap_or_else(|| "(unset)".into())
            );
        }
    }
    Ok(())
}
