//! Audit trail commands

use super::ApiClient;
use crate::{output::OutputFormat, AuditCommands};
use colored::Colorize;

pub async fn handle(
    action: AuditCommands,
    client: &ApiClient,
    format: OutputFormat,
) -> Result<(), String> {
    match action {
        AuditCommands::List { actor } => {
            let path = match actor {
                Some(a) => format!("/audit?actor={}", a),
                None => "/audit".to_string(),
            };
            let events: Vec<serde_json::Value> = client.get(&path).await?;
            format.print(&events);
        }
        AuditCommands::Verify => {
            let result: serde_json::Value = client.get("/audit/verify").await?;
            let valid = result["valid"].as_bool().unwrap_or(false);
            let checked = result["checked_count"].as_u64().unwrap_or(0);
            if valid {
                println!("{} {} events verified", "OK".green(), checked);
            } else {
                println!(
                    "{} {}",
                    "BROKEN".red(),
                    result["error"].as_str().unwrap_or("integrity check failed")
                );
            }
        }
    }
    Ok(())
}
