//! Framework commands

use super::ApiClient;
use crate::{output::OutputFormat, FrameworkCommands};
use serde::{Deserialize, Serialize};
use std::fs;
use tabled::Tabled;

#[derive(Debug, Serialize, Deserialize, Tabled)]
pub struct FrameworkRow {
    pub code: String,
    pub name: String,
    pub control_count: usize,
}

#[derive(Debug, Serialize, Deserialize, Tabled)]
pub struct ControlRow {
    pub id: String,
    pub name: String,
    pub category: String,
    pub default_severity: String,
}

pub async fn handle(
    action: FrameworkCommands,
    client: &ApiClient,
    format: OutputFormat,
) -> Result<(), String> {
    match action {
        FrameworkCommands::List => {
            let frameworks: Vec<FrameworkRow> = client.get("/frameworks").await?;
            format.print_rows(&frameworks);
        }
        FrameworkCommands::Controls { code } => {
            let controls: Vec<ControlRow> =
                client.get(&format!("/frameworks/{}/controls", code)).await?;
            format.print_rows(&controls);
        }
        FrameworkCommands::Assess { code, file } => {
            let content = fs::read_to_string(&file).map_err(|e| e.to_string())?;
            // Accept YAML or JSON; YAML parses both.
            let states: serde_json::Value =
                serde_yaml::from_str(&content).map_err(|e| e.to_string())?;
            let body = serde_json::json!({ "control_states": states });
            let analysis: serde_json::Value = client
                .post(&format!("/frameworks/{}/assess", code), &body)
                .await?;
            println!(
                "Score {:.1}%, {} gaps opened",
                analysis["score_pct"].as_f64().unwrap_or(0.0),
                analysis["gaps"].as_array().map(|g| g.len()).unwrap_or(0)
            );
            format.print(&analysis);
        }
    }
    Ok(())
}
