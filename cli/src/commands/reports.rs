//! Report commands

use super::ApiClient;
use crate::{output::OutputFormat, ReportCommands};

pub async fn handle(
    action: ReportCommands,
    client: &ApiClient,
    format: OutputFormat,
) -> Result<(), String> {
    match action {
        ReportCommands::Summary => {
            let summary: serde_json::Value = client.get("/reports/summary").await?;
            format.print(&summary);
        }
        ReportCommands::Framework { code } => {
            let report: serde_json::Value = client.get(&format!("/reports/{}", code)).await?;
            format.print(&report);
        }
    }
    Ok(())
}
