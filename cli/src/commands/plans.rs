//! Treatment plan commands

use super::ApiClient;
use crate::{output::OutputFormat, PlanCommands};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Serialize, Deserialize, Tabled)]
pub struct PlanRow {
    pub reference: String,
    pub title: String,
    pub framework: String,
    pub status: String,
    pub progress_pct: f64,
    pub total_controls: usize,
    pub completed_controls: usize,
    pub days_overdue: i64,
    pub target_completion_date: String,
}

fn to_row(plan: &serde_json::Value) -> PlanRow {
    let s = |key: &str| {
        plan.get(key)
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string()
    };
    PlanRow {
        reference: s("reference"),
        title: s("title"),
        framework: s("framework"),
        status: s("status"),
        progress_pct: plan["progress_pct"].as_f64().unwrap_or(0.0),
        total_controls: plan["total_controls"].as_u64().unwrap_or(0) as usize,
        completed_controls: plan["completed_controls"].as_u64().unwrap_or(0) as usize,
        days_overdue: plan["days_overdue"].as_i64().unwrap_or(0),
        target_completion_date: s("target_completion_date"),
    }
}

pub async fn handle(
    action: PlanCommands,
    client: &ApiClient,
    format: OutputFormat,
) -> Result<(), String> {
    match action {
        PlanCommands::List => {
            let plans: Vec<serde_json::Value> = client.get("/plans").await?;
            let rows: Vec<PlanRow> = plans.iter().map(to_row).collect();
            format.print_rows(&rows);
        }
        PlanCommands::Get { id } => {
            let plan: serde_json::Value = client.get(&format!("/plans/{}", id)).await?;
            format.print(&plan);
        }
        PlanCommands::Create {
            title,
            framework,
            owner,
            target_date,
        } => {
            let body = serde_json::json!({
                "title": title,
                "framework": super::items::framework_variant(&framework)?,
                "owner": owner,
                "target_completion_date": target_date,
            });
            let plan: serde_json::Value = client.post("/plans", &body).await?;
            println!(
                "Created {}",
                plan["reference"].as_str().unwrap_or_default()
            );
            format.print(&plan);
        }
    }
    Ok(())
}
