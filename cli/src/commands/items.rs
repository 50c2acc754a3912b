//! Remediation item commands

use super::ApiClient;
use crate::{output::OutputFormat, ItemCommands};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Serialize, Deserialize, Tabled)]
pub struct ItemRow {
    pub reference: String,
    pub title: String,
    pub framework: String,
    pub severity: String,
    pub status: String,
    pub aging_status: String,
    pub aging_days: i64,
    pub effective_progress: u8,
    pub due_date: String,
    pub assigned_to: String,
}

#[derive(Debug, Deserialize)]
pub struct PaginatedItems {
    pub items: Vec<serde_json::Value>,
    pub total: u64,
}

fn to_row(item: &serde_json::Value) -> ItemRow {
    let s = |key: &str| {
        item.get(key)
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string()
    };
    ItemRow {
        reference: s("reference"),
        title: s("title"),
        framework: s("framework"),
        severity: s("severity"),
        status: s("status"),
        aging_status: s("aging_status"),
        aging_days: item["aging_days"].as_i64().unwrap_or(0),
        effective_progress: item["effective_progress"].as_u64().unwrap_or(0) as u8,
        due_date: s("due_date"),
        assigned_to: s("assigned_to"),
    }
}

pub async fn handle(
    action: ItemCommands,
    client: &ApiClient,
    format: OutputFormat,
) -> Result<(), String> {
    match action {
        ItemCommands::List {
            status,
            severity,
            framework,
            query,
        } => {
            let mut params = vec!["per_page=100".to_string()];
            if let Some(s) = status {
                params.push(format!("status={}", s));
            }
            if let Some(s) = severity {
                params.push(format!("severity={}", s));
            }
            if let Some(f) = framework {
                params.push(format!("framework={}", f));
            }
            if let Some(q) = query {
                params.push(format!("q={}", q));
            }
            let page: PaginatedItems =
                client.get(&format!("/items?{}", params.join("&"))).await?;
            let rows: Vec<ItemRow> = page.items.iter().map(to_row).collect();
            format.print_rows(&rows);
            println!("{} items", page.total);
        }
        ItemCommands::Get { id } => {
            let item: serde_json::Value = client.get(&format!("/items/{}", id)).await?;
            format.print(&item);
        }
        ItemCommands::Create {
            title,
            description,
            framework,
            control_id,
            severity,
            priority,
            assigned_to,
            start_date,
            due_date,
            estimated_cost,
        } => {
            let start =
                start_date.unwrap_or_else(|| chrono::Utc::now().date_naive().to_string());
            let body = serde_json::json!({
                "title": title,
                "description": description,
                "framework": framework_variant(&framework)?,
                "control_id": control_id,
                "severity": severity,
                "priority": priority,
                "assigned_to": assigned_to,
                "start_date": start,
                "due_date": due_date,
                "estimated_cost": estimated_cost,
            });
            let item: serde_json::Value = client.post("/items", &body).await?;
            println!(
                "Created {}",
                item["reference"].as_str().unwrap_or_default()
            );
            format.print(&item);
        }
        ItemCommands::Status { id, status } => {
            let body = serde_json::json!({ "status": status });
            let item: serde_json::Value = client.put(&format!("/items/{}", id), &body).await?;
            println!(
                "{} is now {}",
                item["reference"].as_str().unwrap_or_default(),
                item["status"].as_str().unwrap_or_default()
            );
        }
        ItemCommands::Cancel { id } => {
            let _: serde_json::Value = client
                .post(&format!("/items/{}/cancel", id), &())
                .await?;
            println!("Item {} cancelled", id);
        }
        ItemCommands::Delete { id } => {
            client.delete(&format!("/items/{}", id)).await?;
            println!("Item {} deleted", id);
        }
        ItemCommands::Stats { framework } => {
            let path = match framework {
                Some(f) => format!("/items/stats?framework={}", f),
                None => "/items/stats".to_string(),
            };
            let stats: serde_json::Value = client.get(&path).await?;
            format.print(&stats);
        }
    }
    Ok(())
}

/// Map a short code to the API's framework variant name
pub fn framework_variant(code: &str) -> Result<&'static str, String> {
    match code.to_uppercase().as_str() {
        "ISO27001" => Ok("Iso27001"),
        "NESA" => Ok("NesaUae"),
        "HIPAA" => Ok("Hipaa"),
        "MICA" => Ok("Mica"),
        "NIS2" => Ok("Nis2"),
        other => Err(format!("unknown framework: {}", other)),
    }
}
