//! OpenGRC CLI
//!
//! Command-line interface for the OpenGRC compliance platform.
//!
//! # Usage
//!
//! ```bash
//! opengrc items list --framework ISO27001 --status InProgress
//! opengrc items create --title "Deploy MFA" --framework ISO27001 \
//!     --severity Critical --priority Critical --due-date 2026-09-01
//! opengrc frameworks assess NIS2 -f states.yaml
//! opengrc reports summary
//! opengrc audit verify
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;

mod commands;
mod config;
mod output;

#[derive(Parser)]
#[command(name = "opengrc")]
#[command(author = "OpenGRC")]
#[command(version = "0.1.0")]
#[command(about = "OpenGRC Command Line Interface", long_about = None)]
struct Cli {
    /// API endpoint URL
    #[arg(long, env = "OPENGRC_API_URL", default_value = "http://localhost:8080/api/v1")]
    api_url: String,

    /// Output format
    #[arg(long, short, default_value = "table")]
    format: output::OutputFormat,

    /// Profile name from config file
    #[arg(long, short)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage remediation items
    Items {
        #[command(subcommand)]
        action: ItemCommands,
    },
    /// Manage treatment plans
    Plans {
        #[command(subcommand)]
        action: PlanCommands,
    },
    /// Framework catalogs and assessments
    Frameworks {
        #[command(subcommand)]
        action: FrameworkCommands,
    },
    /// Generate reports
    Reports {
        #[command(subcommand)]
        action: ReportCommands,
    },
    /// Inspect the audit trail
    Audit {
        #[command(subcommand)]
        action: AuditCommands,
    },
    /// Configure CLI
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ItemCommands {
    /// List remediation items
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        severity: Option<String>,
        #[arg(long)]
        framework: Option<String>,
        /// Search title, reference, control and assignee
        #[arg(long, short)]
        query: Option<String>,
    },
    /// Get item details
    Get { id: String },
    /// Create a remediation item
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Framework code: ISO27001, NESA, HIPAA, MICA, NIS2
        #[arg(long)]
        framework: String,
        #[arg(long, default_value = "")]
        control_id: String,
        #[arg(long, default_value = "Medium")]
        severity: String,
        #[arg(long, default_value = "Medium")]
        priority: String,
        #[arg(long, default_value = "")]
        assigned_to: String,
        /// Start date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        start_date: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due_date: String,
        #[arg(long, default_value_t = 0)]
        estimated_cost: u64,
    },
    /// Update item status
    Status {
        id: String,
        /// New status, e.g. InProgress, Completed
        status: String,
    },
    /// Soft-cancel an item
    Cancel { id: String },
    /// Delete an item
    Delete { id: String },
    /// Show aggregate statistics
    Stats {
        #[arg(long)]
        framework: Option<String>,
    },
}

#[derive(Subcommand)]
enum PlanCommands {
    /// List treatment plans with rollups
    List,
    /// Get plan details
    Get { id: String },
    /// Create a treatment plan
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        framework: String,
        #[arg(long, default_value = "")]
        owner: String,
        /// Target completion date (YYYY-MM-DD)
        #[arg(long)]
        target_date: String,
    },
}

#[derive(Subcommand)]
enum FrameworkCommands {
    /// List supported frameworks
    List,
    /// List a framework's control catalog
    Controls { code: String },
    /// Run a gap analysis from a control-states file
    Assess {
        code: String,
        /// YAML or JSON map of control id to status
        #[arg(short, long)]
        file: String,
    },
}

#[derive(Subcommand)]
enum ReportCommands {
    /// Executive summary across frameworks
    Summary,
    /// Remediation report for one framework
    Framework { code: String },
}

#[derive(Subcommand)]
enum AuditCommands {
    /// List audit events
    List {
        #[arg(long)]
        actor: Option<String>,
    },
    /// Verify hash-chain integrity
    Verify,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Set configuration value
    Set { key: String, value: String },
    /// Get configuration value
    Get { key: String },
    /// List all configuration
    List,
    /// Initialize configuration
    Init,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = config::Config::load(cli.profile.as_deref()).unwrap_or_default();
    let api_url = config.api_url.unwrap_or(cli.api_url);

    let client = commands::ApiClient::new(&api_url);

    let result = match cli.command {
        Commands::Items { action } => commands::items::handle(action, &client, cli.format).await,
        Commands::Plans { action } => commands::plans::handle(action, &client, cli.format).await,
        Commands::Frameworks { action } => {
            commands::frameworks::handle(action, &client, cli.format).await
        }
        Commands::Reports { action } => {
            commands::reports::handle(action, &client, cli.format).await
        }
        Commands::Audit { action } => commands::audit::handle(action, &client, cli.format).await,
        Commands::Config { action } => commands::config::handle(action).await,
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}
