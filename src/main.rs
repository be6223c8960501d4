//! Incident Viewer - Entry Point

use clap::Parser;
use incv::model::{AppError, Severity, Status};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

fn parse_severity(raw: &str) -> Result<Severity, String> {
    Severity::parse(raw).ok_or_else(|| format!("unknown severity '{raw}' (expected SEV1..SEV4)"))
}

fn parse_status(raw: &str) -> Result<Status, String> {
    Status::parse(raw).ok_or_else(|| {
        format!("unknown status '{raw}' (expected OPEN, MITIGATED or RESOLVED)")
    })
}

/// Incident Viewer - TUI for browsing incident records
#[derive(Parser, Debug)]
#[command(name = "incv")]
#[command(version)]
#[command(about = "TUI application for browsing incidents from an incident management API")]
pub struct Args {
    /// Base URL of the incident API
    #[arg(long)]
    pub api_url: Option<String>,

    /// Start with a search query applied
    #[arg(short, long)]
    pub search: Option<String>,

    /// Start with a severity filter applied (SEV1..SEV4)
    #[arg(long, value_parser = parse_severity)]
    pub severity: Option<Severity>,

    /// Start with a status filter applied (OPEN, MITIGATED, RESOLVED)
    #[arg(long, value_parser = parse_status)]
    pub status: Option<Status>,

    /// Rows requested per page
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub per_page: Option<u32>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Resolve configuration, initialize logging, and build the API client.
fn setup(args: &Args) -> Result<(incv::config::ResolvedConfig, Arc<incv::api::HttpApi>), AppError> {
    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = incv::config::load_config_with_precedence(args.config.clone())?;
        let merged = incv::config::merge_config(config_file);
        let with_env = incv::config::apply_env_overrides(merged);
        incv::config::apply_cli_overrides(with_env, args.api_url.clone(), args.per_page)
    };

    incv::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let api = Arc::new(incv::api::HttpApi::new(&config.api_base_url)?);
    Ok((config, api))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let (config, api) = setup(&args)?;

    let mut app_state = incv::state::AppState::new(
        config.per_page,
        Duration::from_millis(config.debounce_ms),
    );
    app_state
        .query
        .seed(args.search.clone(), args.severity, args.status);

    let color_config = incv::view::ColorConfig::from_env_and_args(args.no_color);
    let mut app = incv::view::TuiApp::new(app_state, api, color_config)?;
    app.run()?;

    Ok(())
}
