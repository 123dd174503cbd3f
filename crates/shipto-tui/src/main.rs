//! `shipto-tui`: terminal form for raising address-change tasks.
//!
//! Search a customer by name, tick one of their shipping addresses (or add
//! one locally), and submit. The workflow itself lives in `shipto-core`;
//! this binary only maps keys to workflow actions and renders the state.
//!
//! Logs go to a file (default `<temp dir>/shipto-tui.log`) so they never
//! corrupt the terminal.

mod action;
mod app;
mod component;
mod effects;
mod event;
mod notifications;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use shipto_config::EndpointOverrides;
use shipto_core::{Gateway, WorkflowConfig};

use crate::app::App;

/// Select a customer's shipping address and raise an address-change task.
#[derive(Parser, Debug)]
#[command(name = "shipto-tui", version, about)]
struct Cli {
    /// Customer directory endpoint (GET returns every customer)
    #[arg(long, env = "SHIPTO_DIRECTORY_URL")]
    directory_url: Option<String>,

    /// Customer detail endpoint; the customer id is appended as a path segment
    #[arg(long, env = "SHIPTO_DETAIL_URL")]
    detail_url: Option<String>,

    /// Task creation endpoint
    #[arg(long, env = "SHIPTO_TASK_URL")]
    task_url: Option<String>,

    /// Config file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file path (defaults to <temp dir>/shipto-tui.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up file-based tracing. Nothing may be written to stdout/stderr while
/// the terminal is in raw mode. Hold the guard for the whole run so logs
/// flush on exit.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "shipto_tui={log_level},shipto_core={log_level},shipto_api={log_level}"
        ))
    });

    let log_file = cli
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("shipto-tui.log"));
    let log_dir = log_file
        .parent()
        .map_or_else(std::env::temp_dir, std::path::Path::to_path_buf);
    let log_filename = log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("shipto-tui.log"))
        .to_owned();

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .init();

    guard
}

/// Config file + environment, with command-line endpoints on top.
fn build_config(cli: &Cli) -> Result<WorkflowConfig> {
    let file = match &cli.config {
        Some(path) => shipto_config::load_config_from(path)?,
        None => shipto_config::load_config()?,
    };
    let overrides = EndpointOverrides {
        directory: cli.directory_url.clone(),
        detail: cli.detail_url.clone(),
        task: cli.task_url.clone(),
    };
    Ok(file.to_workflow_config(&overrides)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Hooks first, so a panic during setup still restores the terminal
    tui::install_hooks()?;

    let _log_guard = setup_tracing(&cli);

    // Resolved before entering the terminal so config errors print normally
    let config = build_config(&cli)?;
    info!(
        directory = %config.endpoints.directory,
        detail = %config.endpoints.detail,
        task = %config.endpoints.task,
        "starting shipto-tui"
    );

    let gateway = Gateway::new(&config)?;
    let mut app = App::new(gateway);
    app.run().await?;

    Ok(())
}
