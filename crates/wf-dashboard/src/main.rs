//! WF Autotrasporti logistics dashboard.

use std::fs::File;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use wf_sdk::AssistantClient;

mod app;
mod app_state;
mod config;
mod dashboard;
mod dispatch;
mod oneshot;
mod tui;
mod ui;

use crate::app::DashboardApp;
use crate::app_state::AppController;
use crate::config::DashboardConfig;
use crate::dashboard::Dashboard;
use crate::dispatch::Dispatcher;
use crate::tui::EventHandler;

/// Pharmaceutical transport control room in the terminal.
#[derive(Parser, Debug)]
#[command(name = "wf-dashboard", author, version, about, long_about = None)]
struct Cli {
    /// Run a single operation instead of the interactive dashboard
    #[command(subcommand)]
    command: Option<oneshot::Command>,
}

fn env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = DashboardConfig::from_env();

    match cli.command {
        Some(command) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .init();
            let client = AssistantClient::new(config.assistant);
            println!("{}", oneshot::execute(command, &client).await?);
            Ok(())
        }
        None => {
            // The terminal belongs to the UI, so logs go to a file.
            let log = File::create(&config.log_file)
                .with_context(|| format!("cannot open log file {}", config.log_file.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(Mutex::new(log))
                .with_ansi(false)
                .init();
            run_tui(config).await
        }
    }
}

async fn run_tui(config: DashboardConfig) -> anyhow::Result<()> {
    tracing::info!(tick = ?config.tick_rate, "starting dashboard");
    let mut events = EventHandler::new(config.tick_rate);
    let dispatcher = Dispatcher::new(AssistantClient::new(config.assistant), events.sender());
    let mut app = DashboardApp::new(Dashboard::new(config.splash), dispatcher);
    app.start();

    let mut terminal = tui::init().context("terminal setup failed")?;
    let result = async {
        while !app.should_quit() {
            terminal.draw(|f| app.render(f))?;
            match events.next().await {
                Some(action) => app.update(action),
                None => break,
            }
        }
        anyhow::Ok(())
    }
    .await;

    tui::restore().context("terminal restore failed")?;
    tracing::info!("dashboard closed");
    result
}
