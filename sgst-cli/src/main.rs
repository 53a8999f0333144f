//! `sgst`: terminal client for the SGST workshop and equipment backend.
//!
//! The session (cookies and selected workshop) is kept between runs, so
//! `sgst login` followed by `sgst equipos list` behaves like the web app.

#![allow(clippy::print_stdout, clippy::print_stderr, reason = "CLI tool writes to the terminal")]

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use sgst_client::navigation::{set_navigator, ROUTE_LOGIN};
use sgst_client::{Hooks, NavigateOptions, SgstClient};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod auth_commands;
mod browse;
mod cli;
mod commands;
mod config;
mod config_commands;
mod equipo_commands;
mod navigator;
mod session_store;
mod taller_commands;
mod tipo_commands;

use cli::Cli;
use navigator::{CliNavigator, CliNotifier};

fn init_tracing(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let config_dir = config::config_dir()?;
    let mut config = config::load_config(&config_dir)?.with_env_overrides();
    if let Some(url) = cli.api_url {
        config::apply_setting(&mut config, "base_url", &url)?;
    }
    if let Some(prefix) = cli.api_prefix {
        config.api_prefix = prefix;
    }

    let navigator = Arc::new(CliNavigator::default());
    let notifier = Arc::new(CliNotifier::default());
    set_navigator(navigator.clone());

    let client = Arc::new(SgstClient::builder(config).notifier(notifier.clone()).build()?);
    let session_file = session_store::session_path()?;
    client.session().restore(client.origin(), &session_store::load(&session_file));
    let hooks = Hooks::new(Arc::clone(&client));

    if !cli.command.is_public() && !client.session().has_cookies_for(client.origin()) {
        eprintln!("{} Not logged in.", "✗".red());
        client.navigate(ROUTE_LOGIN, NavigateOptions { replace: true });
        return Ok(ExitCode::FAILURE);
    }

    let result = commands::handle_command(&hooks, &config_dir, cli.command).await;

    if navigator.login_required() {
        session_store::clear(&session_file)?;
    } else {
        session_store::save(&session_file, &client.session().snapshot(client.origin()))?;
    }

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            tracing::debug!("command failed: {:?}", e);
            if !notifier.problem_shown() && !navigator.login_required() {
                eprintln!("{} {:#}", "✗".red(), e);
            }
            Ok(ExitCode::FAILURE)
        },
    }
}
