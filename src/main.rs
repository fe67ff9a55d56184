mod api;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod runtime;
mod ui;
mod workers;

use crate::api::types::{StatusNote, format_rate};
use crate::api::{DaemonClient, TorrentApi};
use crate::config::{Config, Profile, get_config_path};
use crate::consts::cli_consts::polling;
use crate::environment::Environment;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::path::Path;
use std::{error::Error, io};
use tokio::sync::broadcast;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Watch the daemon's transfers in the terminal UI.
    Watch {
        /// Record key shown on the detail screen.
        #[arg(long, value_name = "RECORD_KEY")]
        key: Option<String>,

        /// Default-key profile used when no explicit key is given.
        #[arg(long, value_enum)]
        profile: Option<Profile>,

        /// Daemon base URL, e.g. http://localhost:9000.
        #[arg(long, value_name = "URL")]
        daemon_url: Option<String>,
    },
    /// Print one record's name and rates, then exit.
    Status {
        /// Record key to look up.
        #[arg(long, value_name = "RECORD_KEY")]
        key: Option<String>,

        /// Default-key profile used when no explicit key is given.
        #[arg(long, value_enum)]
        profile: Option<Profile>,

        /// Daemon base URL, e.g. http://localhost:9000.
        #[arg(long, value_name = "URL")]
        daemon_url: Option<String>,
    },
    /// Send the placeholder status note to the daemon root.
    Post {
        /// Daemon base URL, e.g. http://localhost:9000.
        #[arg(long, value_name = "URL")]
        daemon_url: Option<String>,
    },
    /// Write the configuration file.
    Init {
        /// Record key for the detail view.
        #[arg(long, value_name = "RECORD_KEY")]
        key: Option<String>,

        /// Default-key profile used when no explicit key is given.
        #[arg(long, value_enum)]
        profile: Option<Profile>,

        /// Daemon base URL, e.g. http://localhost:9000.
        #[arg(long, value_name = "URL")]
        daemon_url: Option<String>,
    },
    /// Delete the configuration file.
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Watch {
            key,
            profile,
            daemon_url,
        } => {
            let config = load_config(&config_path);
            let environment = resolve_environment(daemon_url, &config)?;
            let record_key = resolve_record_key(key, profile, &config);
            watch(environment, record_key).await
        }
        Command::Status {
            key,
            profile,
            daemon_url,
        } => {
            let config = load_config(&config_path);
            let environment = resolve_environment(daemon_url, &config)?;
            let record_key = resolve_record_key(key, profile, &config);
            status(environment, record_key).await
        }
        Command::Post { daemon_url } => {
            let config = load_config(&config_path);
            let environment = resolve_environment(daemon_url, &config)?;
            post(environment).await
        }
        Command::Init {
            key,
            profile,
            daemon_url,
        } => {
            let config = Config::new(key, profile.unwrap_or_default(), daemon_url);
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            println!("Configuration written to {}", config_path.display());
            Ok(())
        }
        Command::Reset => {
            println!("Removing configuration file...");
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

/// Load the config file, falling back to defaults when it is absent or bad.
fn load_config(path: &Path) -> Config {
    if path.exists() {
        Config::load_from_file(path).unwrap_or_default()
    } else {
        Config::default()
    }
}

/// Daemon endpoint precedence: flag, then SLEEKWATCH_DAEMON_URL, then config.
fn resolve_environment(
    flag: Option<String>,
    config: &Config,
) -> Result<Environment, Box<dyn Error>> {
    let from_env = std::env::var("SLEEKWATCH_DAEMON_URL").ok();
    match flag.or(from_env).or_else(|| config.daemon_url.clone()) {
        None => Ok(Environment::Local),
        Some(url) => url
            .parse::<Environment>()
            .map_err(|_| format!("Invalid daemon URL: {}", url).into()),
    }
}

/// Record key precedence: explicit key, then profile default, then config.
fn resolve_record_key(key: Option<String>, profile: Option<Profile>, config: &Config) -> String {
    if let Some(key) = key {
        return key;
    }
    if let Some(profile) = profile {
        return profile.default_record_key().to_string();
    }
    config.resolved_key().to_string()
}

/// Starts the terminal UI and the poll worker behind it.
async fn watch(environment: Environment, record_key: String) -> Result<(), Box<dyn Error>> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend.
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Start the poll worker and create the application.
    let client = DaemonClient::new(environment.clone())?;
    let (shutdown_sender, shutdown_receiver) = broadcast::channel(1);
    let runtime::PollerHandles {
        snapshot_receiver,
        event_receiver,
        command_sender,
        join_handle,
    } = runtime::start_poller(
        Box::new(client),
        shutdown_receiver,
        polling::poll_interval(),
        Some(record_key.clone()),
    );

    let app = ui::App::new(
        environment,
        record_key,
        snapshot_receiver,
        event_receiver,
        command_sender,
        shutdown_sender,
    );
    let res = ui::run(&mut terminal, app).await;

    // The UI sent the shutdown signal on quit; wait for the worker to stop.
    let _ = join_handle.await;

    // Clean up the terminal after running the application.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

/// One-shot record lookup; a missing key prints a fallback instead of failing.
async fn status(environment: Environment, record_key: String) -> Result<(), Box<dyn Error>> {
    let client = DaemonClient::new(environment)?;
    println!("Daemon: {}", client.environment().daemon_url());
    let snapshot = client.get_torrents().await?;
    match snapshot.get(&record_key) {
        Some(record) => {
            println!("Name: {}", record.name);
            println!("Down: {}", format_rate(record.down_rate));
            println!("Up: {}", format_rate(record.up_rate));
        }
        None => {
            println!(
                "Record {} is not in the current snapshot ({} tracked)",
                record_key,
                snapshot.len()
            );
        }
    }
    Ok(())
}

/// One-shot status note; the response is discarded except for its status.
async fn post(environment: Environment) -> Result<(), Box<dyn Error>> {
    let client = DaemonClient::new(environment)?;
    let status = client.post_note(StatusNote::placeholder()).await?;
    println!("Daemon acknowledged status note (HTTP {})", status);
    Ok(())
}
