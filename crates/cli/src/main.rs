//! `navshell` binary: loads the menu configuration and runs the shell.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use dirs_next::config_dir;
use tracing::warn;

use navshell_menu::MenuConfig;

#[derive(Debug, Parser)]
#[command(name = "navshell", version, about = "Terminal navigation shell")]
struct Cli {
    /// Menu configuration file (JSON). Defaults to the user config directory,
    /// then the embedded menu.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Route to show on startup.
    #[arg(long, default_value = "/")]
    route: String,

    /// Write logs to this file instead of stderr. Useful while the alternate
    /// screen owns the terminal.
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let config = load_config(cli.config.as_deref())?;
    navshell_tui::run(Arc::new(config), cli.route).await
}

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    match log_file {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
    Ok(())
}

/// Resolves the menu configuration: an explicit `--config` path is
/// authoritative and must parse; otherwise the user config directory is
/// consulted and the embedded menu is the fallback.
fn load_config(explicit: Option<&Path>) -> Result<MenuConfig> {
    if let Some(path) = explicit {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read menu configuration {}", path.display()))?;
        return MenuConfig::from_json_str(&text)
            .with_context(|| format!("invalid menu configuration {}", path.display()));
    }

    let discovered = default_config_path();
    if discovered.is_file() {
        match fs::read_to_string(&discovered)
            .map_err(anyhow::Error::from)
            .and_then(|text| MenuConfig::from_json_str(&text).map_err(anyhow::Error::from))
        {
            Ok(config) => return Ok(config),
            Err(error) => {
                warn!(path = %discovered.display(), %error, "ignoring unusable menu configuration");
            }
        }
    }

    Ok(MenuConfig::embedded_default().clone())
}

fn default_config_path() -> PathBuf {
    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("navshell")
        .join("menu.json")
}
