//! btadapters - list the Bluetooth adapters attached to this host
//!
//! Takes a single snapshot through the HCI raw socket enumerator and prints
//! it as text or JSON.

mod config;
mod error;
mod output;

use std::{path::PathBuf, process::ExitCode};

use btadapters::{select_enumerator, Platform};
use clap::Parser;
use log::{debug, info};

use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};

#[derive(Parser)]
#[command(name = "btadapters")]
#[command(about = "List Bluetooth adapters attached to this host")]
struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/btadapters/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
    /// Number of device slots to request from the kernel
    #[arg(long)]
    max_devices: Option<u16>,
    /// Fail instead of printing a partial or empty snapshot
    #[arg(long)]
    strict: bool,
    /// Treat the host as this OS instead of detecting it (e.g. "freebsd")
    #[arg(long)]
    os: Option<String>,
    /// Log enumeration details
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(max_devices) = cli.max_devices {
        config.enumerator.max_devices = max_devices;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }

    let platform = cli
        .os
        .as_deref()
        .map(Platform::from_os_name)
        .unwrap_or_else(Platform::current);
    debug!("Enumerating adapters as {platform} with {:?}", config.enumerator);

    let enumerator = select_enumerator(platform, config.enumerator)
        .ok_or(CliError::UnsupportedPlatform(platform))?;

    let adapters = if cli.strict {
        enumerator.try_enumerate()?
    } else {
        enumerator.enumerate_adapters()
    };
    info!("Found {} adapter(s)", adapters.len());

    let mut stdout = std::io::stdout().lock();
    output::write_adapters(&mut stdout, &adapters, config.output.format)
}
