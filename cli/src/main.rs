mod config;
mod logging;
mod summary;
mod tui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use ticklist_core::ViewFilter;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "ticklist")]
#[command(about = "A session-scoped task tracker", long_about = None)]
struct Cli {
    /// Start with the incomplete-only filter switched on
    #[arg(long)]
    incomplete_only: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Append debug logs to this file (the TUI owns the terminal)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let mut config = Config::load(cli.config.as_deref())?;
    if cli.incomplete_only {
        config.incomplete_only = true;
    }

    let filter = if config.incomplete_only {
        ViewFilter::IncompleteOnly
    } else {
        ViewFilter::All
    };

    let final_snapshot = tui::run(filter, config.tick_rate_ms)?;
    summary::print(&final_snapshot);
    Ok(())
}
