use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use panelkit::{init_logging, run_panel_job, PanelConfig};

/// Insert breakaway tabs and a border into a merged panel outline.
#[derive(Parser, Debug)]
#[command(name = "panelkit", version, about)]
struct Args {
    /// Path to the placement configuration (JSON)
    #[arg(short, long, default_value = "config/placement.json")]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let args = Args::parse();
    let config = PanelConfig::load_from_file(&args.config)
        .with_context(|| format!("failed to load {}", args.config.display()))?;

    run_panel_job(&config)?;
    Ok(())
}
