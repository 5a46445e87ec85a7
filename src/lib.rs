//! # Panelkit
//!
//! Post-processor for merged multi-board panel outlines. Reads the outline
//! and drill files a panel merger leaves behind, inserts breakaway tabs
//! with mousebite perforations between boards, draws an outer border, and
//! writes back a new outline plus a merged drill file.
//!
//! ## Architecture
//!
//! Panelkit is organized as a workspace:
//!
//! 1. **panelkit-core** - Geometry, unit scaling, configuration, errors
//! 2. **panelkit-tabify** - The outline/drill filter-chain pipeline
//! 3. **panelkit** - Main binary that loads a placement file and runs a pass

pub use panelkit_core::{ConfigError, DrillError, Error, PanelConfig, Point, Result};
pub use panelkit_tabify::{
    run_panel_job, BorderFilter, DrillFile, OutlineReader, OutlineWriter, Tab, TabFilter,
    MOUSEBITE_DRILL_DIAMETER,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output and RUST_LOG environment
/// variable support; INFO and above by default.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
