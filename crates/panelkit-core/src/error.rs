//! Error handling for Panelkit
//!
//! Provides error types for the panel processing pipeline:
//! - Configuration errors (placement file validation)
//! - Drill ledger errors (tool selection state)
//! - I/O and serialization errors
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Placement configuration error
///
/// Raised while validating a placement configuration, before any file
/// pass starts.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    /// The border polygon has no vertices
    #[error("Border polygon is empty")]
    EmptyBorder,

    /// The panel name used for output file naming is empty
    #[error("Panel name is empty")]
    EmptyPanelName,

    /// A configuration value is invalid
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue {
        /// The configuration field name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Drill ledger error
///
/// Represents invalid drill ledger state: hole coordinates can only be
/// recorded against a selected tool.
#[derive(Error, Debug, Clone)]
pub enum DrillError {
    /// A hole was recorded with no tool selected
    #[error("No drill tool selected")]
    NoToolSelected,

    /// A hole line appeared before any tool selection in a drill file
    #[error("Hole before any tool selection: {line}")]
    HoleBeforeSelection {
        /// The offending drill file line.
        line: String,
    },
}

/// Top-level error type
///
/// Aggregates all error categories the pipeline can surface. The
/// orchestration layer receives exactly one of these per failed run.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Drill ledger error
    #[error(transparent)]
    Drill(#[from] DrillError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Check if this is a drill ledger error
    pub fn is_drill_error(&self) -> bool {
        matches!(self, Error::Drill(_))
    }
}

/// Result type alias using the Panelkit error
pub type Result<T> = std::result::Result<T, Error>;
