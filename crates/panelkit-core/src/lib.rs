//! # Panelkit Core
//!
//! Core types and utilities shared by the panel post-processing pipeline:
//! planar geometry, fixed-point coordinate scaling for the outline and drill
//! file formats, the run-wide placement configuration, and the crate-wide
//! error type.

pub mod config;
pub mod error;
pub mod geometry;
pub mod units;

pub use config::PanelConfig;
pub use error::{ConfigError, DrillError, Error, Result};
pub use geometry::Point;
