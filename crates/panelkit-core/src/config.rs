//! Placement configuration
//!
//! One immutable struct describing a panel run: the global offset applied to
//! every tab and border coordinate, the tab anchor positions, the border
//! polygon, and the directory layout. Loaded from a JSON placement file and
//! validated before any file pass starts.

use crate::error::{ConfigError, Result};
use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Run-wide placement configuration
///
/// Constructed once per run and passed by reference into each pipeline
/// component. Coordinates are in board units; `global_offset` has not yet
/// been applied to `tabs` or `border`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Offset applied to every tab and border coordinate
    pub global_offset: Point,
    /// Lower-left anchor of each breakaway tab
    #[serde(default)]
    pub tabs: Vec<Point>,
    /// Border polygon vertices, in configuration order
    pub border: Vec<Point>,
    /// Base name used for the panel's output files
    pub panel_name: String,
    /// Directory receiving the final outline and drill files
    pub output_dir: PathBuf,
    /// Directory holding the merged intermediate files
    pub tmp_dir: PathBuf,
}

impl PanelConfig {
    /// Load a placement configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// Rejected configurations would otherwise produce degenerate geometry
    /// mid-stream, so validation runs before the pass starts. An empty tab
    /// list is allowed; a panel without breakaway tabs still gets a border.
    pub fn validate(&self) -> Result<()> {
        if self.border.is_empty() {
            return Err(ConfigError::EmptyBorder.into());
        }
        if self.panel_name.trim().is_empty() {
            return Err(ConfigError::EmptyPanelName.into());
        }
        for (name, value) in [
            ("global_offset.x", self.global_offset.x),
            ("global_offset.y", self.global_offset.y),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidValue {
                    name: name.to_string(),
                    reason: "not finite".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> PanelConfig {
        PanelConfig {
            global_offset: Point::new(0.5, 0.5),
            tabs: vec![Point::new(1.0, 0.0)],
            border: vec![
                Point::new(0.0, 0.0),
                Point::new(4.0, 0.0),
                Point::new(4.0, 3.0),
                Point::new(0.0, 3.0),
            ],
            panel_name: "Modulo".to_string(),
            output_dir: PathBuf::from("output"),
            tmp_dir: PathBuf::from("tmp"),
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(sample_config().validate().is_ok());
    }

    #[test]
    fn test_empty_border_rejected() {
        let mut config = sample_config();
        config.border.clear();
        let err = config.validate().unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_empty_panel_name_rejected() {
        let mut config = sample_config();
        config.panel_name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("placement.json");
        let json = serde_json::to_string_pretty(&sample_config()).unwrap();
        std::fs::write(&path, json).unwrap();

        let config = PanelConfig::load_from_file(&path).unwrap();
        assert_eq!(config.panel_name, "Modulo");
        assert_eq!(config.tabs.len(), 1);
        assert_eq!(config.border.len(), 4);
    }

    #[test]
    fn test_load_rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("placement.json");
        let mut config = sample_config();
        config.border.clear();
        let json = serde_json::to_string_pretty(&config).unwrap();
        std::fs::write(&path, json).unwrap();

        assert!(PanelConfig::load_from_file(&path).is_err());
    }
}
