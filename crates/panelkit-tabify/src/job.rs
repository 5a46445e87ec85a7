//! One panel pass
//!
//! Wires the drill ledger and the filter chain together: load the existing
//! drill file, select the mousebite tool, stream the outline through
//! Border Filter → Tab Filter → Writer, then write the merged drill file.
//! Any failure aborts the run; neither output is valid unless both were
//! fully written.

use std::fs::File;
use std::io::BufReader;

use tracing::info;

use panelkit_core::{PanelConfig, Point, Result};

use crate::border::BorderFilter;
use crate::drill::DrillFile;
use crate::reader::OutlineReader;
use crate::tabs::{Tab, TabFilter};
use crate::writer::OutlineWriter;

/// Drill diameter used for every mousebite perforation hole.
pub const MOUSEBITE_DRILL_DIAMETER: f64 = 0.022;

/// Name of the merged outline file the panel merger leaves in the tmp
/// directory.
const MERGED_OUTLINE_NAME: &str = "boardoutline.ger";

/// Run the outline/drill transformation for one panel.
pub fn run_panel_job(config: &PanelConfig) -> Result<()> {
    config.validate()?;

    let drill_input = config
        .tmp_dir
        .join(format!("{}.drills.xln", config.panel_name));
    let outline_input = config.tmp_dir.join(MERGED_OUTLINE_NAME);
    let outline_output = config
        .output_dir
        .join(format!("{}.boardoutline.ger", config.panel_name));
    let drill_output = config
        .output_dir
        .join(format!("{}.drills.xln", config.panel_name));

    let mut drill = DrillFile::new();
    info!(path = %drill_input.display(), "loading drill file");
    drill.load(&drill_input)?;
    let tool = drill.select_or_create_tool(MOUSEBITE_DRILL_DIAMETER);
    info!(tool, "mousebite tool selected");

    let offset = config.global_offset;
    let tabs: Vec<Tab> = config
        .tabs
        .iter()
        .map(|anchor| Tab::new(anchor.translate(offset)))
        .collect();
    // Reversed so the trace direction matches the outline's convention.
    let border: Vec<Point> = config
        .border
        .iter()
        .rev()
        .map(|point| point.translate(offset))
        .collect();

    info!(path = %outline_input.display(), tabs = tabs.len(), "processing outline");
    {
        let input = BufReader::new(File::open(&outline_input)?);
        let writer = OutlineWriter::new(File::create(&outline_output)?);
        let tab_filter = TabFilter::new(writer, tabs, &mut drill);
        let mut chain = BorderFilter::new(tab_filter, border)?;
        OutlineReader::new().run(input, &mut chain)?;
    }

    info!(path = %drill_output.display(), holes = drill.hole_count(), "writing drill file");
    drill.write(&drill_output)?;
    Ok(())
}
