//! Drill ledger
//!
//! Owns the drill file's tool table: tool id to hole diameter, and the
//! ordered hole list recorded for each tool. Can load an existing
//! Excellon-style file, append mousebite holes during the outline pass, and
//! write the merged file back once the pass has finished.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use regex::Regex;
use tracing::warn;

use panelkit_core::units::drill_counts;
use panelkit_core::{DrillError, Point, Result};

/// One drill tool: its diameter and the holes recorded against it.
///
/// Hole coordinates are kept in the drill file's integer scale; conversion
/// from board units happens once, in [`DrillFile::add_hit`].
#[derive(Debug, Clone)]
struct Tool {
    diameter: f64,
    hits: Vec<(i64, i64)>,
}

/// The drill tool table and hole lists for one panel
#[derive(Debug, Default)]
pub struct DrillFile {
    tools: BTreeMap<u32, Tool>,
    current: Option<u32>,
}

impl DrillFile {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an existing drill file into the ledger.
    ///
    /// Recognizes tool definitions, tool selections, and hole coordinates;
    /// the `%` and `M30` sentinels are structural. Anything else is logged
    /// and skipped, which keeps headers like `M48` or unit directives from
    /// aborting a run.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let tool_def_pattern =
            Regex::new(r"^T(?P<tool>[0-9]{2})C(?P<diameter>[0-9]*\.[0-9]*)")
                .expect("invalid regex pattern");
        let tool_select_pattern =
            Regex::new(r"^T(?P<tool>[0-9]{2})").expect("invalid regex pattern");
        let hole_pattern =
            Regex::new(r"^X(?P<x>[0-9]+)Y(?P<y>[0-9]+)").expect("invalid regex pattern");

        let file = File::open(path)?;
        for line in BufReader::new(file).lines() {
            let line = line?;

            if let Some(caps) = tool_def_pattern.captures(&line) {
                let parsed = (caps["tool"].parse::<u32>(), caps["diameter"].parse::<f64>());
                if let (Ok(id), Ok(diameter)) = parsed {
                    self.tools.insert(
                        id,
                        Tool {
                            diameter,
                            hits: Vec::new(),
                        },
                    );
                    continue;
                }
            }

            if let Some(caps) = tool_select_pattern.captures(&line) {
                if let Ok(id) = caps["tool"].parse::<u32>() {
                    if self.tools.contains_key(&id) {
                        self.current = Some(id);
                    } else {
                        self.current = None;
                        warn!(tool = id, "selection of undefined drill tool");
                    }
                    continue;
                }
            }

            if let Some(caps) = hole_pattern.captures(&line) {
                let parsed = (caps["x"].parse::<i64>(), caps["y"].parse::<i64>());
                if let (Ok(x), Ok(y)) = parsed {
                    let id = self.current.ok_or_else(|| DrillError::HoleBeforeSelection {
                        line: line.clone(),
                    })?;
                    if let Some(tool) = self.tools.get_mut(&id) {
                        tool.hits.push((x, y));
                    }
                    continue;
                }
            }

            if !matches!(line.trim(), "%" | "M30") {
                warn!(line = %line, "skipping unrecognized drill file line");
            }
        }
        Ok(())
    }

    /// Select the tool whose diameter exactly equals `diameter`, allocating
    /// the next free id when none matches. Returns the selected id.
    pub fn select_or_create_tool(&mut self, diameter: f64) -> u32 {
        for (&id, tool) in &self.tools {
            if tool.diameter == diameter {
                self.current = Some(id);
                return id;
            }
        }

        let id = self.tools.keys().next_back().map_or(1, |&max| max + 1);
        self.tools.insert(
            id,
            Tool {
                diameter,
                hits: Vec::new(),
            },
        );
        self.current = Some(id);
        id
    }

    /// Record one hole at `point` (board units) against the current tool.
    pub fn add_hit(&mut self, point: Point) -> Result<()> {
        let id = self.current.ok_or(DrillError::NoToolSelected)?;
        let tool = self.tools.get_mut(&id).ok_or(DrillError::NoToolSelected)?;
        tool.hits.push((drill_counts(point.x), drill_counts(point.y)));
        Ok(())
    }

    /// Write the tool table and every hole list, sorted by tool id, holes
    /// in insertion order.
    pub fn write(&self, path: &Path) -> Result<()> {
        let mut out = BufWriter::new(File::create(path)?);

        writeln!(out, "%")?;
        for (id, tool) in &self.tools {
            writeln!(out, "T{:02}C{:.6}", id, tool.diameter)?;
        }
        writeln!(out, "%")?;

        for (id, tool) in &self.tools {
            writeln!(out, "T{:02}", id)?;
            for &(x, y) in &tool.hits {
                writeln!(out, "X{}Y{}", x, y)?;
            }
        }

        writeln!(out, "M30")?;
        out.flush()?;
        Ok(())
    }

    /// Diameter of tool `id`, if defined.
    pub fn tool_diameter(&self, id: u32) -> Option<f64> {
        self.tools.get(&id).map(|tool| tool.diameter)
    }

    /// Holes recorded for tool `id`, in insertion order.
    pub fn holes(&self, id: u32) -> Option<&[(i64, i64)]> {
        self.tools.get(&id).map(|tool| tool.hits.as_slice())
    }

    /// Total hole count across every tool.
    pub fn hole_count(&self) -> usize {
        self.tools.values().map(|tool| tool.hits.len()).sum()
    }

    /// The id selection or creation left current, if any.
    pub fn current_tool(&self) -> Option<u32> {
        self.current
    }
}
