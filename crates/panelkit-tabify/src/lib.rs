//! # Panelkit Tabify
//!
//! The outline/drill transformation pipeline for merged board panels.
//! Reads a panel outline in the plotter command format and its companion
//! drill file, inserts breakable connector tabs with mousebite
//! perforations, draws the panel border, and writes both files back.
//!
//! ## Pipeline
//!
//! A single forward pass over the outline file through a chain of stages,
//! each implementing [`OutlineSink`] and owning its successor:
//!
//! Reader → Border Filter → Tab Filter → Writer
//!
//! The Tab Filter also pushes mousebite hole coordinates into the
//! [`DrillFile`] ledger, which is loaded once before the pass and written
//! once after it.

pub mod border;
pub mod drill;
pub mod filter;
pub mod job;
pub mod reader;
pub mod tabs;
pub mod writer;

pub use border::BorderFilter;
pub use drill::DrillFile;
pub use filter::{Operation, OperationLog, OutlineSink};
pub use job::{run_panel_job, MOUSEBITE_DRILL_DIAMETER};
pub use reader::OutlineReader;
pub use tabs::{Tab, TabFilter, TAB_WIDTH};
pub use writer::OutlineWriter;
