//! Outline file writer
//!
//! Tail of the filter chain: serializes operations back into the outline
//! format. Coordinates are re-encoded as fixed-point integers at the
//! outline scale; `finish` emits the single end-of-program terminator.

use std::io::{BufWriter, Write};

use panelkit_core::{Point, Result};

use crate::filter::OutlineSink;

/// Serializes a stream of operations into an outline file
pub struct OutlineWriter<W: Write> {
    out: BufWriter<W>,
}

impl<W: Write> OutlineWriter<W> {
    /// Create a writer over any byte sink.
    pub fn new(out: W) -> Self {
        Self {
            out: BufWriter::new(out),
        }
    }
}

/// Encode a board-unit coordinate as an outline-file field: five decimal
/// places with the separator removed, so 1.0 becomes "100000".
fn coordinate_field(value: f64) -> String {
    format!("{:.5}", value).replace('.', "")
}

impl<W: Write> OutlineSink for OutlineWriter<W> {
    fn move_to(&mut self, point: Point) -> Result<()> {
        writeln!(
            self.out,
            "X{}Y{}D02*",
            coordinate_field(point.x),
            coordinate_field(point.y)
        )?;
        Ok(())
    }

    fn draw_to(&mut self, point: Point) -> Result<()> {
        writeln!(
            self.out,
            "X{}Y{}D01*",
            coordinate_field(point.x),
            coordinate_field(point.y)
        )?;
        Ok(())
    }

    fn passthrough(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.out, "M02*")?;
        self.out.flush()?;
        Ok(())
    }
}
