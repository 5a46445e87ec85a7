//! Outline file reader
//!
//! Parses the line-oriented plotting micro-language into operations and
//! drives a filter chain to completion. Parsing is lenient: any line that
//! matches no recognized pattern is forwarded verbatim, since many valid
//! plotter directives are irrelevant to this transform.

use std::io::BufRead;

use regex::Regex;

use panelkit_core::units::outline_units;
use panelkit_core::{Point, Result};

use crate::filter::{Operation, OutlineSink};

/// Replacement diameter written into every round aperture definition.
///
/// Normalizes the pen width used for the tab and border strokes regardless
/// of the source panel's original tool widths.
const STROKE_DIAMETER_FIELD: &str = "0.00500";

/// End-of-program sentinel. Dropped on input; the writer emits its own.
const END_OF_PROGRAM: &str = "M02*";

/// Parses an outline file and feeds a filter chain
pub struct OutlineReader {
    draw_pattern: Regex,
    aperture_pattern: Regex,
}

impl OutlineReader {
    /// Create a reader with the outline line patterns compiled.
    pub fn new() -> Self {
        Self {
            draw_pattern: Regex::new(r"^X(?P<x>[0-9]+)Y(?P<y>[0-9]+)D(?P<d>[0-9]+)")
                .expect("invalid regex pattern"),
            aperture_pattern: Regex::new(r"^%ADD(?P<id>[0-9]+)C,[0-9]*\.[0-9]*\*%")
                .expect("invalid regex pattern"),
        }
    }

    /// Read every line of `input`, dispatching operations into `sink`, then
    /// signal end-of-stream exactly once.
    pub fn run<R: BufRead, S: OutlineSink>(&self, input: R, sink: &mut S) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            if let Some(operation) = self.parse_line(&line) {
                sink.apply(&operation)?;
            }
        }
        sink.finish()
    }

    /// Parse one line into the operation to forward, or `None` for the
    /// dropped end-of-program sentinel.
    fn parse_line(&self, line: &str) -> Option<Operation> {
        if let Some(caps) = self.draw_pattern.captures(line) {
            // Coordinate fields long enough to overflow fall through to
            // passthrough like any other unrecognized directive.
            let parsed = (
                caps["x"].parse::<i64>(),
                caps["y"].parse::<i64>(),
                caps["d"].parse::<u32>(),
            );
            if let (Ok(x), Ok(y), Ok(d)) = parsed {
                let point = Point::new(outline_units(x), outline_units(y));
                return Some(match d {
                    2 => Operation::MoveTo(point),
                    1 => Operation::DrawTo(point),
                    _ => Operation::Passthrough(line.to_string()),
                });
            }
        }

        if let Some(caps) = self.aperture_pattern.captures(line) {
            let replacement = format!("%ADD{}C,{}*%", &caps["id"], STROKE_DIAMETER_FIELD);
            return Some(Operation::Passthrough(replacement));
        }

        if line.trim() == END_OF_PROGRAM {
            return None;
        }

        Some(Operation::Passthrough(line.to_string()))
    }
}

impl Default for OutlineReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Option<Operation> {
        OutlineReader::new().parse_line(line)
    }

    #[test]
    fn test_move_and_draw() {
        assert_eq!(
            parse("X100000Y200000D02*"),
            Some(Operation::MoveTo(Point::new(1.0, 2.0)))
        );
        assert_eq!(
            parse("X50Y0D01*"),
            Some(Operation::DrawTo(Point::new(0.0005, 0.0)))
        );
    }

    #[test]
    fn test_other_dcode_passes_through() {
        assert_eq!(
            parse("X100Y100D03*"),
            Some(Operation::Passthrough("X100Y100D03*".to_string()))
        );
    }

    #[test]
    fn test_aperture_rewritten() {
        assert_eq!(
            parse("%ADD12C,0.01200*%"),
            Some(Operation::Passthrough("%ADD12C,0.00500*%".to_string()))
        );
    }

    #[test]
    fn test_sentinel_dropped() {
        assert_eq!(parse("M02*"), None);
        assert_eq!(parse("  M02*  "), None);
    }

    #[test]
    fn test_unrecognized_passes_through() {
        assert_eq!(
            parse("G04 panel outline*"),
            Some(Operation::Passthrough("G04 panel outline*".to_string()))
        );
    }
}
