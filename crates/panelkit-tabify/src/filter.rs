//! Filter-chain plumbing for outline processing
//!
//! An outline pass is a chain of stages sharing one operation set. Each
//! stage implements [`OutlineSink`] and owns its successor as a generic
//! parameter, so composition is static and a pass is a single forward walk:
//! the reader dispatches into the head of the chain and the writer at the
//! tail serializes whatever reaches it. Operations are never reordered;
//! tab and border state depend on traversal order.

use panelkit_core::{Point, Result};

/// One plotting instruction from the outline file
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Reposition the pen without drawing (D02)
    MoveTo(Point),
    /// Draw a straight stroke to the target (D01)
    DrawTo(Point),
    /// A line forwarded verbatim
    Passthrough(String),
}

/// A stage in the outline filter chain
///
/// `finish` signals end-of-stream and must be called exactly once per pass;
/// stages append their trailing geometry there before propagating the
/// signal downstream.
pub trait OutlineSink {
    /// Reposition without drawing.
    fn move_to(&mut self, point: Point) -> Result<()>;

    /// Draw a straight stroke from the current position.
    fn draw_to(&mut self, point: Point) -> Result<()>;

    /// Forward a line this stage does not interpret.
    fn passthrough(&mut self, line: &str) -> Result<()>;

    /// End-of-stream.
    fn finish(&mut self) -> Result<()>;

    /// Dispatch one parsed operation.
    fn apply(&mut self, operation: &Operation) -> Result<()> {
        match operation {
            Operation::MoveTo(point) => self.move_to(*point),
            Operation::DrawTo(point) => self.draw_to(*point),
            Operation::Passthrough(line) => self.passthrough(line),
        }
    }
}

/// Recording sink
///
/// Collects every operation it receives; terminates a chain in tests and
/// diagnostics where no file output is wanted.
#[derive(Debug, Default)]
pub struct OperationLog {
    operations: Vec<Operation>,
    finish_count: usize,
}

impl OperationLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// The operations received so far, in arrival order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// How many times `finish` has been signaled.
    pub fn finish_count(&self) -> usize {
        self.finish_count
    }
}

impl OutlineSink for OperationLog {
    fn move_to(&mut self, point: Point) -> Result<()> {
        self.operations.push(Operation::MoveTo(point));
        Ok(())
    }

    fn draw_to(&mut self, point: Point) -> Result<()> {
        self.operations.push(Operation::DrawTo(point));
        Ok(())
    }

    fn passthrough(&mut self, line: &str) -> Result<()> {
        self.operations.push(Operation::Passthrough(line.to_string()));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finish_count += 1;
        Ok(())
    }
}
