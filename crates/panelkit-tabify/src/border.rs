//! Border filter
//!
//! Forwards every operation unchanged and, at end-of-stream, appends the
//! panel border: a closed trace through the configured polygon followed by
//! an outer margin rectangle around its bounding box.

use panelkit_core::{ConfigError, Point, Result};

use crate::filter::OutlineSink;

/// Margin of the outer rectangle beyond the border polygon's bounding box.
const OUTER_MARGIN: f64 = 0.3;

/// Appends border geometry when the stream ends
pub struct BorderFilter<S> {
    next: S,
    border: Vec<Point>,
}

impl<S: OutlineSink> BorderFilter<S> {
    /// Create the filter over its successor stage.
    ///
    /// `border` vertices must already be in trace order with the global
    /// offset applied. An empty polygon is rejected here rather than
    /// producing zero-size geometry at end-of-stream.
    pub fn new(next: S, border: Vec<Point>) -> Result<Self> {
        if border.is_empty() {
            return Err(ConfigError::EmptyBorder.into());
        }
        Ok(Self { next, border })
    }

    /// Consume the filter, returning its successor stage.
    pub fn into_inner(self) -> S {
        self.next
    }
}

impl<S: OutlineSink> OutlineSink for BorderFilter<S> {
    fn move_to(&mut self, point: Point) -> Result<()> {
        self.next.move_to(point)
    }

    fn draw_to(&mut self, point: Point) -> Result<()> {
        self.next.draw_to(point)
    }

    fn passthrough(&mut self, line: &str) -> Result<()> {
        self.next.passthrough(line)
    }

    fn finish(&mut self) -> Result<()> {
        // Closed trace: start from the last vertex so drawing every vertex
        // in order closes the loop.
        let last = self.border[self.border.len() - 1];
        self.next.move_to(last)?;

        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for &point in &self.border {
            self.next.draw_to(point)?;
            min_x = min_x.min(point.x);
            max_x = max_x.max(point.x);
            min_y = min_y.min(point.y);
            max_y = max_y.max(point.y);
        }

        // Outer rectangle around the bounding box, returning to the
        // starting corner.
        self.next
            .move_to(Point::new(min_x - OUTER_MARGIN, min_y - OUTER_MARGIN))?;
        self.next
            .draw_to(Point::new(max_x + OUTER_MARGIN, min_y - OUTER_MARGIN))?;
        self.next
            .draw_to(Point::new(max_x + OUTER_MARGIN, max_y + OUTER_MARGIN))?;
        self.next
            .draw_to(Point::new(min_x - OUTER_MARGIN, max_y + OUTER_MARGIN))?;
        self.next
            .draw_to(Point::new(min_x - OUTER_MARGIN, min_y - OUTER_MARGIN))?;

        self.next.finish()
    }
}
