//! Tab filter
//!
//! Detects where the outline path crosses a configured breakaway tab, clips
//! the path around the tab opening, records a mousebite perforation row in
//! the drill ledger for every crossing, and draws the tabs' side cuts once
//! the stream ends.

use tracing::debug;

use panelkit_core::{Point, Result};

use crate::drill::DrillFile;
use crate::filter::OutlineSink;

/// Horizontal width of every tab opening, in board units.
pub const TAB_WIDTH: f64 = 0.1;

/// Capture band extent below a tab's anchor.
const BAND_BELOW: f64 = 0.05;

/// Capture band extent above a tab's anchor.
const BAND_ABOVE: f64 = 0.2;

/// Segments with more vertical delta than this are never tab crossings.
const HORIZONTAL_EPSILON: f64 = 0.001;

/// Sideways displacement of the staggered mousebite holes.
const MOUSEBITE_STAGGER: f64 = 0.010;

/// Gap positions of the two anchor holes, just beyond the gap's ends.
const ANCHOR_STOPS: [f64; 2] = [-0.15, 1.15];

/// Gap positions of the three staggered holes.
const STAGGERED_STOPS: [f64; 3] = [0.17, 0.5, 0.83];

/// One breakaway tab
///
/// Anchored at its lower-left corner; accumulates the Y coordinates of the
/// horizontal outline segments found to cross it during the pass.
#[derive(Debug, Clone)]
pub struct Tab {
    anchor: Point,
    bottom_y: Option<f64>,
    top_y: Option<f64>,
}

impl Tab {
    /// Create a tab from its lower-left anchor, offset already applied.
    pub fn new(anchor: Point) -> Self {
        Self {
            anchor,
            bottom_y: None,
            top_y: None,
        }
    }

    /// The tab's lower-left anchor.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Y of the lowest crossing seen, once one exists.
    pub fn bottom_y(&self) -> Option<f64> {
        self.bottom_y
    }

    /// Y of the second crossing seen, kept above `bottom_y`.
    pub fn top_y(&self) -> Option<f64> {
        self.top_y
    }

    /// The tab's horizontal span as (left, right).
    fn span(&self) -> (f64, f64) {
        (self.anchor.x, self.anchor.x + TAB_WIDTH)
    }

    /// Record one crossing height, keeping `bottom_y` the smaller of the
    /// two values seen.
    fn record_crossing(&mut self, y: f64) {
        match self.bottom_y {
            None => self.bottom_y = Some(y),
            Some(bottom) if bottom < y => self.top_y = Some(y),
            Some(bottom) => {
                self.top_y = Some(bottom);
                self.bottom_y = Some(y);
            }
        }
    }
}

/// The two span-edge points of a crossing, ordered to match the crossed
/// segment's travel direction.
struct Crossing {
    near: Point,
    far: Point,
}

/// Clips the outline path around breakaway tabs
///
/// Holds the tab list, the running pen position, and the drill ledger that
/// receives the mousebite holes. Tabs are scanned by index range so a
/// single long segment crossing several tabs is split around each of them.
pub struct TabFilter<'a, S> {
    next: S,
    tabs: Vec<Tab>,
    cursor: Point,
    drill: &'a mut DrillFile,
}

impl<'a, S: OutlineSink> TabFilter<'a, S> {
    /// Create the filter over its successor stage.
    ///
    /// `tabs` must already have the global offset applied. The ledger must
    /// have the mousebite tool selected before the pass starts.
    pub fn new(next: S, tabs: Vec<Tab>, drill: &'a mut DrillFile) -> Self {
        Self {
            next,
            tabs,
            cursor: Point::new(0.0, 0.0),
            drill,
        }
    }

    /// The tabs with their accumulated crossing state.
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Consume the filter, returning its successor stage.
    pub fn into_inner(self) -> S {
        self.next
    }

    /// Test the segment cursor → `target` against `tabs[index]`, recording
    /// the crossing height on a hit.
    fn intersect(&mut self, index: usize, target: Point) -> Option<Crossing> {
        let p0 = self.cursor;
        if (p0.y - target.y).abs() > HORIZONTAL_EPSILON {
            return None;
        }

        let tab = &mut self.tabs[index];
        if p0.y < tab.anchor.y - BAND_BELOW || p0.y > tab.anchor.y + BAND_ABOVE {
            return None;
        }
        let (left, right) = tab.span();
        if p0.x < left && target.x < left {
            return None;
        }
        if p0.x > right && target.x > right {
            return None;
        }

        tab.record_crossing(p0.y);

        let left_edge = Point::new(left, p0.y);
        let right_edge = Point::new(right, p0.y);
        Some(if p0.x < target.x {
            Crossing {
                near: left_edge,
                far: right_edge,
            }
        } else {
            Crossing {
                near: right_edge,
                far: left_edge,
            }
        })
    }

    /// Draw toward `target`, clipping around any of `tabs[from..]` the
    /// segment crosses.
    ///
    /// On a hit the shortened segment up to the near edge recurses against
    /// the remaining tabs, the gap gets its mousebite row, and the pen jumps
    /// to the far edge before the scan continues toward the original target.
    fn draw_span(&mut self, target: Point, from: usize) -> Result<()> {
        for index in from..self.tabs.len() {
            if let Some(crossing) = self.intersect(index, target) {
                debug!(
                    tab = index,
                    y = crossing.near.y,
                    "outline crosses tab, clipping gap"
                );
                self.draw_span(crossing.near, index + 1)?;
                self.insert_mousebites(self.cursor, crossing.far)?;
                self.next.move_to(crossing.far)?;
            }
        }
        self.cursor = target;
        self.next.draw_to(target)
    }

    /// Record the five-hole perforation row for one gap.
    ///
    /// The two anchor holes sit on the gap line just beyond its ends; the
    /// three inner holes are staggered sideways so the perforation is not a
    /// single straight line.
    fn insert_mousebites(&mut self, p0: Point, p1: Point) -> Result<()> {
        let stagger = if p0.x > p1.x {
            -MOUSEBITE_STAGGER
        } else {
            MOUSEBITE_STAGGER
        };

        for t in ANCHOR_STOPS {
            let x = p0.x * t + p1.x * (1.0 - t);
            self.drill.add_hit(Point::new(x, p1.y))?;
        }
        for t in STAGGERED_STOPS {
            let x = p0.x * t + p1.x * (1.0 - t);
            self.drill.add_hit(Point::new(x, p1.y + stagger))?;
        }
        Ok(())
    }
}

impl<S: OutlineSink> OutlineSink for TabFilter<'_, S> {
    fn move_to(&mut self, point: Point) -> Result<()> {
        self.next.move_to(point)?;
        self.cursor = point;
        Ok(())
    }

    fn draw_to(&mut self, point: Point) -> Result<()> {
        self.draw_span(point, 0)
    }

    fn passthrough(&mut self, line: &str) -> Result<()> {
        self.next.passthrough(line)
    }

    fn finish(&mut self) -> Result<()> {
        for tab in &self.tabs {
            match (tab.bottom_y, tab.top_y) {
                (Some(bottom), Some(top)) => {
                    let (left, right) = tab.span();
                    self.next.move_to(Point::new(left, bottom))?;
                    self.next.draw_to(Point::new(left, top))?;
                    self.next.move_to(Point::new(right, bottom))?;
                    self.next.draw_to(Point::new(right, top))?;
                }
                (Some(_), None) => {
                    // Crossed once: left open, no side cuts.
                    debug!(anchor = %tab.anchor, "tab crossed only once, no side cuts");
                }
                _ => {}
            }
        }
        self.next.finish()
    }
}
