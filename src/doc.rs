//! Document model: the line segment type and the ordered sketch store.
//!
//! `Sketch` is the single source of truth for a drawing. Its mutation API
//! mirrors the pointer lifecycle (push a degenerate segment on drag-start,
//! replace the last end on drag-move, clear on demand) and it never
//! reorders. Every derived view (vertices, angles, closure) is recomputed
//! from `segments()` on read.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::consts::PX_PER_CM;
use crate::geom::{self, Point};

/// A directional line segment: `start` is where the drag began, `end` is
/// where it was released or currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Length in canvas pixels.
    #[must_use]
    pub fn length(&self) -> f64 {
        geom::distance(self.start, self.end)
    }

    /// The point halfway along the segment; anchor for the length label.
    #[must_use]
    pub fn midpoint(&self) -> Point {
        Point::new((self.start.x + self.end.x) / 2.0, (self.start.y + self.end.y) / 2.0)
    }

    /// Whether start and end coincide exactly (a just-started drag).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// Length label text for a segment, e.g. `"12.34cm"`.
#[must_use]
pub fn format_length(length_px: f64) -> String {
    format!("{:.2}cm", length_px / PX_PER_CM)
}

/// Ordered store of the segments drawn so far.
///
/// Order is load-bearing: closure detection and chained angles treat the
/// sequence as a path, with `segments[i].end` feeding `segments[i + 1].start`.
#[derive(Debug, Clone, Default)]
pub struct Sketch {
    segments: Vec<Segment>,
}

impl Sketch {
    /// Create an empty sketch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment at the end of the path.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Replace the end point of the most recent segment, leaving its start
    /// untouched. Returns `false` when the sketch is empty.
    pub fn replace_last_end(&mut self, end: Point) -> bool {
        match self.segments.last_mut() {
            Some(segment) => {
                segment.end = end;
                true
            }
            None => false,
        }
    }

    /// Drop all segments.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// The segments drawn so far, oldest first.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The most recently drawn segment, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// Number of segments in the sketch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` when no segments have been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
