//! Closed-polygon detection over the ordered segment path.

#[cfg(test)]
#[path = "polygon_test.rs"]
mod polygon_test;

use crate::doc::Segment;

/// Whether the segment path forms a closed polygon.
///
/// Requires at least three segments, each starting exactly where the
/// previous one ended, with the last segment ending exactly at the first
/// segment's start. Comparison is exact, not tolerance-based: connected
/// endpoints come out of the snapping path sharing the same bits, so a
/// mismatch here means the segments genuinely do not meet.
#[must_use]
pub fn is_closed(segments: &[Segment]) -> bool {
    if segments.len() < 3 {
        return false;
    }

    let first = &segments[0];
    let last = &segments[segments.len() - 1];
    if first.start != last.end {
        return false;
    }

    segments.windows(2).all(|pair| pair[1].start == pair[0].end)
}
