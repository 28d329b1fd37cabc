//! Vertex deduplication: reduce the segment path to its unique endpoints.

#[cfg(test)]
#[path = "vertex_test.rs"]
mod vertex_test;

use crate::consts::VERTEX_LABELS;
use crate::doc::Segment;
use crate::geom::{Point, distance_squared};
use crate::snap::SnapSettings;

/// Collect the unique endpoints of `segments`, merging points that lie
/// within the snap tolerance of each other.
///
/// Endpoints are visited in segment order, start before end. Each is
/// rounded to `settings.decimals` digits; if the rounded point lies within
/// tolerance of a vertex already collected, the earlier vertex stands as
/// the representative and the new point is dropped. Representatives are
/// never averaged or moved. The output preserves first-seen order, so
/// vertex labels stay stable while a drag is in progress.
///
/// Quadratic in the number of endpoints, which is fine at hand-drawn
/// diagram scale.
#[must_use]
pub fn unique_vertices(segments: &[Segment], settings: SnapSettings) -> Vec<Point> {
    let tolerance_sq = settings.tolerance_squared();
    let mut vertices: Vec<Point> = Vec::new();
    for segment in segments {
        for endpoint in [segment.start, segment.end] {
            let rounded = endpoint.rounded(settings.decimals);
            let seen = vertices
                .iter()
                .any(|vertex| distance_squared(*vertex, rounded) <= tolerance_sq);
            if !seen {
                vertices.push(rounded);
            }
        }
    }
    vertices
}

/// Label for the vertex at `index`, or `None` once the alphabet runs out.
#[must_use]
pub fn vertex_label(index: usize) -> Option<char> {
    VERTEX_LABELS.chars().nth(index)
}
