//! Background dot-grid layout.
//!
//! Pure layout: positions only. The host draws the dots.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::geom::Point;

/// Positions of the background grid dots for a square canvas of
/// `canvas_width` pixels, row-major from the top-left corner.
///
/// Dot spacing is `canvas_width / dots_per_row`, with each coordinate
/// floored to a whole pixel so dots land on device pixels.
#[must_use]
pub fn dot_grid(canvas_width: f64, dots_per_row: u32) -> Vec<Point> {
    let spacing = canvas_width / f64::from(dots_per_row);
    let mut dots: Vec<Point> = Vec::new();
    for row in 0..dots_per_row {
        for col in 0..dots_per_row {
            dots.push(Point::new(
                (f64::from(col) * spacing).floor(),
                (f64::from(row) * spacing).floor(),
            ));
        }
    }
    dots
}
