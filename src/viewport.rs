//! Viewport mapping from client-space event coordinates to canvas pixels.
//!
//! The canvas element's backing store can differ in size from its CSS box,
//! so a pointer event's client coordinates must be shifted by the box
//! origin and scaled per axis before they mean anything to the sketch. The
//! host builds a [`Viewport`] from the element's bounding rect and backing
//! size and runs every event position through [`Viewport::to_canvas`].

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::geom::Point;

/// Mapping from client (event) space to canvas pixel space.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    /// Left edge of the canvas box in client space.
    pub left: f64,
    /// Top edge of the canvas box in client space.
    pub top: f64,
    /// Horizontal backing-store pixels per CSS pixel.
    pub scale_x: f64,
    /// Vertical backing-store pixels per CSS pixel.
    pub scale_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

impl Viewport {
    /// Build the mapping from the canvas box in client space and the
    /// canvas backing-store size.
    #[must_use]
    pub fn new(left: f64, top: f64, css_width: f64, css_height: f64, canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            left,
            top,
            scale_x: canvas_width / css_width,
            scale_y: canvas_height / css_height,
        }
    }

    /// Convert a client-space event position to canvas pixels.
    #[must_use]
    pub fn to_canvas(&self, client: Point) -> Point {
        Point::new((client.x - self.left) * self.scale_x, (client.y - self.top) * self.scale_y)
    }
}
