//! Input model: tools and the drag state machine.
//!
//! These types capture the user's intent between pointer events. The host
//! translates DOM or toolkit events into [`crate::geom::Point`] positions
//! and tool switches; the engine consumes them and tracks the gesture here.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Pointer tool (default); pointer events leave the sketch untouched.
    #[default]
    Select,
    /// Draw line segments by dragging.
    Line,
}

/// The gesture being tracked between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    /// No drag in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A segment is being dragged out; its end follows the pointer.
    Drawing,
}
