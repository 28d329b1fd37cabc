//! The sketch engine: pointer lifecycle, snapping, and derived views.
//!
//! The engine owns the segment store and the drag state machine. Pointer
//! handlers return an [`Action`] so the host knows whether a repaint is
//! needed; derived views are recomputed from the segment sequence on every
//! read, so there is no cached state to invalidate between events.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use log::debug;
use thiserror::Error;

use crate::angle::{self, AngleMarker};
use crate::doc::{Segment, Sketch};
use crate::geom::Point;
use crate::input::{InputState, Tool};
use crate::polygon;
use crate::snap::{self, SnapSettings};
use crate::vertex;

/// What a pointer event did to the sketch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing changed (wrong tool, or a move while no drag is active).
    None,
    /// A new segment was started at the pointer-down position.
    SegmentStarted,
    /// The live segment's end followed the pointer.
    SegmentMoved,
    /// The live segment was finalized at pointer-up.
    SegmentCommitted,
    /// All segments were removed.
    Cleared,
}

/// Rejected pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// A coordinate was NaN or infinite. Rejected before it reaches the
    /// sketch; the geometry functions below this boundary do not validate.
    #[error("pointer coordinate is not finite")]
    NonFinite,
}

/// The sketch engine. Owns the segment store, the active tool, and the
/// drag state machine.
///
/// While a drag is active, the live segment's own endpoints are not snap
/// candidates: the endpoint under the pointer must not stick to its own
/// previous position. Endpoints of every earlier segment remain candidates.
#[derive(Debug, Default)]
pub struct Engine {
    sketch: Sketch,
    tool: Tool,
    input: InputState,
    settings: SnapSettings,
}

impl Engine {
    /// Engine with default snap settings and the select tool active.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with custom snap settings.
    #[must_use]
    pub fn with_settings(settings: SnapSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    // --- Tool ---

    /// Switch the active tool. Does not interrupt a drag in progress.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// The currently active tool.
    #[must_use]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    // --- Pointer lifecycle ---

    /// Begin a drag: snap the position onto an existing vertex when one is
    /// in range and append a zero-length segment there.
    ///
    /// # Errors
    ///
    /// Rejects non-finite coordinates with [`InputError::NonFinite`].
    pub fn pointer_down(&mut self, position: Point) -> Result<Action, InputError> {
        if self.tool != Tool::Line {
            return Ok(Action::None);
        }
        let start = self.conform(position, &self.vertices())?;
        self.sketch.push(Segment::new(start, start));
        self.input = InputState::Drawing;
        debug!("segment started at {start:?}");
        Ok(Action::SegmentStarted)
    }

    /// Drag in progress: the live segment's end follows the pointer,
    /// snapping onto earlier vertices. A move without an active drag is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Rejects non-finite coordinates with [`InputError::NonFinite`].
    pub fn pointer_move(&mut self, position: Point) -> Result<Action, InputError> {
        if self.input != InputState::Drawing {
            return Ok(Action::None);
        }
        let end = self.conform(position, &self.snap_candidates())?;
        self.sketch.replace_last_end(end);
        Ok(Action::SegmentMoved)
    }

    /// End the drag, finalizing the live segment's end.
    ///
    /// # Errors
    ///
    /// Rejects non-finite coordinates with [`InputError::NonFinite`].
    pub fn pointer_up(&mut self, position: Point) -> Result<Action, InputError> {
        if self.input != InputState::Drawing {
            return Ok(Action::None);
        }
        let end = self.conform(position, &self.snap_candidates())?;
        self.sketch.replace_last_end(end);
        self.input = InputState::Idle;
        debug!("segment committed, {} total", self.sketch.len());
        Ok(Action::SegmentCommitted)
    }

    /// Remove every segment and reset the drag state.
    pub fn clear(&mut self) -> Action {
        self.sketch.clear();
        self.input = InputState::Idle;
        debug!("sketch cleared");
        Action::Cleared
    }

    /// Round an incoming pointer position and snap it onto a candidate
    /// vertex when one is within tolerance.
    fn conform(&self, position: Point, candidates: &[Point]) -> Result<Point, InputError> {
        if !position.is_finite() {
            return Err(InputError::NonFinite);
        }
        let rounded = position.rounded(self.settings.decimals);
        Ok(snap::snap_target(candidates, rounded, self.settings).unwrap_or(rounded))
    }

    /// Vertices eligible as snap targets for the endpoint being dragged:
    /// everything except the live segment's own endpoints.
    fn snap_candidates(&self) -> Vec<Point> {
        match self.sketch.segments().split_last() {
            Some((_, rest)) => vertex::unique_vertices(rest, self.settings),
            None => Vec::new(),
        }
    }

    // --- Derived views ---

    /// Deduplicated vertices in first-seen order.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point> {
        vertex::unique_vertices(self.sketch.segments(), self.settings)
    }

    /// Interior-angle annotations for the current chain, including the two
    /// wrap-around angles when the path is closed.
    #[must_use]
    pub fn angles(&self) -> Vec<AngleMarker> {
        let vertices = self.vertices();
        angle::chain_angles(&vertices, self.is_closed())
    }

    /// Whether the drawn path forms a closed polygon.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        polygon::is_closed(self.sketch.segments())
    }

    /// The segments drawn so far, oldest first.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        self.sketch.segments()
    }

    /// The snap settings in effect.
    #[must_use]
    pub fn settings(&self) -> SnapSettings {
        self.settings
    }
}
