#![forbid(unsafe_code)]

//! Zoom/pan state for the graph viewport.
//!
//! Interaction state is modeled as immutable snapshots: every operation is a
//! pure transition from one value to the next, over primitive coordinates.
//! The controller therefore unit-tests without a rendering surface, and it
//! never touches graph-model coordinates; the renderer composes the two.

use serde::{Deserialize, Serialize};

pub const MIN_ZOOM: f64 = 0.55;
pub const MAX_ZOOM: f64 = 2.7;
/// Zoom increment the presentation layer maps to one wheel notch.
pub const ZOOM_STEP: f64 = 0.1;

/// The transform consumed by the renderer.
///
/// Independent lifecycle: it survives graph rebuilds until explicitly
/// reset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }
}

impl ViewportState {
    /// Sanitizes an externally supplied zoom (a URL parameter, a persisted
    /// preference): non-finite or non-positive values fall back to 1,
    /// anything else clamps into range.
    pub fn with_zoom(zoom: f64) -> Self {
        let zoom = if zoom.is_finite() && zoom > 0.0 {
            zoom.clamp(MIN_ZOOM, MAX_ZOOM)
        } else {
            1.0
        };
        Self {
            zoom,
            ..Self::default()
        }
    }

    /// Sanitizes externally supplied pan offsets; non-finite components
    /// become 0.
    pub fn with_pan(pan_x: f64, pan_y: f64) -> Self {
        Self {
            pan_x: if pan_x.is_finite() { pan_x } else { 0.0 },
            pan_y: if pan_y.is_finite() { pan_y } else { 0.0 },
            ..Self::default()
        }
    }
}

/// Pan and pointer positions captured when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct DragOrigin {
    pointer_x: f64,
    pointer_y: f64,
    pan_x: f64,
    pan_y: f64,
}

/// State machine over zoom and pan.
///
/// At most one drag session is active at a time; pointer capture at the
/// presentation boundary enforces the single writer, so no interleaving
/// hazard exists here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    state: ViewportState,
    drag: Option<DragOrigin>,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(state: ViewportState) -> Self {
        Self { state, drag: None }
    }

    /// The current snapshot handed to the renderer.
    pub fn state(&self) -> ViewportState {
        self.state
    }

    pub fn zoom(&self) -> f64 {
        self.state.zoom
    }

    pub fn pan(&self) -> (f64, f64) {
        (self.state.pan_x, self.state.pan_y)
    }

    pub fn dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Adjusts zoom by `delta`, clamped into `[MIN_ZOOM, MAX_ZOOM]`.
    /// Non-finite deltas from malformed wheel events are ignored.
    #[must_use]
    pub fn zoom_by(self, delta: f64) -> Self {
        if !delta.is_finite() {
            return self;
        }
        Self {
            state: ViewportState {
                zoom: (self.state.zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM),
                ..self.state
            },
            ..self
        }
    }

    /// Starts a drag session at the given pointer position. A drag already
    /// in progress restarts from the new origin.
    #[must_use]
    pub fn begin_drag(self, pointer_x: f64, pointer_y: f64) -> Self {
        if !pointer_x.is_finite() || !pointer_y.is_finite() {
            return self;
        }
        Self {
            drag: Some(DragOrigin {
                pointer_x,
                pointer_y,
                pan_x: self.state.pan_x,
                pan_y: self.state.pan_y,
            }),
            ..self
        }
    }

    /// Moves the pan to `origin_pan + (pointer - origin_pointer)`. Without
    /// an active drag this is a no-op, as are non-finite pointer positions.
    #[must_use]
    pub fn drag_to(self, pointer_x: f64, pointer_y: f64) -> Self {
        let Some(origin) = self.drag else {
            return self;
        };
        if !pointer_x.is_finite() || !pointer_y.is_finite() {
            return self;
        }
        Self {
            state: ViewportState {
                pan_x: origin.pan_x + (pointer_x - origin.pointer_x),
                pan_y: origin.pan_y + (pointer_y - origin.pointer_y),
                ..self.state
            },
            ..self
        }
    }

    /// Ends the active drag session, keeping the pan where it landed.
    #[must_use]
    pub fn end_drag(self) -> Self {
        Self { drag: None, ..self }
    }

    /// Restores zoom 1 and pan (0, 0); any drag in progress is dropped.
    #[must_use]
    pub fn reset(self) -> Self {
        Self::default()
    }
}
