//! Sketch state machine and interaction state management.

use crate::draw::{Frame, Point, Stroke};
use crate::input::shape_mode::ShapeMode;

/// Per-gesture drawing state machine.
///
/// The active stroke exists only inside the `Drawing` variant, so "not
/// drawing" structurally implies there is no in-progress stroke. The only
/// transitions are press (to `Drawing`) and release/leave (to `Idle`).
#[derive(Debug)]
pub enum SketchState {
    /// Not drawing - waiting for a press
    Idle,
    /// A gesture is in progress (button held down)
    Drawing {
        /// Points accumulated since the press, in arrival order
        stroke: Stroke,
    },
}

/// Main interaction state for the sketch surface.
///
/// Holds the committed strokes, the per-gesture state machine, and the
/// shape-mode selection. All mutation happens through the pointer and key
/// handlers; the backend only reads this state when rendering.
pub struct InputState {
    /// Strokes committed by past gestures, in commit order
    pub frame: Frame,
    /// Current gesture state
    pub state: SketchState,
    /// Selected shape mode. Held as state but not consulted when rendering
    /// or committing strokes.
    pub shape_mode: ShapeMode,
    /// Whether the user requested to close the surface
    pub should_exit: bool,
    /// Whether the display needs to be repainted
    pub needs_redraw: bool,
    /// Surface width in pixels (set by the backend after configuration)
    pub surface_width: u32,
    /// Surface height in pixels (set by the backend after configuration)
    pub surface_height: u32,
}

impl InputState {
    /// Creates a new idle state starting in the given shape mode.
    ///
    /// Surface dimensions default to 0 and are updated by the backend once
    /// the compositor configures the surface.
    pub fn with_shape_mode(shape_mode: ShapeMode) -> Self {
        Self {
            frame: Frame::new(),
            state: SketchState::Idle,
            shape_mode,
            should_exit: false,
            needs_redraw: true,
            surface_width: 0,
            surface_height: 0,
        }
    }

    /// Records the surface dimensions reported by the compositor.
    ///
    /// Stroke state is untouched; a resize only changes where the next
    /// repaint draws.
    pub fn update_surface_dimensions(&mut self, width: u32, height: u32) {
        self.surface_width = width;
        self.surface_height = height;
    }

    /// Points of the in-progress stroke, empty while idle.
    pub fn active_points(&self) -> &[Point] {
        match &self.state {
            SketchState::Drawing { stroke } => &stroke.points,
            SketchState::Idle => &[],
        }
    }

    /// Returns whether a gesture is currently in progress.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, SketchState::Drawing { .. })
    }

    /// Switches the shape mode.
    ///
    /// The selection has no effect on stroke data or rendered output, so it
    /// neither touches the frame nor requests a redraw.
    pub fn select_shape_mode(&mut self, mode: ShapeMode) {
        if self.shape_mode != mode {
            self.shape_mode = mode;
            log::info!("Shape mode set to {}", mode.label());
        }
    }
}
