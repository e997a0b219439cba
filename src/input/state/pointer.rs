use crate::draw::Stroke;
use crate::input::events::MouseButton;

use super::{InputState, SketchState};

impl InputState {
    /// Processes a pointer button press.
    ///
    /// A left press always starts a fresh gesture seeded with the press
    /// location - a re-press while a gesture is in progress discards the
    /// old active stroke and restarts from the new point. Other buttons are
    /// ignored.
    pub fn on_pointer_press(&mut self, button: MouseButton, x: i32, y: i32) {
        if button != MouseButton::Left {
            return;
        }

        self.state = SketchState::Drawing {
            stroke: Stroke::starting_at(x, y),
        };
        self.needs_redraw = true;
    }

    /// Processes pointer motion.
    ///
    /// Appends the point to the active stroke while a gesture is in
    /// progress; a no-op while idle, so no stray points are recorded
    /// outside a press/release bracket. Coincident points are kept.
    pub fn on_pointer_motion(&mut self, x: i32, y: i32) {
        if let SketchState::Drawing { stroke } = &mut self.state {
            stroke.push(x, y);
            self.needs_redraw = true;
        }
    }

    /// Processes a pointer button release.
    ///
    /// A left release while drawing commits the active stroke; a no-op
    /// otherwise.
    pub fn on_pointer_release(&mut self, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }

        self.finish_stroke();
    }

    /// Processes the pointer leaving the surface.
    ///
    /// Routed through the same commit path as a release, so a gesture is
    /// never lost when the cursor exits the surface without a release
    /// event.
    pub fn on_pointer_leave(&mut self) {
        self.finish_stroke();
    }

    /// Commits the active stroke (if any) and returns to idle.
    ///
    /// Empty strokes are discarded rather than committed; a press always
    /// seeds one point, so in practice every finished gesture commits.
    fn finish_stroke(&mut self) {
        if let SketchState::Drawing { stroke } =
            std::mem::replace(&mut self.state, SketchState::Idle)
        {
            if !stroke.is_empty() {
                self.frame.push(stroke);
            }
            self.needs_redraw = true;
        }
    }
}
