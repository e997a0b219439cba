// Feeds pointer events (motion/buttons) into the sketch state machine.
use log::debug;
use smithay_client_toolkit::seat::pointer::{
    BTN_LEFT, BTN_MIDDLE, BTN_RIGHT, PointerEvent, PointerEventKind, PointerHandler,
};
use wayland_client::{Connection, QueueHandle, protocol::wl_pointer};

use crate::input::MouseButton;

use super::super::state::WaylandState;

impl PointerHandler for WaylandState {
    fn pointer_frame(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _pointer: &wl_pointer::WlPointer,
        events: &[PointerEvent],
    ) {
        for event in events {
            match event.kind {
                PointerEventKind::Enter { .. } => {
                    debug!(
                        "Pointer entered at ({}, {})",
                        event.position.0, event.position.1
                    );
                }
                PointerEventKind::Leave { .. } => {
                    debug!("Pointer left surface");
                    // Treated like a release so a mid-drag gesture is
                    // committed rather than lost.
                    self.input_state.on_pointer_leave();
                }
                PointerEventKind::Motion { .. } => {
                    self.input_state
                        .on_pointer_motion(event.position.0 as i32, event.position.1 as i32);
                }
                PointerEventKind::Press { button, .. } => {
                    debug!(
                        "Button {} pressed at ({}, {})",
                        button, event.position.0, event.position.1
                    );

                    let mb = match button {
                        BTN_LEFT => MouseButton::Left,
                        BTN_MIDDLE => MouseButton::Middle,
                        BTN_RIGHT => MouseButton::Right,
                        _ => continue,
                    };

                    self.input_state.on_pointer_press(
                        mb,
                        event.position.0 as i32,
                        event.position.1 as i32,
                    );
                }
                PointerEventKind::Release { button, .. } => {
                    debug!("Button {} released", button);

                    let mb = match button {
                        BTN_LEFT => MouseButton::Left,
                        BTN_MIDDLE => MouseButton::Middle,
                        BTN_RIGHT => MouseButton::Right,
                        _ => continue,
                    };

                    self.input_state.on_pointer_release(mb);
                }
                PointerEventKind::Axis { .. } => {
                    // Stroke width is fixed by config; scroll does nothing.
                }
            }
        }
    }
}
