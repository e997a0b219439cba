use crate::input::events::Key;
use crate::input::shape_mode::ShapeMode;

use super::InputState;

impl InputState {
    /// Processes a key press.
    ///
    /// # Behavior
    /// - `Escape`: request exit
    /// - `p` / `r`: select the path / rect shape mode
    /// - `Tab`: cycle the shape mode
    /// - anything else: ignored
    pub fn on_key_press(&mut self, key: Key) {
        match key {
            Key::Escape => {
                self.should_exit = true;
            }
            Key::Tab => {
                self.select_shape_mode(self.shape_mode.cycled());
            }
            Key::Char('p') | Key::Char('P') => {
                self.select_shape_mode(ShapeMode::Path);
            }
            Key::Char('r') | Key::Char('R') => {
                self.select_shape_mode(ShapeMode::Rect);
            }
            _ => {}
        }
    }
}
