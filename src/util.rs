//! Color name lookup shared by the configuration layer.

use crate::draw::{Color, color::*};

/// Maps a color name string to a [`Color`] value.
///
/// Used by the configuration system to parse named colors from the config
/// file. Matching is case-insensitive.
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "black" => Some(BLACK),
        "white" => Some(WHITE),
        "gray" | "grey" => Some(GRAY),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        _ => None,
    }
}
