//! Configuration enum types.

use crate::draw::{Color, color::*};
use log::warn;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGB values.
///
/// Accepted TOML forms:
/// - a name: `stroke_color = "black"`
/// - an RGB array with 0-255 components: `backdrop_color = [128, 128, 128]`
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: black, white, gray, red, green, blue, yellow, orange
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the specification to a [`Color`].
    ///
    /// Unknown color names fall back to black with a logged warning. RGB
    /// arrays are scaled from 0-255 to 0.0-1.0 with full opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using black", name);
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color::new(
                *r as f64 / 255.0,
                *g as f64 / 255.0,
                *b as f64 / 255.0,
                1.0,
            ),
        }
    }
}
