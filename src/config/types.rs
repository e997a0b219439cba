//! Configuration type definitions.

use super::enums::ColorSpec;
use serde::{Deserialize, Serialize};

/// Stroke appearance settings.
///
/// Every stroke on the surface is drawn with this one color and width; there
/// is no runtime styling beyond the initial shape-mode selection.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Stroke color - either a named color (black, white, gray, red, green,
    /// blue, yellow, orange) or an RGB array like `[0, 0, 0]`
    #[serde(default = "default_stroke_color")]
    pub stroke_color: ColorSpec,

    /// Stroke line width in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    /// Shape mode selected at startup ("path" or "rect"); the `--shape`
    /// CLI flag overrides this
    #[serde(default = "default_initial_shape")]
    pub initial_shape: String,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            stroke_color: default_stroke_color(),
            stroke_width: default_stroke_width(),
            initial_shape: default_initial_shape(),
        }
    }
}

/// Canvas backdrop settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Full-surface background tone
    #[serde(default = "default_backdrop_color")]
    pub backdrop_color: ColorSpec,

    /// Tone of the decorative inset panel (half the surface size, centered)
    #[serde(default = "default_panel_color")]
    pub panel_color: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            backdrop_color: default_backdrop_color(),
            panel_color: default_panel_color(),
        }
    }
}

/// Performance tuning options.
///
/// These settings control rendering smoothness. Most users won't need to
/// change them from their defaults.
#[derive(Debug, Serialize, Deserialize)]
pub struct PerformanceConfig {
    /// Number of shm buffers to rotate through (valid range: 2 - 4)
    /// - 2 = double buffering (lower memory, potential tearing)
    /// - 3 = triple buffering (balanced, recommended)
    /// - 4 = quad buffering (highest memory, smoothest)
    #[serde(default = "default_buffer_count")]
    pub buffer_count: u32,

    /// Throttle rendering to the compositor's frame callbacks.
    /// Set to false for lower latency at the cost of potential tearing.
    #[serde(default = "default_enable_vsync")]
    pub enable_vsync: bool,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            buffer_count: default_buffer_count(),
            enable_vsync: default_enable_vsync(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_stroke_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_stroke_width() -> f64 {
    2.0
}

fn default_initial_shape() -> String {
    "path".to_string()
}

fn default_backdrop_color() -> ColorSpec {
    ColorSpec::Name("gray".to_string())
}

fn default_panel_color() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_buffer_count() -> u32 {
    3
}

fn default_enable_vsync() -> bool {
    true
}
