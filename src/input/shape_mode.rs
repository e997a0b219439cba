//! Shape mode selection.

use thiserror::Error;

/// The user-selectable shape mode.
///
/// A closed set of exactly two modes, selectable from the keyboard at
/// runtime and via `--shape` / `initial_shape` at startup. The selection is
/// held as interaction state but is not consulted when strokes are rendered
/// or committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeMode {
    /// Freehand path (default)
    #[default]
    Path,
    /// Rectangle
    Rect,
}

impl ShapeMode {
    /// Lowercase label matching the CLI/config spelling.
    pub fn label(self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Rect => "rect",
        }
    }

    /// Returns the next mode in the fixed cycle order.
    pub fn cycled(self) -> Self {
        match self {
            Self::Path => Self::Rect,
            Self::Rect => Self::Path,
        }
    }
}

/// Error returned when a shape-mode string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown shape mode '{0}' (expected 'path' or 'rect')")]
pub struct ParseShapeModeError(String);

impl std::str::FromStr for ShapeMode {
    type Err = ParseShapeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "path" => Ok(Self::Path),
            "rect" => Ok(Self::Rect),
            _ => Err(ParseShapeModeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn default_mode_is_path() {
        assert_eq!(ShapeMode::default(), ShapeMode::Path);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(ShapeMode::from_str("path").unwrap(), ShapeMode::Path);
        assert_eq!(ShapeMode::from_str("Rect").unwrap(), ShapeMode::Rect);
        assert_eq!(ShapeMode::from_str("RECT").unwrap(), ShapeMode::Rect);
    }

    #[test]
    fn parse_rejects_unknown_modes() {
        let err = ShapeMode::from_str("squiggle").unwrap_err();
        assert!(err.to_string().contains("squiggle"));
    }

    #[test]
    fn cycle_visits_both_modes() {
        assert_eq!(ShapeMode::Path.cycled(), ShapeMode::Rect);
        assert_eq!(ShapeMode::Rect.cycled(), ShapeMode::Path);
    }

    #[test]
    fn labels_round_trip_through_parse() {
        for mode in [ShapeMode::Path, ShapeMode::Rect] {
            assert_eq!(ShapeMode::from_str(mode.label()).unwrap(), mode);
        }
    }
}
