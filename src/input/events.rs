//! Generic input event types decoupled from the Wayland backend.

/// Generic key representation.
///
/// The backend maps native keysyms to these values for unified handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Escape key (exit)
    Escape,
    /// Tab key (cycle shape mode)
    Tab,
    /// Unmapped or unrecognized key
    Unknown,
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (the drawing button)
    Left,
    /// Right mouse button (currently unused)
    Right,
    /// Middle mouse button (currently unused)
    Middle,
}
