//! Wayland backend using wlr-layer-shell for the sketch surface.

mod backend;
mod handlers;
mod state;
mod surface;

pub use backend::WaylandBackend;
