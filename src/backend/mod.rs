use anyhow::Result;

pub mod wayland;

/// Run the Wayland backend with the full event loop.
///
/// # Arguments
/// * `initial_shape` - Optional shape mode to start in (overrides config)
pub fn run_wayland(initial_shape: Option<String>) -> Result<()> {
    let mut backend = wayland::WaylandBackend::new(initial_shape);
    backend.run()
}
