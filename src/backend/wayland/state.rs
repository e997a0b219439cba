// Holds the live Wayland protocol state shared by the backend loop and the
// handler submodules, plus the render pass that repaints the surface.
use anyhow::{Context, Result};
use log::debug;
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    registry::RegistryState,
    seat::SeatState,
    shell::{WaylandSurface, wlr_layer::LayerShell},
    shm::Shm,
};
use wayland_client::{QueueHandle, protocol::wl_shm};

use crate::config::Config;
use crate::draw::{CanvasStyle, render_canvas};
use crate::input::InputState;

use super::surface::SurfaceState;

/// Internal Wayland state shared across modules.
pub(super) struct WaylandState {
    // Wayland protocol objects
    pub(super) registry_state: RegistryState,
    pub(super) compositor_state: CompositorState,
    pub(super) layer_shell: LayerShell,
    pub(super) shm: Shm,
    pub(super) output_state: OutputState,
    pub(super) seat_state: SeatState,

    // Surface and buffer management
    pub(super) surface: SurfaceState,

    // Configuration and resolved render style
    pub(super) config: Config,
    pub(super) style: CanvasStyle,

    // Interaction state
    pub(super) input_state: InputState,
}

impl WaylandState {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        registry_state: RegistryState,
        compositor_state: CompositorState,
        layer_shell: LayerShell,
        shm: Shm,
        output_state: OutputState,
        seat_state: SeatState,
        config: Config,
        style: CanvasStyle,
        input_state: InputState,
    ) -> Self {
        Self {
            registry_state,
            compositor_state,
            layer_shell,
            shm,
            output_state,
            seat_state,
            surface: SurfaceState::new(),
            config,
            style,
            input_state,
        }
    }

    /// Repaints the whole surface into a fresh buffer and commits it.
    ///
    /// Each pass draws the backdrop, the inset panel, every committed
    /// stroke, and the active stroke last, then damages the full surface.
    pub(super) fn render(&mut self, qh: &QueueHandle<Self>) -> Result<()> {
        debug!("=== RENDER START ===");
        let buffer_count = self.config.performance.buffer_count as usize;
        let width = self.surface.width();
        let height = self.surface.height();

        // Get a buffer from the pool
        let (buffer, canvas) = {
            let pool = self.surface.ensure_pool(&self.shm, buffer_count)?;
            debug!("Requesting buffer from pool");
            pool.create_buffer(
                width as i32,
                height as i32,
                (width * 4) as i32,
                wl_shm::Format::Argb8888,
            )
            .context("Failed to create buffer")?
        };

        // SAFETY: `canvas` is a mutable slice from SlotPool holding exactly
        // width * height * 4 bytes; the ARgb32 format and the stride of
        // width * 4 match that allocation. The Cairo surface and context are
        // dropped before the buffer is attached and committed, so Cairo
        // never touches the memory after it is handed to the compositor,
        // and no other reference to the slice exists while Cairo draws.
        let cairo_surface = unsafe {
            cairo::ImageSurface::create_for_data_unsafe(
                canvas.as_mut_ptr(),
                cairo::Format::ARgb32,
                width as i32,
                height as i32,
                (width * 4) as i32,
            )
            .context("Failed to create Cairo surface")?
        };

        let ctx = cairo::Context::new(&cairo_surface).context("Failed to create Cairo context")?;

        debug!(
            "Rendering {} committed strokes (+ active: {})",
            self.input_state.frame.len(),
            self.input_state.is_drawing()
        );
        render_canvas(
            &ctx,
            width,
            height,
            &self.style,
            &self.input_state.frame,
            self.input_state.active_points(),
        );

        debug!("Flushing Cairo surface");
        cairo_surface.flush();
        drop(ctx);
        drop(cairo_surface);

        // Attach buffer and commit
        debug!("Attaching buffer and committing surface");
        let wl_surface = self
            .surface
            .layer_surface()
            .context("Layer surface not created")?
            .wl_surface();
        wl_surface.attach(Some(buffer.wl_buffer()), 0, 0);

        // Full-frame repaint, full-frame damage.
        wl_surface.damage_buffer(0, 0, width as i32, height as i32);

        if self.config.performance.enable_vsync {
            debug!("Requesting frame callback (vsync enabled)");
            wl_surface.frame(qh, wl_surface.clone());
        } else {
            debug!("Skipping frame callback (vsync disabled - allows back-to-back renders)");
        }

        wl_surface.commit();
        debug!("=== RENDER COMPLETE ===");

        Ok(())
    }
}
