// Coordinates backend startup and drives the event loop while delegating
// rendering and protocol state to `WaylandState` and its handler modules.
use anyhow::{Context, Result};
use log::{debug, info, warn};
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    registry::RegistryState,
    seat::SeatState,
    shell::{
        WaylandSurface,
        wlr_layer::{Anchor, KeyboardInteractivity, Layer, LayerShell},
    },
    shm::Shm,
};
use wayland_client::{Connection, globals::registry_queue_init};

use super::state::WaylandState;
use crate::config::Config;
use crate::draw::CanvasStyle;
use crate::input::{InputState, ShapeMode};

/// Wayland backend entry point.
pub struct WaylandBackend {
    initial_shape: Option<String>,
}

impl WaylandBackend {
    pub fn new(initial_shape: Option<String>) -> Self {
        Self { initial_shape }
    }

    pub fn run(&mut self) -> Result<()> {
        info!("Starting Wayland backend");

        // Connect to Wayland compositor
        let conn =
            Connection::connect_to_env().context("Failed to connect to Wayland compositor")?;
        debug!("Connected to Wayland display");

        // Initialize registry and event queue
        let (globals, mut event_queue) =
            registry_queue_init(&conn).context("Failed to initialize Wayland registry")?;
        let qh = event_queue.handle();

        // Bind global interfaces
        let compositor_state =
            CompositorState::bind(&globals, &qh).context("wl_compositor not available")?;
        debug!("Bound compositor");

        let layer_shell =
            LayerShell::bind(&globals, &qh).context("zwlr_layer_shell_v1 not available")?;
        debug!("Bound layer shell");

        let shm = Shm::bind(&globals, &qh).context("wl_shm not available")?;
        debug!("Bound shared memory");

        let output_state = OutputState::new(&globals, &qh);
        let seat_state = SeatState::new(&globals, &qh);
        let registry_state = RegistryState::new(&globals);

        // Load configuration
        let config = Config::load().unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Config::default()
        });
        info!("Configuration loaded");
        debug!("  Stroke color: {:?}", config.drawing.stroke_color);
        debug!("  Stroke width: {:.1}px", config.drawing.stroke_width);
        debug!("  Buffer count: {}", config.performance.buffer_count);
        debug!("  VSync: {}", config.performance.enable_vsync);

        let style = CanvasStyle::from_config(&config);

        // Resolve the starting shape mode: CLI flag wins over config.
        let shape_str = self
            .initial_shape
            .clone()
            .unwrap_or_else(|| config.drawing.initial_shape.clone());
        let shape_mode = match shape_str.parse::<ShapeMode>() {
            Ok(mode) => mode,
            Err(err) => {
                warn!("{err}; starting in path mode");
                ShapeMode::Path
            }
        };
        info!("Starting in {} mode", shape_mode.label());

        let input_state = InputState::with_shape_mode(shape_mode);

        // Create application state
        let mut state = WaylandState::new(
            registry_state,
            compositor_state,
            layer_shell,
            shm,
            output_state,
            seat_state,
            config,
            style,
            input_state,
        );

        // Create layer shell surface
        info!("Creating layer shell surface");
        let wl_surface = state.compositor_state.create_surface(&qh);
        let layer_surface = state.layer_shell.create_layer_surface(
            &qh,
            wl_surface,
            Layer::Overlay,
            Some("scrawl"),
            None, // Default output
        );

        // Configure the layer surface to cover the output
        layer_surface.set_anchor(Anchor::all());
        layer_surface.set_keyboard_interactivity(KeyboardInteractivity::Exclusive);
        layer_surface.set_size(0, 0); // Use full screen size
        layer_surface.set_exclusive_zone(-1);

        // Commit the surface
        layer_surface.commit();

        state.surface.set_layer_surface(layer_surface);
        info!("Layer shell surface created");

        // Track consecutive render failures for error recovery
        let mut consecutive_render_failures = 0u32;
        const MAX_RENDER_FAILURES: u32 = 10;

        // Main event loop
        let mut loop_error: Option<anyhow::Error> = None;
        loop {
            // Check if we should exit before blocking
            if state.input_state.should_exit {
                info!("Exit requested, breaking event loop");
                break;
            }

            // Dispatch all pending events (blocking) but check should_exit
            // after each batch
            match event_queue.blocking_dispatch(&mut state) {
                Ok(_) => {
                    if state.input_state.should_exit {
                        info!("Exit requested after dispatch, breaking event loop");
                        break;
                    }
                }
                Err(e) => {
                    warn!("Event queue error: {}", e);
                    loop_error = Some(anyhow::anyhow!("Wayland event queue error: {}", e));
                    break;
                }
            }

            // Render if configured and needs redraw, but only if no frame
            // callback is pending (throttles to refresh rate when vsync is on)
            let can_render = state.surface.is_configured()
                && state.input_state.needs_redraw
                && (!state.surface.frame_callback_pending()
                    || !state.config.performance.enable_vsync);

            if can_render {
                debug!(
                    "Main loop: needs_redraw=true, frame_callback_pending={}, triggering render",
                    state.surface.frame_callback_pending()
                );
                match state.render(&qh) {
                    Ok(()) => {
                        consecutive_render_failures = 0;
                        state.input_state.needs_redraw = false;
                        if state.config.performance.enable_vsync {
                            state.surface.set_frame_callback_pending(true);
                        }
                    }
                    Err(e) => {
                        consecutive_render_failures += 1;
                        warn!(
                            "Rendering error (attempt {}/{}): {}",
                            consecutive_render_failures, MAX_RENDER_FAILURES, e
                        );

                        if consecutive_render_failures >= MAX_RENDER_FAILURES {
                            return Err(anyhow::anyhow!(
                                "Too many consecutive render failures ({}), exiting: {}",
                                consecutive_render_failures,
                                e
                            ));
                        }

                        // Clear redraw flag to avoid an infinite error loop
                        state.input_state.needs_redraw = false;
                    }
                }
            } else if state.input_state.needs_redraw && state.surface.frame_callback_pending() {
                debug!("Main loop: Skipping render - frame callback already pending");
            }
        }

        info!("Wayland backend exiting");

        match loop_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
