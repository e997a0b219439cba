use clap::Parser;

mod backend;
mod config;
mod draw;
mod input;
mod util;

#[derive(Parser, Debug)]
#[command(name = "scrawl")]
#[command(version, about = "Freehand sketch surface for Wayland compositors")]
struct Cli {
    /// Initial shape mode (path or rect)
    #[arg(long, short = 's', value_name = "MODE")]
    shape: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Reject an unknown shape mode before touching the compositor.
    if let Some(mode) = cli.shape.as_deref() {
        if let Err(err) = mode.parse::<input::ShapeMode>() {
            log::error!("{err}");
            return Err(anyhow::anyhow!("invalid --shape value '{mode}'"));
        }
    }

    // Check for Wayland environment
    if std::env::var("WAYLAND_DISPLAY").is_err() {
        log::error!("WAYLAND_DISPLAY not set - this application requires Wayland.");
        log::error!("Please run on a Wayland compositor (Hyprland, Sway, etc.).");
        return Err(anyhow::anyhow!("Wayland environment required"));
    }

    log::info!("Starting sketch surface...");
    log::info!("Controls:");
    log::info!("  - Draw: drag with the left mouse button");
    log::info!("  - Shape mode: P (path), R (rect), Tab cycles");
    log::info!("  - Exit: Escape");

    backend::run_wayland(cli.shape)?;

    log::info!("Sketch surface closed.");
    Ok(())
}
