// src/main.rs

// Declare modules
pub mod app;
pub mod cli;
pub mod color;
pub mod config;
pub mod display;
pub mod frame_loop;
pub mod renderer;
pub mod surface;
pub mod wave;

use crate::{
    app::Screensaver,
    cli::WaveCount,
    config::Config,
    display::{drivers::HeadlessDisplayDriver, DisplayDriver, DisplayManager, DriverConfig},
    frame_loop::FrameLoop,
};

// Logging
use anyhow::Context;
use log::info;

/// Main entry point for the `wavesaver` application.
fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    // --- Command line ---
    // Argument errors go to stdout and exit with status 1 before any setup.
    let args = cli::parse_from(std::env::args_os()).unwrap_or_else(|err| exit_with(err));
    let count = args.wave_count().unwrap_or_else(|err| exit_with(err));
    match count {
        WaveCount::Default => {
            println!(
                "Using the default value of {} waves",
                cli::DEFAULT_WAVE_COUNT
            );
            println!("Waves to render: {}", count.cap());
        }
        WaveCount::Explicit(n) => println!("Waves to render: {}", n),
    }

    // --- Configuration ---
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    args.apply_to(&mut config, count);
    config.validate().context("Invalid configuration")?;
    info!("Configuration: {:?}", config);

    // --- Display ---
    let driver = create_driver(&args)?;
    let display = DisplayManager::new(
        driver,
        DriverConfig {
            width_px: config.window.width,
            height_px: config.window.height,
            title: config.window.title.clone(),
        },
    )
    .context("Failed to initialize the display")?;

    // --- Frame loop ---
    let frame_loop =
        FrameLoop::from_config(&config, args.seed).context("Failed to build the frame loop")?;

    let mut screensaver = Screensaver::new(&config, frame_loop, display);
    let frames = screensaver.run()?;
    info!("wavesaver exited successfully after {} frames.", frames);

    Ok(())
}

fn exit_with(err: cli::CliError) -> ! {
    println!("{}", err);
    std::process::exit(err.exit_code());
}

#[cfg(feature = "sdl")]
fn create_driver(args: &cli::Args) -> anyhow::Result<Box<dyn DisplayDriver>> {
    if args.wants_headless() {
        info!("Using the headless display driver");
        return Ok(Box::new(HeadlessDisplayDriver::new(args.frames)));
    }
    info!("Using the SDL2 display driver");
    let driver = display::drivers::SdlDisplayDriver::new().context("Failed to initialize SDL")?;
    Ok(Box::new(driver))
}

/// Without SDL there is no window to close, so a run has to be asked for
/// explicitly with `--headless` or `--frames`.
#[cfg(not(feature = "sdl"))]
fn create_driver(args: &cli::Args) -> anyhow::Result<Box<dyn DisplayDriver>> {
    if !args.wants_headless() {
        anyhow::bail!(
            "wavesaver was built without the `sdl` feature and cannot open a window; \
             pass --headless or --frames N, or rebuild with `--features sdl`"
        );
    }
    info!("Using the headless display driver");
    Ok(Box::new(HeadlessDisplayDriver::new(args.frames)))
}
