//! Application entry point for the particle field viewer.
//!
//! This binary sets up logging, reads the CLI and config file, then hands
//! the window over to [`Viewer`] from the `viewer` module.

mod cli_args;
mod settings;
mod viewer;

use clap::Parser as _;
use color_eyre::eyre::{Result, WrapErr as _};
use viewer::Viewer;

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if the config can't be loaded or eframe fails to create the
///   native window or event loop.
fn main() -> Result<()> {
    color_eyre::install()?;
    setup_logging();

    let args = cli_args::CliArgs::parse();
    let cfg = settings::load(args.config.as_deref())?;
    let seed = args.seed;

    eframe::run_native(
        "Particle Field",
        eframe::NativeOptions::default(),
        Box::new(move |_cc| Ok(Box::new(Viewer::new(cfg, seed)))),
    )
    .map_err(|e| color_eyre::eyre::eyre!("{e}"))
    .wrap_err("Viewer failed")?;

    tracing::debug!("Viewer closed");
    Ok(())
}

/// Logs go to stderr, filtered by `RUST_LOG`.
fn setup_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
