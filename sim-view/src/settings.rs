//! Loading the startup tuning from an optional TOML file.

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr as _};
use sim_core::Config;

/// Reads `path` if given, otherwise returns the built-in defaults.
///
/// Every value that doesn't depend on the canvas size is checked here, so a
/// bad file fails before the window opens. The remaining checks run against
/// the real canvas in [`sim_core::Simulation::new`].
pub fn load(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        tracing::debug!("No config file given, using defaults");
        return Ok(Config::default());
    };

    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Couldn't read config file {}", path.display()))?;
    let cfg = parse(&text)
        .wrap_err_with(|| format!("Couldn't parse config file {}", path.display()))?;
    cfg.validate_tuning()
        .wrap_err_with(|| format!("Invalid config file {}", path.display()))?;
    tracing::info!(path = %path.display(), "Loaded config");
    Ok(cfg)
}

pub fn parse(text: &str) -> Result<Config> {
    Ok(toml::from_str(text)?)
}
