//! All the CLI arguments for the particle field viewer.

use std::path::PathBuf;

#[derive(clap::Parser, Debug, Clone)]
#[command(version, about = "Pointer-reactive particle field")]
pub struct CliArgs {
    /// TOML file overriding the default tuning.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for reproducible particle spawns. Random when omitted.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser as _;

    #[test]
    fn parses_config_and_seed() {
        let args = CliArgs::parse_from(["particle_field", "--config", "field.toml", "-s", "7"]);
        assert_eq!(args.config, Some(PathBuf::from("field.toml")));
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn everything_is_optional() {
        let args = CliArgs::parse_from(["particle_field"]);
        assert!(args.config.is_none());
        assert!(args.seed.is_none());
    }
}
