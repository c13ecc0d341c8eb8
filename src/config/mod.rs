pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "xyz-bank")]
#[command(about = "Menu-driven customer and loan register")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Start with an empty register")]
    pub no_seed: bool,

    #[arg(long, help = "Print every customer's details and exit")]
    pub report: bool,

    #[arg(long, help = "Print a JSON snapshot of the register and exit")]
    pub snapshot: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn load_bank_config(&self) -> crate::Result<toml_config::BankConfig> {
        let mut config = match &self.config {
            Some(path) => toml_config::BankConfig::from_file(path)?,
            None => toml_config::BankConfig::default(),
        };
        if self.no_seed {
            config.seed.builtin = false;
            config.seed.customers.clear();
        }
        Ok(config)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::parse_from(["xyz-bank", "--no-seed", "--snapshot", "-v"]);
        assert!(cli.no_seed);
        assert!(cli.snapshot);
        assert!(cli.verbose);
        assert!(!cli.report);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_no_seed_clears_fixtures() {
        let cli = CliConfig::parse_from(["xyz-bank", "--no-seed"]);
        let config = cli.load_bank_config().unwrap();
        assert!(config.fixtures().is_empty());

        let cli = CliConfig::parse_from(["xyz-bank"]);
        assert_eq!(cli.load_bank_config().unwrap().fixtures().len(), 2);
    }
}
