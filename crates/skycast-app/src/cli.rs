//! Command line surface for the `skycast` binary.

use clap::{Parser, ValueEnum};

use skycast_core::Units;

#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "City weather dashboard for the terminal")]
pub struct Cli {
    /// City to look up (defaults to the configured city)
    pub city: Option<String>,

    /// Number of forecast days to show
    #[arg(short, long)]
    pub days: Option<u32>,

    /// Measurement units
    #[arg(short, long, value_enum)]
    pub units: Option<UnitsArg>,

    /// Store this OpenWeatherMap API key and exit
    #[arg(long, value_name = "KEY")]
    pub set_key: Option<String>,

    /// Remove the stored API key and exit
    #[arg(long, conflicts_with = "set_key")]
    pub forget_key: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnitsArg {
    Metric,
    Imperial,
}

impl From<UnitsArg> for Units {
    fn from(arg: UnitsArg) -> Self {
        match arg {
            UnitsArg::Metric => Units::Metric,
            UnitsArg::Imperial => Units::Imperial,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_asserts() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_city_and_days() {
        let cli = Cli::parse_from(["skycast", "Nashik", "--days", "3"]);
        assert_eq!(cli.city.as_deref(), Some("Nashik"));
        assert_eq!(cli.days, Some(3));
        assert!(cli.units.is_none());
    }

    #[test]
    fn test_parse_units() {
        let cli = Cli::parse_from(["skycast", "-u", "imperial"]);
        assert_eq!(cli.units, Some(UnitsArg::Imperial));
        assert_eq!(Units::from(UnitsArg::Imperial), Units::Imperial);
    }

    #[test]
    fn test_set_and_forget_key_conflict() {
        let result = Cli::try_parse_from(["skycast", "--set-key", "abc", "--forget-key"]);
        assert!(result.is_err());
    }
}
