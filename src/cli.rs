//! Command-line options.

use std::time::Duration;

use clap::Parser;
use headcount_common::DashboardConfig;
use headcount_common::layout::{LayoutId, Schedule};
use headcount_common::simulation::RescalePolicy;

/// Gate headcount dashboard, rendered in a desktop window.
#[derive(Parser, Debug, Clone)]
#[command(name = "headcount-dashboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Window pixel scale
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=6))]
    pub scale: u32,

    /// Seed for the simulated gate traffic (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Weekly layout schedule, seven A/B letters starting Sunday
    #[arg(long, value_name = "DAYS", default_value = "AABABAB")]
    pub schedule: Schedule,

    /// Start in Manual mode with this layout
    #[arg(short = 'm', long, value_name = "LAYOUT")]
    pub manual: Option<LayoutId>,

    /// Total rescale behavior after capping categories (faithful or consistent)
    #[arg(long, default_value = "faithful")]
    pub rescale: RescalePolicy,

    /// Seconds between simulated traffic updates
    #[arg(long, value_name = "SECS", default_value_t = 7)]
    pub simulation_secs: u64,

    /// Disable the in-window fullscreen presentation
    #[arg(long)]
    pub no_fullscreen: bool,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    pub debug: u8,
}

impl Cli {
    /// Log filter for the `-d` level. `RUST_LOG` still takes precedence.
    pub const fn log_level(&self) -> &'static str {
        match self.debug {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Dashboard settings derived from the options.
    pub fn dashboard_config(&self) -> DashboardConfig {
        DashboardConfig {
            schedule: self.schedule,
            manual_layout: self.manual,
            rescale: self.rescale,
            simulation_period: Duration::from_secs(self.simulation_secs),
            ..DashboardConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() { Cli::command().debug_assert(); }

    #[test]
    fn test_defaults_match_dashboard_defaults() {
        let cli = Cli::parse_from(["headcount-dashboard"]);
        assert_eq!(cli.dashboard_config(), DashboardConfig::default());
        assert_eq!(cli.log_level(), "warn");
        assert_eq!(cli.scale, 2);
    }

    #[test]
    fn test_parses_domain_values() {
        let cli = Cli::parse_from([
            "headcount-dashboard",
            "--schedule",
            "bbbbbbb",
            "-m",
            "b",
            "--rescale",
            "consistent",
            "--simulation-secs",
            "3",
            "-d",
            "2",
        ]);
        let config = cli.dashboard_config();
        assert_eq!(config.schedule, Schedule::new([LayoutId::B; 7]));
        assert_eq!(config.manual_layout, Some(LayoutId::B));
        assert_eq!(config.rescale, RescalePolicy::Consistent);
        assert_eq!(config.simulation_period, Duration::from_secs(3));
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn test_rejects_bad_schedule() {
        assert!(Cli::try_parse_from(["headcount-dashboard", "--schedule", "ABC"]).is_err());
    }

    #[test]
    fn test_zero_period_fails_validation() {
        let cli = Cli::parse_from(["headcount-dashboard", "--simulation-secs", "0"]);
        assert!(cli.dashboard_config().validate().is_err());
    }
}
