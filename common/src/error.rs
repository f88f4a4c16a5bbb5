//! Configuration error types.
//!
//! Only configuration parsing and validation can fail. Everything that runs
//! once the dashboard is up (drawing, timers, host fullscreen calls) is
//! infallible or silently ignored.

use thiserror::Error;

/// Errors raised while building a [`DashboardConfig`](crate::dashboard::DashboardConfig).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown layout '{0}', expected A or B")]
    UnknownLayout(String),

    #[error("schedule must list exactly 7 layouts starting with Sunday, got {0}")]
    ScheduleLength(usize),

    #[error("unknown rescale policy '{0}', expected faithful or consistent")]
    UnknownRescalePolicy(String),

    #[error("{0} period must be greater than zero")]
    ZeroPeriod(&'static str),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::UnknownLayout("C".to_string());
        assert!(err.to_string().contains("'C'"));

        let err = ConfigError::ScheduleLength(5);
        assert!(err.to_string().contains("got 5"));

        let err = ConfigError::UnknownRescalePolicy("round".to_string());
        assert!(err.to_string().contains("faithful or consistent"));

        let err = ConfigError::ZeroPeriod("simulation");
        assert_eq!(err.to_string(), "simulation period must be greater than zero");
    }
}
