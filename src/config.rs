use anyhow::{Context, Result};
use argh::FromArgs;
use chrono::{Local, NaiveDateTime};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const DEFAULT_DELAY_MS: u64 = 1000;
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(FromArgs, Debug)]
/// Walk a catalog of language-feature examples and print their output.
pub struct Cli {
    #[argh(switch)]
    /// print example names instead of running them.
    pub list: bool,

    #[argh(option)]
    /// only keep examples whose name matches this regular expression.
    pub only: Option<String>,

    #[argh(option, default = "DEFAULT_DELAY_MS")]
    /// nominal delay of the async example, in milliseconds.
    pub delay_ms: u64,

    #[argh(option)]
    /// fixed timestamp (YYYY-MM-DDTHH:MM:SS) for the date-time example.
    pub now: Option<NaiveDateTime>,

    #[argh(option, default = "DEFAULT_LOG_FILTER.to_string()")]
    /// tracing filter for diagnostics on stderr, e.g. "debug".
    pub log: String,
}

/// Source of the current time for the date-time example.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    /// Local wall-clock time.
    System,
    /// Always the same instant; keeps the transcript byte-stable.
    Fixed(NaiveDateTime),
}

impl Clock {
    /// Current local time according to this clock.
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Clock::System => Local::now().naive_local(),
            Clock::Fixed(at) => *at,
        }
    }
}

/// Validated run configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Print example names instead of running them.
    pub list: bool,
    /// Regular expression narrowing the catalog by example name.
    pub only: Option<String>,
    /// Nominal delay awaited by the async example.
    pub delay: Duration,
    /// Clock read by the date-time example.
    pub clock: Clock,
    /// Tracing filter directive for stderr diagnostics.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            list: false,
            only: None,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            clock: Clock::System,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    /// Settings that make every example fully deterministic: no delay and a
    /// pinned clock.
    pub fn deterministic(at: NaiveDateTime) -> Self {
        Self {
            delay: Duration::ZERO,
            clock: Clock::Fixed(at),
            ..Self::default()
        }
    }

    /// Build the tracing filter from the configured directive.
    pub fn env_filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_new(&self.log_filter)
            .with_context(|| format!("invalid log filter: {}", self.log_filter))
    }
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Self {
            list: cli.list,
            only: cli.only,
            delay: Duration::from_millis(cli.delay_ms),
            clock: cli.now.map_or(Clock::System, Clock::Fixed),
            log_filter: cli.log,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn parse(args: &[&str]) -> Cli {
        Cli::from_args(&["lang-tour"], args).expect("valid args")
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from(parse(&[]));
        assert!(!settings.list);
        assert_eq!(settings.only, None);
        assert_eq!(settings.delay, Duration::from_millis(1000));
        assert_eq!(settings.clock, Clock::System);
        assert_eq!(settings.log_filter, "warn");
    }

    #[test]
    fn test_all_flags() {
        let settings = Settings::from(parse(&[
            "--list",
            "--only",
            "^null",
            "--delay-ms",
            "0",
            "--now",
            "2024-05-01T09:30:00",
            "--log",
            "debug",
        ]));
        let at = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        assert!(settings.list);
        assert_eq!(settings.only.as_deref(), Some("^null"));
        assert_eq!(settings.delay, Duration::ZERO);
        assert_eq!(settings.clock, Clock::Fixed(at));
        assert_eq!(settings.clock.now(), at);
        assert_eq!(settings.log_filter, "debug");
    }

    #[test]
    fn test_bad_timestamp_rejected() {
        assert!(Cli::from_args(&["lang-tour"], &["--now", "yesterday"]).is_err());
    }

    #[test]
    fn test_env_filter_accepts_directive() {
        let settings = Settings {
            log_filter: "lang_tour=debug".to_string(),
            ..Settings::default()
        };
        assert!(settings.env_filter().is_ok());
    }
}
