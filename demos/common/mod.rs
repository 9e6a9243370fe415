//! Logging setup shared by the demo programs.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Logging flags that can be flattened into a demo's arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct TracingArgs {
    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Only log warnings and errors
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log output format
    #[arg(long = "log-format", value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,
}

/// How log lines are written.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

impl TracingArgs {
    /// The filter to use. `RUST_LOG` wins over the flags when it's set.
    fn filter(&self) -> EnvFilter {
        if std::env::var("RUST_LOG").is_ok() {
            return EnvFilter::from_default_env();
        }
        let level = match (self.quiet, self.verbosity) {
            (true, _) => "warn",
            (false, 0) => "info",
            (false, 1) => "debug",
            (false, _) => "trace",
        };
        EnvFilter::new(format!("warn,holdem_odds={level},simulate={level}"))
    }

    /// Install the global subscriber.
    ///
    /// # Panics
    ///
    /// Panics if a subscriber is already installed.
    pub fn init_tracing(&self) {
        let registry = tracing_subscriber::registry().with(self.filter());
        match self.log_format {
            LogFormat::Compact => registry.with(fmt::layer().compact()).init(),
            LogFormat::Pretty => registry.with(fmt::layer().pretty()).init(),
            LogFormat::Json => registry.with(fmt::layer().json()).init(),
        }
    }
}
