//! Tracing subscriber setup
//!
//! Events go to stderr so stdout only ever carries command output.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, Settings};
use crate::error::SealError;

/// Pick the log filter: `RUST_LOG` wins, then `-v` count, then settings
pub fn filter_directive(settings: &Settings, verbosity: u8) -> String {
    if let Ok(env) = std::env::var(EnvFilter::DEFAULT_ENV) {
        if !env.trim().is_empty() {
            return env;
        }
    }

    match verbosity {
        0 => settings.log_level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber
pub fn init_logging(settings: &Settings, verbosity: u8) -> Result<(), SealError> {
    let directive = filter_directive(settings, verbosity);
    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| SealError::Config(format!("Invalid log filter '{}': {}", directive, e)))?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = match settings.log_format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| SealError::Config(format!("Failed to initialise logging: {}", e)))
}
