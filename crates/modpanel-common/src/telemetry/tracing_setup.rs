//! Subscriber setup for the API process
//!
//! `RUST_LOG` wins when set; otherwise the preset's level applies, with the
//! sqlx statement logger held at warn.

use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::Environment;

/// Line format written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable, for terminals
    Pretty,
    /// One JSON object per event, for log shippers
    Json,
}

/// Subscriber options
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Level used when `RUST_LOG` is not set
    pub level: Level,
    pub format: LogFormat,
    /// Emit an event when each span opens and closes
    pub span_lifecycle: bool,
    /// Source file and line on every event
    pub source_location: bool,
}

impl TracingConfig {
    /// Verbose pretty output with span lifecycle events
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: Level::DEBUG,
            format: LogFormat::Pretty,
            span_lifecycle: true,
            source_location: true,
        }
    }

    /// Info-level JSON lines
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: Level::INFO,
            format: LogFormat::Json,
            span_lifecycle: false,
            source_location: false,
        }
    }

    #[must_use]
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self::development(),
            Environment::Staging => Self {
                format: LogFormat::Pretty,
                ..Self::production()
            },
            Environment::Production => Self::production(),
        }
    }

    fn fallback_filter(&self) -> String {
        format!("{},sqlx=warn,tower_http=info", self.level)
    }
}

/// Install the global subscriber
///
/// Fails if one is already installed, so it is safe to call from tests.
pub fn try_init_tracing_with_config(config: TracingConfig) -> Result<(), TracingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.fallback_filter()));

    let span_events = if config.span_lifecycle {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };
    let layer = fmt::layer()
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .with_span_events(span_events);

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match config.format {
        LogFormat::Pretty => registry.with(layer).try_init(),
        LogFormat::Json => registry.with(layer.json()).try_init(),
    };

    installed.map_err(|_| TracingError::AlreadyInitialized)
}

#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
}
