//! Structured logging setup.
//!
//! Progress meant for the person running the tool goes through the
//! `ProgressReporter` port. This module wires up the `tracing` side, which
//! carries per-module and per-configuration detail for debugging an
//! extraction. Output always goes to stderr so stdout stays reserved for the
//! model itself.

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Logging configuration resolved from CLI flags and the config file.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum level for this crate's targets
    pub level: Level,
    /// Include file and line number information
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }
}

/// Parses a log level, returning `None` for unknown names.
pub fn parse_level(level_str: &str) -> Option<Level> {
    match level_str.trim().to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// Installs the global subscriber. Later calls are ignored.
///
/// `RUST_LOG` directives are honoured; the configured level is added as the
/// directive for this crate's own targets.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = format!("build_model={}", config.level).parse() {
            filter = filter.add_directive(directive);
        }

        // try_init: a test harness may already have installed a subscriber
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(config.include_location)
                    .with_line_number(config.include_location),
            )
            .try_init();
    });
}
