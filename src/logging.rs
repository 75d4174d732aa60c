// ABOUTME: Structured logging setup for applications embedding the nutrition engine
// ABOUTME: Builds a tracing-subscriber registry with an env filter and a json, pretty, or compact layer
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Structured logging configuration
//!
//! Engine modules only emit `tracing` events (`debug!` for intermediate
//! values, `warn!` when a safety clamp changes a result). Installing a
//! subscriber is left to the embedding application:
//!
//! ```rust,no_run
//! nutrition_engine::logging::init_from_env()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::{Context, Result};
use nutrition_core::constants::service_names;
use std::env;
use std::io;
use std::str::FromStr;
use tracing::{info, Subscriber};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan, MakeWriter},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Environment variable selecting the output format
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";
/// Environment variable naming the deployment environment
pub const ENV_ENVIRONMENT: &str = "ENVIRONMENT";
/// Environment variable overriding the reported service name
pub const ENV_SERVICE_NAME: &str = "SERVICE_NAME";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Human-readable multi-field output
    #[default]
    Pretty,
    /// Single-line output without targets
    Compact,
}

impl FromStr for LogFormat {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_str_or_default(s))
    }
}

impl LogFormat {
    /// Parse a format name, falling back to `Pretty`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level applied to `nutrition_engine` targets
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Emit source file and line
    pub include_location: bool,
    /// Emit thread ids and names
    pub include_thread: bool,
    /// Emit span open/close events (e.g. around `compute_targets`)
    pub include_spans: bool,
    /// Service name reported at startup
    pub service_name: String,
    /// Deployment environment (development, staging, production)
    pub environment: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: service_names::NUTRITION_ENGINE.into(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Read configuration from the environment
    ///
    /// `production` turns on location, thread, and span output; outside
    /// production each is enabled by the presence of `LOG_INCLUDE_LOCATION`,
    /// `LOG_INCLUDE_THREAD`, or `LOG_INCLUDE_SPANS`.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let environment = env::var(ENV_ENVIRONMENT).unwrap_or(defaults.environment);
        let production = environment == "production";
        let flag = |name: &str| production || env::var_os(name).is_some();

        Self {
            level: env::var("RUST_LOG").unwrap_or(defaults.level),
            format: env::var(ENV_LOG_FORMAT)
                .map(|value| LogFormat::from_str_or_default(&value))
                .unwrap_or_default(),
            include_location: flag("LOG_INCLUDE_LOCATION"),
            include_thread: flag("LOG_INCLUDE_THREAD"),
            include_spans: flag("LOG_INCLUDE_SPANS"),
            service_name: env::var(ENV_SERVICE_NAME).unwrap_or(defaults.service_name),
            environment,
        }
    }

    /// Filter built from `RUST_LOG` (or `level`), pinning the engine's own target to `level`
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level.as_str()));
        match format!("nutrition_engine={}", self.level).parse() {
            Ok(directive) => filter.add_directive(directive),
            Err(_) => filter,
        }
    }

    fn span_events(&self) -> FmtSpan {
        if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// Formatting layer for the configured format, writing to `writer`
    ///
    /// Every format honors the location, thread, and span flags.
    #[must_use]
    pub fn layer<S, W>(&self, writer: W) -> Box<dyn Layer<S> + Send + Sync>
    where
        S: Subscriber + for<'a> LookupSpan<'a> + 'static,
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let base = fmt::layer()
            .with_file(self.include_location)
            .with_line_number(self.include_location)
            .with_thread_ids(self.include_thread)
            .with_thread_names(self.include_thread)
            .with_span_events(self.span_events())
            .with_writer(writer);

        match self.format {
            LogFormat::Json => Box::new(base.json()),
            LogFormat::Pretty => Box::new(base),
            LogFormat::Compact => Box::new(base.compact().with_target(false)),
        }
    }

    /// Install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let installed = tracing_subscriber::registry()
            .with(self.env_filter())
            .with(self.layer(io::stdout))
            .try_init();
        installed.context("tracing subscriber already installed")?;

        info!(
            service.name = %self.service_name,
            service.version = env!("CARGO_PKG_VERSION"),
            environment = %self.environment,
            log.format = ?self.format,
            "Nutrition engine logging initialized"
        );

        Ok(())
    }
}

/// Initialize logging with default configuration
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init_default() -> Result<()> {
    LoggingConfig::default().init()
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn render(config: &LoggingConfig) -> String {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::registry()
            .with(config.layer(move || writer.clone()));

        tracing::subscriber::with_default(subscriber, || {
            let _span = tracing::info_span!("compute_targets").entered();
            info!("allocated");
        });

        let bytes = capture.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str_or_default(" JSON "), LogFormat::Json);
        assert_eq!("compact".parse::<LogFormat>(), Ok(LogFormat::Compact));
        assert_eq!(LogFormat::from_str_or_default("verbose"), LogFormat::Pretty);
    }

    #[test]
    #[serial]
    fn test_production_enables_detail() {
        env::set_var(ENV_ENVIRONMENT, "production");
        let config = LoggingConfig::from_env();
        env::remove_var(ENV_ENVIRONMENT);

        assert!(config.include_location);
        assert!(config.include_thread);
        assert!(config.include_spans);
    }

    #[test]
    #[serial]
    fn test_defaults_without_environment() {
        env::remove_var(ENV_ENVIRONMENT);
        env::remove_var(ENV_SERVICE_NAME);

        let config = LoggingConfig::from_env();

        assert_eq!(config.service_name, service_names::NUTRITION_ENGINE);
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_compact_format_honors_detail_flags() {
        let config = LoggingConfig {
            format: LogFormat::Compact,
            include_location: true,
            include_thread: true,
            include_spans: true,
            ..LoggingConfig::default()
        };

        let output = render(&config);

        assert!(output.contains("logging.rs"), "{output}");
        assert!(output.contains("ThreadId("), "{output}");
        assert!(output.contains("close"), "{output}");
    }

    #[test]
    fn test_compact_format_omits_details_when_disabled() {
        let config = LoggingConfig {
            format: LogFormat::Compact,
            ..LoggingConfig::default()
        };

        let output = render(&config);

        assert!(output.contains("allocated"), "{output}");
        assert!(!output.contains("logging.rs"), "{output}");
        assert!(!output.contains("ThreadId("), "{output}");
    }
}
