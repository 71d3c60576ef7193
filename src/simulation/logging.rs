//! Logging and tracing configuration
//!
//! Centralized tracing setup for the simulator binary. Console output goes to
//! stderr so exported results on stdout stay machine-readable.

use std::io;
use tracing::Level;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for the application
    pub level: Level,
    /// Whether to emit JSON-formatted events
    pub json_format: bool,
    /// Whether to also log to a daily-rolled file
    pub log_to_file: bool,
    /// Log file directory, when file logging is enabled
    pub log_directory: Option<String>,
    /// Log file prefix, when file logging is enabled
    pub log_file_prefix: String,
    /// Whether to emit span open/close events
    pub enable_span_events: bool,
    /// Whether to use ANSI colors on the console
    pub enable_ansi: bool,
    /// Custom environment filter overriding the level
    pub env_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json_format: false,
            log_to_file: false,
            log_directory: None,
            log_file_prefix: "hotel-sim".to_string(),
            enable_span_events: false,
            enable_ansi: true,
            env_filter: None,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Enable JSON formatting
    pub fn with_json_format(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Enable daily-rolled file logging into the given directory
    pub fn with_file_logging(mut self, directory: impl Into<String>) -> Self {
        self.log_to_file = true;
        self.log_directory = Some(directory.into());
        self
    }

    /// Enable span open/close events
    pub fn with_span_events(mut self) -> Self {
        self.enable_span_events = true;
        self
    }

    /// Disable ANSI colors
    pub fn without_ansi(mut self) -> Self {
        self.enable_ansi = false;
        self
    }

    /// Set a custom environment filter
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    fn span_events(&self) -> FmtSpan {
        if self.enable_span_events {
            FmtSpan::FULL
        } else {
            FmtSpan::NONE
        }
    }

    /// Initialize the global tracing subscriber
    pub fn init(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let env_filter = if let Some(filter) = &self.env_filter {
            EnvFilter::try_new(filter)?
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new(format!(
                    "{}={}",
                    env!("CARGO_PKG_NAME").replace('-', "_"),
                    self.level
                ))
            })
        };

        let registry = Registry::default().with(env_filter);

        if self.log_to_file {
            let log_dir = self.log_directory.as_deref().unwrap_or("logs");
            let file_appender = rolling::daily(log_dir, &self.log_file_prefix);
            let (file_writer, guard) = non_blocking(file_appender);
            let file_layer =
                fmt::layer().json().with_writer(file_writer).with_span_events(self.span_events());

            if self.json_format {
                let console_layer =
                    fmt::layer().json().with_writer(io::stderr).with_span_events(self.span_events());
                registry.with(file_layer).with(console_layer).init();
            } else {
                let console_layer = fmt::layer()
                    .pretty()
                    .with_writer(io::stderr)
                    .with_ansi(self.enable_ansi)
                    .with_span_events(self.span_events());
                registry.with(file_layer).with(console_layer).init();
            }

            // The writer guard must outlive the program for the file layer to flush
            std::mem::forget(guard);
        } else if self.json_format {
            let layer =
                fmt::layer().json().with_writer(io::stderr).with_span_events(self.span_events());
            registry.with(layer).init();
        } else {
            let layer = fmt::layer()
                .pretty()
                .with_writer(io::stderr)
                .with_ansi(self.enable_ansi)
                .with_span_events(self.span_events());
            registry.with(layer).init();
        }

        Ok(())
    }

    /// Initialize verbose logging (INFO level with span events)
    pub fn init_verbose() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Self::new().with_level(Level::INFO).with_span_events().init()
    }

    /// Initialize debug logging (DEBUG level with span events)
    pub fn init_debug() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Self::new().with_level(Level::DEBUG).with_span_events().init()
    }

    /// Initialize quiet logging (WARN level, no colors)
    pub fn init_quiet() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Self::new().with_level(Level::WARN).without_ansi().init()
    }
}
