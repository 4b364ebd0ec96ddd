//! # Logger
//!
//! A centralized logging utility for the registration workspace.
//! It configures a single console layer with environment-based filtering.
//!
//! * On native targets the console layer is a compact, colored stdout formatter.
//! * On `wasm32` with the `web` feature the console layer is routed into the
//!   browser devtools console through [`web_sys::console`], one call per event,
//!   with the level mapped to the matching console method. Timestamps are
//!   disabled there because the system clock is not available.
//! * Use [`LoggerBuilder::env_filter`] to set module-directed filters
//!   (e.g., `"wreg_registration=debug"`), in addition to `RUST_LOG`.
//!
//! ## Example
//!
//! ```rust
//! # use wreg_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("registration")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod browser;
mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use private::Sealed;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[derive(Debug)]
pub struct LoggerConfig {
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { console: true, level: LevelFilter::INFO, env_filter: None }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}

/// A builder for configuring and initializing the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName> {
    config: LoggerConfig,
    name: N,
}

impl LoggerBuilder<NoName> {
    /// Sets the name of the logger.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName> {
        LoggerBuilder { name: WithName(name.into()), config: self.config }
    }
}

impl LoggerBuilder<WithName> {
    /// Configures the minimum log level to be emitted.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Adds an explicit env filter (e.g., `wreg_registration=debug`).
    ///
    /// Environment variables still override via `RUST_LOG`; this is a programmatic default.
    /// Invalid filters will cause [`LoggerBuilder::init`] to return an error.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Enables console logging.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Consumes the builder and initializes the global tracing subscriber.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber has already been set.
    /// Returns [`LoggerError::InvalidConfiguration`] for invalid builder settings.
    pub fn init(self) -> Result<Logger, LoggerError> {
        validate_config(&self.name.0)?;

        let env_filter = build_env_filter(&self.config)?;

        let mut layers = Vec::new();

        if self.config.console {
            layers.push(console_layer());
        }

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry()
            .with(env_filter)
            .with(layers)
            .try_init()
            .context(format!("Installing subscriber for '{}'", self.name.0))?;

        tracing::debug!(logger = %self.name.0, "Logging initialized");

        Ok(Logger { name: self.name.0 })
    }
}

/// A handle to the initialized logging system.
#[must_use = "Dropping this handle marks the end of the logging session."]
#[derive(Debug)]
pub struct Logger {
    name: String,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`] to configure the global tracing subscriber.
    ///
    /// The `name` identifies the session in the first log line and in error contexts.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wreg_logger::{LevelFilter, Logger};
    ///
    /// let _logger = Logger::builder()
    ///     .name("registration")
    ///     .level(LevelFilter::DEBUG)
    ///     .init()
    ///     .unwrap();
    /// ```
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName }
    }

    /// Name the subscriber was installed under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
fn console_layer<S>() -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    layer().compact().with_ansi(true).boxed()
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
fn console_layer<S>() -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    layer()
        .compact()
        .with_ansi(false)
        .without_time()
        .with_level(false)
        .with_writer(browser::BrowserConsole)
        .boxed()
}

fn validate_config(name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    Ok(())
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    config.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_logger_builder_initial_state() {
        let logger_builder = Logger::builder().name("test-app").env_filter("wreg=debug");
        assert!(logger_builder.config.console);
        assert_eq!(logger_builder.config.level, LevelFilter::INFO);
        assert_eq!(logger_builder.config.env_filter.as_deref(), Some("wreg=debug"));
    }

    #[test]
    #[serial]
    fn test_logger_builder_configuration() {
        let logger_builder = Logger::builder()
            .name("test-app")
            .console(false)
            .env_filter("wreg=info")
            .level(LevelFilter::DEBUG);

        assert!(!logger_builder.config.console);
        assert_eq!(logger_builder.config.level, LevelFilter::DEBUG);
        assert_eq!(logger_builder.config.env_filter.as_deref(), Some("wreg=info"));
    }

    #[test]
    #[serial]
    fn test_blank_name_is_rejected() {
        let err = Logger::builder().name("   ").init().expect_err("blank name must fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn test_invalid_env_filter_is_rejected() {
        let err = Logger::builder()
            .name("test-app")
            .env_filter("wreg=loudest")
            .init()
            .expect_err("malformed filter must fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn test_no_layers_is_rejected() {
        let err = Logger::builder()
            .name("test-app")
            .console(false)
            .init()
            .expect_err("no layers must fail");
        assert!(err.to_string().contains("No logging layers enabled"));
    }
}
