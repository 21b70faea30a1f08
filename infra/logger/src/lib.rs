//! # Logger
//!
//! Installs the global `tracing` subscriber for packwise binaries.
//!
//! * A compact ANSI console layer (on by default), on stdout or stderr.
//! * An optional non-blocking rolling file layer, plain text or JSON.
//! * An [`EnvFilter`] seeded from the configured level or directive string.
//!   `RUST_LOG` still wins when no explicit directive is given.
//!
//! ## Example
//!
//! ```rust
//! use packwise_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder()
//!     .name("packwise-doc")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct LoggerSettings {
    name: String,
    console: bool,
    stderr: bool,
    directory: Option<PathBuf>,
    json: bool,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    env_filter: Option<String>,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            name: String::new(),
            console: true,
            stderr: false,
            directory: None,
            json: false,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            env_filter: None,
        }
    }
}

/// Builder state before a name was given.
#[derive(Debug)]
pub struct Unnamed;
/// Builder state once a name was given; only this state can `init`.
#[derive(Debug)]
pub struct Named;

/// Configures and installs the global subscriber.
#[derive(Debug)]
#[must_use = "The builder does nothing until `.init()` is called."]
pub struct LoggerBuilder<S = Unnamed> {
    settings: LoggerSettings,
    state: PhantomData<S>,
}

impl LoggerBuilder<Unnamed> {
    /// Names the logger. The name prefixes rolling log files (`name.2026-10-18.log`).
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named> {
        let mut settings = self.settings;
        settings.name = name.into();
        LoggerBuilder { settings, state: PhantomData }
    }
}

impl<S> LoggerBuilder<S> {
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Sends console output to stderr, keeping stdout free for program output.
    pub const fn stderr(mut self, enabled: bool) -> Self {
        self.settings.stderr = enabled;
        self
    }

    /// Writes log files into `directory` in addition to the console.
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.settings.directory = Some(directory.into());
        self
    }

    /// Switches the file layer to JSON lines. Has no effect without a directory.
    pub const fn json(mut self, enabled: bool) -> Self {
        self.settings.json = enabled;
        self
    }

    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.settings.rotation = rotation;
        self
    }

    pub const fn max_files(mut self, max: usize) -> Self {
        self.settings.max_files = max;
        self
    }

    /// Explicit filter directives, e.g. `packwise_packing=debug,tower_http=info`.
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.settings.env_filter = Some(filter.into());
        self
    }
}

impl LoggerBuilder<Named> {
    /// Installs the subscriber.
    ///
    /// Keep the returned [`Logger`] alive for the lifetime of the program, it
    /// owns the worker that flushes file output.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for a blank name, `max_files == 0`,
    ///   a bad filter directive or when no layer is enabled.
    /// * [`LoggerError::Appender`] when the log directory cannot be used.
    /// * [`LoggerError::Subscriber`] when a global subscriber already exists.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let settings = self.settings;
        validate(&settings)?;
        let filter = env_filter(&settings)?;

        let mut layers = Vec::new();
        if settings.console {
            let console = fmt::layer().compact().with_ansi(true);
            layers.push(if settings.stderr {
                console.with_writer(std::io::stderr).boxed()
            } else {
                console.boxed()
            });
        }

        let guard = match &settings.directory {
            Some(directory) => {
                fs::create_dir_all(directory).map_err(|e| LoggerError::Internal {
                    message: e.to_string().into(),
                    context: Some(format!("creating {}", directory.display()).into()),
                })?;

                let appender = RollingFileAppender::builder()
                    .rotation(settings.rotation.clone())
                    .filename_prefix(&settings.name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(settings.max_files)
                    .build(directory)
                    .context("building rolling file appender")?;

                let (writer, guard) = tracing_appender::non_blocking(appender);
                let file_layer = fmt::layer().with_writer(writer).with_ansi(false);
                layers.push(if settings.json { file_layer.json().boxed() } else { file_layer.boxed() });
                Some(guard)
            }
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "no output enabled, turn on the console or set a directory".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }
}

/// Handle to the installed subscriber; dropping it flushes file output.
#[must_use = "Dropping the logger stops the background file writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a new builder. A name is required before `init`.
    pub fn builder() -> LoggerBuilder<Unnamed> {
        LoggerBuilder { settings: LoggerSettings::default(), state: PhantomData }
    }

    /// Whether a file writer is attached.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Flushing log files");
        }
    }
}

fn validate(settings: &LoggerSettings) -> Result<(), LoggerError> {
    if settings.name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "logger name cannot be empty".into(),
            context: None,
        });
    }
    if settings.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }
    Ok(())
}

fn env_filter(settings: &LoggerSettings) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());
    match &settings.env_filter {
        None => Ok(builder.from_env_lossy()),
        Some(directives) => builder.parse(directives).map_err(|e| {
            LoggerError::InvalidConfiguration {
                message: format!("invalid filter '{directives}': {e}").into(),
                context: None,
            }
        }),
    }
}
