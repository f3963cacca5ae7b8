//! # Logger
//!
//! Installs the process-wide `tracing` subscriber for `rtfeat` binaries:
//! a compact console layer, an optional non-blocking rolling file layer,
//! and an [`EnvFilter`] that honours `RUST_LOG`.
//!
//! ## Example
//!
//! ```rust
//! # use rtfeat_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder("my-app")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::LoggerError;
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

/// Rolling file output settings.
#[derive(Debug, Clone)]
struct FileOutput {
    dir: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

/// Configures and installs the global tracing subscriber.
#[derive(Debug, Clone)]
pub struct LoggerBuilder {
    name: String,
    level: LevelFilter,
    env_filter: Option<String>,
    console: bool,
    file: Option<FileOutput>,
}

impl LoggerBuilder {
    /// Minimum level emitted when neither `RUST_LOG` nor [`Self::env_filter`] says otherwise.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Programmatic filter directives (e.g., `rtfeat_registry=debug`).
    ///
    /// Invalid directives make [`Self::init`] fail.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Enables or disables the console (stderr) layer.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Writes logs to rolling files named `<name>.<date>.log` under `dir`.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn file(mut self, dir: impl Into<PathBuf>) -> Self {
        self.file = Some(FileOutput {
            dir: dir.into(),
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        });
        self
    }

    /// Rotation strategy for file output. No effect without [`Self::file`].
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        if let Some(file) = self.file.as_mut() {
            file.rotation = rotation;
        }
        self
    }

    /// Number of rotated files to keep. No effect without [`Self::file`].
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn max_files(mut self, max: usize) -> Self {
        if let Some(file) = self.file.as_mut() {
            file.max_files = max;
        }
        self
    }

    /// JSON lines for file output. No effect without [`Self::file`].
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn json(mut self) -> Self {
        if let Some(file) = self.file.as_mut() {
            file.json = true;
        }
        self
    }

    /// Installs the global subscriber.
    ///
    /// Keep the returned [`Logger`] alive until shutdown; dropping it stops
    /// the background file writer.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`,
    ///   a bad filter, or when no layer is enabled.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] if the log directory is unusable.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;
        let filter = self.build_env_filter()?;

        let mut layers = Vec::new();
        if self.console {
            layers.push(layer().compact().with_writer(std::io::stderr).boxed());
        }

        let guard = match self.file {
            Some(file) => {
                fs::create_dir_all(&file.dir).map_err(|source| LoggerError::Io {
                    source,
                    context: Some(format!("creating {}", file.dir.display()).into()),
                })?;

                let appender = RollingFileAppender::builder()
                    .rotation(file.rotation)
                    .filename_prefix(&self.name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(file.max_files)
                    .build(&file.dir)?;
                let (writer, guard) = tracing_appender::non_blocking(appender);

                let file_layer = layer().with_writer(writer).with_ansi(false);
                let boxed = if file.json { file_layer.json().boxed() } else { file_layer.boxed() };
                layers.push(boxed);
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::invalid(
                "No logging layers enabled. Enable console or file output.",
            ));
        }

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }

    fn validate(&self) -> Result<(), LoggerError> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::invalid("Logger name cannot be empty"));
        }
        if self.file.as_ref().is_some_and(|file| file.max_files == 0) {
            return Err(LoggerError::invalid("max_files must be greater than zero"));
        }
        Ok(())
    }

    fn build_env_filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        match &self.env_filter {
            None => Ok(builder.from_env_lossy()),
            Some(directives) => builder.parse(directives).map_err(|e| {
                LoggerError::invalid(format!("Invalid env filter '{directives}': {e}"))
            }),
        }
    }
}

/// Handle to the installed logging system.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts configuring a logger. `name` prefixes rolling log files.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            name: name.into(),
            level: LevelFilter::INFO,
            env_filter: None,
            console: true,
            file: None,
        }
    }

    /// Whether a background file writer is attached.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Logging system shutting down, flushing file output");
        }
    }
}
