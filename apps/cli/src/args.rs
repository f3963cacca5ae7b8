//! # CLI Argument Definitions

use clap::{Parser, Subcommand, ValueEnum};
use rtfeat_logger::LevelFilter;
use std::path::PathBuf;

/// Query which runtime features this process supports.
#[derive(Debug, Parser)]
#[command(name = "rtfeat")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Query runtime feature support")]
pub(crate) struct Cli {
    /// Registry configuration file (TOML). `RTFEAT__*` variables override it.
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Minimum log level written to stderr (`RUST_LOG` takes precedence).
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub(crate) log_level: LogLevel,

    /// Also write rolling log files into this directory.
    #[arg(long, global = true, value_name = "DIR")]
    pub(crate) log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Print whether each named feature is supported
    Check {
        /// Exact, case-sensitive feature names
        #[arg(required = true)]
        names: Vec<String>,
        /// Fail if any named feature is unsupported
        #[arg(long)]
        require: bool,
    },
    /// List every known feature
    List {
        /// Emit the full registry report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show how dynamic code is executed
    Probe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => Self::OFF,
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
        }
    }
}
