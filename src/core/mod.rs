pub mod error;
pub mod record;
pub mod types;

use clap::ValueEnum;
use tracing::Level;

// Settings for how a collection is reported by the front end
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub pretty: bool,
    pub fail_on_error: bool,
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warning => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

// Re-exporting commonly used components
pub use error::ErrorCollection;
pub use record::ErrorRecord;
pub use types::{label, label_key, CliError, CliResult, Parameter};
