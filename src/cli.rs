use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, info};

use crate::core::{ErrorCollection, LogLevel, ReportConfig};
use crate::core::types::CliResult;
use crate::utils::{parse_field_spec, parse_message_spec};

/// Exit status when `--fail-on-error` is set and errors were collected
pub const EXIT_HAS_ERROR: i32 = 1;

/// Exit status for unusable arguments or input
pub const EXIT_USAGE: i32 = 2;

#[derive(Parser, Debug, Clone)]
#[command(name = "fielderr", about = "Build or inspect a field/global error collection")]
#[command(rename_all = "kebab-case")]
pub struct Cli {
    /// Global error as MESSAGE[:PARAM[,PARAM]...]
    #[arg(long = "global", short = 'g', value_name = "SPEC")]
    pub globals: Vec<String>,

    /// Field error as NAME=MESSAGE[:PARAM[,PARAM]...]
    #[arg(long = "field", short = 'f', value_name = "NAME=SPEC")]
    pub fields: Vec<String>,

    /// Serialized collection to start from, `-` for stdin
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Exit with status 1 when the collection holds any error.
    #[arg(long)]
    pub fail_on_error: bool,

    /// Default log level, overridden by RUST_LOG.
    #[arg(long, value_enum, default_value = "warning")]
    pub log_level: LogLevel,
}

impl Cli {
    pub fn config(&self) -> ReportConfig {
        ReportConfig {
            pretty: self.pretty,
            fail_on_error: self.fail_on_error,
            log_level: self.log_level,
        }
    }

    /// Loads `--input` if given, then appends every `--global` and `--field`.
    pub fn build_collection(&self) -> CliResult<ErrorCollection> {
        let mut errors = match &self.input {
            Some(path) => load_collection(path)?,
            None => ErrorCollection::new(),
        };

        for spec in &self.globals {
            let (message, parameters) = parse_message_spec(spec);
            errors.add_global(message, parameters);
        }

        for spec in &self.fields {
            let (field, message, parameters) = parse_field_spec(spec)?;
            errors.add_field(field, message, parameters);
        }

        debug!(records = errors.len(), "collection built");
        Ok(errors)
    }
}

pub fn load_collection(path: &Path) -> CliResult<ErrorCollection> {
    let content = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path)?
    };

    info!(path = %path.display(), "loading error collection");
    Ok(serde_json::from_str(&content)?)
}

pub fn render(errors: &ErrorCollection, config: &ReportConfig) -> CliResult<String> {
    let json = if config.pretty {
        serde_json::to_string_pretty(errors)?
    } else {
        serde_json::to_string(errors)?
    };
    Ok(json)
}

/// Builds the collection, writes it to `out` and returns the exit status.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> CliResult<i32> {
    let config = cli.config();
    let errors = cli.build_collection()?;

    writeln!(out, "{}", render(&errors, &config)?)?;

    if config.fail_on_error && errors.has_error() {
        info!("{}", errors);
        return Ok(EXIT_HAS_ERROR);
    }
    Ok(0)
}
