use thiserror::Error;

/// Opaque value carried alongside an error message.
///
/// A string parameter shaped like `{SOME_KEY}` is a label token: whoever
/// renders the message replaces it with the localized label of `SOME_KEY`.
pub type Parameter = serde_json::Value;

/// Build a label token parameter for `key`, e.g. `label("NAME")` -> `"{NAME}"`.
pub fn label(key: &str) -> Parameter {
    Parameter::String(format!("{{{}}}", key))
}

/// Returns the key of a label token, or `None` for any other parameter.
pub fn label_key(parameter: &Parameter) -> Option<&str> {
    let text = parameter.as_str()?;
    let key = text.strip_prefix('{')?.strip_suffix('}')?;
    if key.is_empty() || key.contains(|c: char| c == '{' || c == '}') {
        return None;
    }
    Some(key)
}

/// Errors raised by the command-line front end
#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid field spec `{0}`: expected NAME=MESSAGE[:PARAMS]")]
    InvalidFieldSpec(String),
}

/// Result type for command-line operations
pub type CliResult<T> = Result<T, CliError>;
