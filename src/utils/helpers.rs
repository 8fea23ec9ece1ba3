use crate::core::types::{CliError, CliResult, Parameter};

/// Parses one command-line parameter.
/// Valid JSON (`12`, `true`, `"quoted"`, `[1,2]`) keeps its type, anything
/// else becomes a plain string. Anything wrapped in braces, `{}` included,
/// stays a string so `{LABEL}` tokens pass through untouched.
pub fn parse_parameter(raw: &str) -> Parameter {
    let raw = raw.trim();
    if raw.starts_with('{') {
        return Parameter::String(raw.to_string());
    }
    serde_json::from_str(raw).unwrap_or_else(|_| Parameter::String(raw.to_string()))
}

/// Splits a parameter list on the commas that sit outside quoted strings,
/// brackets and braces.
pub fn split_parameters(params: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in params.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '[' | '{' => depth += 1,
            ']' | '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                pieces.push(&params[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    pieces.push(&params[start..]);
    pieces
}

/// Splits `MESSAGE[:PARAM[,PARAM]...]` into its message and parameters.
pub fn parse_message_spec(spec: &str) -> (String, Vec<Parameter>) {
    match spec.split_once(':') {
        Some((message, params)) if !params.trim().is_empty() => (
            message.trim().to_string(),
            split_parameters(params)
                .into_iter()
                .map(parse_parameter)
                .collect(),
        ),
        Some((message, _)) => (message.trim().to_string(), Vec::new()),
        None => (spec.trim().to_string(), Vec::new()),
    }
}

/// Splits `NAME=MESSAGE[:PARAMS]` into the field name and its message spec.
pub fn parse_field_spec(spec: &str) -> CliResult<(String, String, Vec<Parameter>)> {
    let (field, rest) = spec
        .split_once('=')
        .ok_or_else(|| CliError::InvalidFieldSpec(spec.to_string()))?;

    let field = field.trim();
    if field.is_empty() {
        return Err(CliError::InvalidFieldSpec(spec.to_string()));
    }

    let (message, parameters) = parse_message_spec(rest);
    Ok((field.to_string(), message, parameters))
}
