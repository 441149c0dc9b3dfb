use unit_setters_core::config::SuggestionConfig;
use unit_setters_core::error::Error::ParameterFormat;
use unit_setters_core::error::{Error, Result};
use unit_setters_core::suggest::{suggest, suggestion_clause};

use crate::parameters::ALL;

/// Splits a parameter in the format `name=value`.
///
/// Only the first `=` separates the name; the value may contain more.
///
/// # Errors
///
/// Returns [`ParameterFormat`] if there is no `=` or the name is empty.
pub fn split_named(param_str: &str) -> Result<(&str, &str)> {
    match param_str.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name, value)),
        _ => Err(ParameterFormat(param_str.to_string())),
    }
}

/// Parses `name=value` parameters, checking each name is one the CLI knows.
///
/// # Errors
///
/// Returns an error for a malformed parameter, or for an unknown name. The
/// unknown-name error suggests the closest known names.
pub fn parse_named(
    named_params: &[String],
    suggestions: &SuggestionConfig,
) -> Result<Vec<(&'static str, String)>> {
    let mut parsed = Vec::new();

    for param_str in named_params {
        let (name, value) = split_named(param_str)?;

        let Some(known) = ALL.iter().find(|known| **known == name) else {
            return Err(Error::unknown_parameter(
                name.to_string(),
                suggestion_clause(&suggest(name, &ALL, suggestions)),
            ));
        };

        parsed.push((*known, value.to_string()));
    }

    Ok(parsed)
}
