//! `${NAME}` token substitution
//!
//! Replaces `${NAME}` placeholders in configuration strings with values read
//! from an [`EnvSource`]. Token names are limited to uppercase letters and
//! underscores; anything else is left in place untouched.

use regex::Regex;

use crate::env::lookup::EnvSource;
use crate::error::{Error, Result};

/// Replace every `${NAME}` token in `input` with the value of the
/// identically named variable from `env`.
///
/// Replacement is textual and global: each discovered token is substituted
/// everywhere it appears in the string. A token whose variable is unset or
/// set to an empty string fails the whole call; no partially substituted
/// string is returned. Inputs without tokens come back unchanged.
pub fn substitute<E: EnvSource>(input: &str, env: &E) -> Result<String> {
    let pattern = Regex::new(r"\$\{([A-Z_]+)\}").unwrap();

    let mut resolved = input.to_owned();
    for token in pattern.captures_iter(input) {
        let name = &token[1];
        let value = match env.var(name) {
            Some(value) if !value.is_empty() => value,
            _ => return Err(Error::unresolved_variable(name)),
        };
        resolved = resolved.replace(&token[0], &value);
    }
    Ok(resolved)
}
