//! URL query normalization
//!
//! Resolves `${NAME}` tokens hidden inside the query component of a parsed
//! URL and re-validates the result.

use percent_encoding::percent_decode_str;
use url::Url;

use crate::env::{EnvSource, substitute};
use crate::error::{Error, Result, UrlField};

/// Rebuild `url` with every `${NAME}` token in its string form resolved.
///
/// The serialized URL is percent-decoded first, so tokens that ended up
/// escaped during parsing are exposed again, then substituted and re-parsed.
/// `field` names the setting in any resulting error.
pub fn normalize_query<E: EnvSource>(url: &Url, env: &E, field: UrlField) -> Result<Url> {
    let decoded = percent_decode_str(url.as_str())
        .decode_utf8()
        .map_err(|e| Error::malformed_url(field, e.to_string()))?;
    let resolved = substitute(&decoded, env)?;
    Url::parse(&resolved).map_err(|e| Error::malformed_url(field, format!("{e}: {resolved}")))
}
