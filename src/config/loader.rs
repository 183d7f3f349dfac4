//! Merchant configuration loading
//!
//! Reads the sectioned configuration file, coerces each required key to its
//! declared type, resolves environment tokens and applies the merchant
//! defaults. Loading is all-or-nothing: the first failing field aborts the
//! whole load and no partial settings value is ever returned.

use std::fs;
use std::path::Path;

use toml::{Table, Value};
use tracing::{debug, info};
use url::Url;

use crate::config::settings::Settings;
use crate::config::url::normalize_query;
use crate::env::{EnvSource, ProcessEnv, substitute};
use crate::error::{Error, Result, UrlField};

/// Section holding every merchant key in the configuration file.
const SECTION: &str = "sogenactif";

/// Configuration loader with a pluggable environment lookup
#[derive(Debug)]
pub struct ConfigLoader<E = ProcessEnv> {
    /// Lookup used to resolve `${NAME}` tokens
    env: E,
}

impl ConfigLoader {
    /// Create a loader resolving tokens against the process environment
    pub fn new() -> Self {
        Self { env: ProcessEnv }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EnvSource> ConfigLoader<E> {
    /// Create a loader resolving tokens against `env`
    pub fn with_env(env: E) -> Self {
        Self { env }
    }

    /// Load merchant settings from the configuration file at `path`.
    ///
    /// Required keys are read in a fixed order; the first key that is
    /// absent, mistyped or empty fails the load. `auto_response_url` is the
    /// only optional key, but when present its value must still parse.
    pub fn load(&self, path: &Path) -> Result<Settings> {
        info!("Loading merchant configuration from file: {:?}", path);

        let raw = fs::read_to_string(path)?;
        let document: Table = toml::from_str(&raw)?;
        let section = document
            .get(SECTION)
            .and_then(Value::as_table)
            .ok_or_else(|| Error::missing_section(SECTION))?;

        let debug = require_bool(section, "debug")?;
        let logo_path = require_str(section, "logo_path")?;
        let merchants_root_dir = require_str(section, "merchants_rootdir")?;
        let media_path = require_str(section, "media_path")?;
        let merchant_id = require_str(section, "merchant_id")?;
        let library_path = require_str(section, "library_path")?;
        let merchant_country = require_str(section, "merchant_country")?;
        let merchant_currency_code = require_str(section, "merchant_currency_code")?;

        let cancel_url = require_url(section, "cancel_url", UrlField::Cancel)?;
        let return_url = require_url(section, "return_url", UrlField::Return)?;

        let auto_response_url = match section.get("auto_response_url") {
            None => None,
            Some(_) => Some(require_url(
                section,
                "auto_response_url",
                UrlField::AutoResponse,
            )?),
        };

        let mut settings = Settings {
            debug,
            logo_path,
            library_path,
            merchants_root_dir,
            media_path,
            merchant_id,
            merchant_country,
            merchant_currency_code,
            cancel_url,
            return_url,
            auto_response_url,
            // parmcom parameters, filled in by apply_merchant_defaults below
            advert: String::new(),
            bg_color: String::new(),
            block_align: String::new(),
            block_order: String::new(),
            condition: String::new(),
            currency: 0,
            header_flag: false,
            logo2: String::new(),
            payment_means: String::new(),
            target: String::new(),
            text_color: String::new(),
        };

        self.resolve_env_tokens(&mut settings)?;
        settings.apply_merchant_defaults();

        info!("Merchant configuration loaded successfully");
        debug!("Final configuration: {:?}", settings);

        Ok(settings)
    }

    /// Run every substitutable field through the environment substitutor.
    fn resolve_env_tokens(&self, settings: &mut Settings) -> Result<()> {
        debug!("Applying environment variable substitutions");

        let paths = [
            &mut settings.logo_path,
            &mut settings.library_path,
            &mut settings.merchants_root_dir,
            &mut settings.media_path,
        ];
        for path in paths {
            *path = substitute(path, &self.env)?;
        }

        settings.cancel_url = normalize_query(&settings.cancel_url, &self.env, UrlField::Cancel)?;
        settings.return_url = normalize_query(&settings.return_url, &self.env, UrlField::Return)?;
        if let Some(url) = settings.auto_response_url.as_ref() {
            let normalized = normalize_query(url, &self.env, UrlField::AutoResponse)?;
            settings.auto_response_url = Some(normalized);
        }

        Ok(())
    }
}

/// Read a required string key, rejecting absent, mistyped and empty values.
fn require_str(section: &Table, key: &'static str) -> Result<String> {
    match section.get(key).and_then(Value::as_str) {
        Some(value) if !value.is_empty() => Ok(value.to_owned()),
        _ => Err(Error::missing_field(key)),
    }
}

/// Read a required boolean key.
fn require_bool(section: &Table, key: &'static str) -> Result<bool> {
    section
        .get(key)
        .and_then(Value::as_bool)
        .ok_or_else(|| Error::missing_field(key))
}

/// Read a required URL key, attaching the field context to parse failures.
fn require_url(section: &Table, key: &'static str, field: UrlField) -> Result<Url> {
    let raw = require_str(section, key)?;
    Url::parse(&raw).map_err(|e| Error::malformed_url(field, format!("{e}: {raw}")))
}

/// Load merchant settings from `path`.
///
/// `${NAME}` tokens are resolved against the process environment. This is
/// the conventional entry point for startup code; use
/// [`ConfigLoader::with_env`] to inject a different lookup.
pub fn load_config(path: impl AsRef<Path>) -> Result<Settings> {
    ConfigLoader::new().load(path.as_ref())
}
