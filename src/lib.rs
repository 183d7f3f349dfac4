//! Sogenactif Merchant Gateway Configuration
//!
//! Loads merchant settings for the Sogenactif payment platform from a
//! sectioned configuration file. Path-valued settings and URL query strings
//! may reference process environment variables as `${NAME}` tokens; the
//! loader resolves every token, validates the navigation URLs and applies
//! the fixed `parmcom` merchant parameters before handing the settings to
//! the caller.
//!
//! Loading is a one-shot, fail-fast startup operation: any missing key,
//! unresolved token or malformed URL aborts the load and no partial
//! settings value is returned.
//!
//! # Examples
//!
//! ```no_run
//! use sogenactif::load_config;
//!
//! # fn main() -> anyhow::Result<()> {
//! let settings = load_config("/etc/sogenactif.toml")?;
//! assert_eq!(settings.currency, 978);
//! println!("merchant {} ready", settings.merchant_id);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod env;
pub mod error;

pub use config::{ConfigLoader, Settings, load_config};
pub use env::{EnvSource, ProcessEnv};
pub use error::{Error, Result, UrlField};
