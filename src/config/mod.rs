//! Configuration management for the merchant gateway
//!
//! This module handles loading and validating the merchant settings
//! consumed by the payment integration at startup.

pub mod loader;
pub mod settings;
pub mod url;

pub use loader::{ConfigLoader, load_config};
pub use settings::Settings;
