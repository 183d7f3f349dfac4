//! Environment variable interpolation
//!
//! Resolves `${NAME}` tokens in configuration values against a pluggable
//! environment lookup.

pub mod lookup;
pub mod substitute;

pub use lookup::{EnvSource, ProcessEnv};
pub use substitute::substitute;
