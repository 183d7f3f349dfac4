//! Environment lookup abstraction
//!
//! Token substitution reads its variables through [`EnvSource`] instead of
//! calling [`std::env::var`] directly, so tests can supply a fixed map
//! without touching the process environment.

use std::collections::HashMap;

/// Key/value lookup used to resolve `${NAME}` tokens.
pub trait EnvSource {
    /// Value of the variable `name`, or `None` when unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// Lookup backed by the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_env_reads_variable() {
        unsafe {
            std::env::set_var("SOGEN_LOOKUP_TEST", "value");
        }
        assert_eq!(
            ProcessEnv.var("SOGEN_LOOKUP_TEST"),
            Some("value".to_string())
        );
        unsafe {
            std::env::remove_var("SOGEN_LOOKUP_TEST");
        }
    }

    #[test]
    fn test_process_env_unset_variable() {
        assert_eq!(ProcessEnv.var("SOGEN_LOOKUP_TEST_UNSET"), None);
    }

    #[test]
    fn test_map_lookup() {
        let mut env = HashMap::new();
        env.insert("MERCHANT_HOME".to_string(), "/srv/merchant".to_string());

        assert_eq!(env.var("MERCHANT_HOME"), Some("/srv/merchant".to_string()));
        assert_eq!(env.var("OTHER"), None);
    }
}
