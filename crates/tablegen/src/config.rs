use std::env;
use std::fmt::Display;
use std::str::FromStr;

use tablegen_core::ConflictPolicy;

/// Configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// How disagreeing declarations within a table are handled (default: warn)
    pub conflict_policy: ConflictPolicy,
    /// Only emit attribute definitions used by a key schema (default: true)
    pub key_attributes_only: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TABLEGEN_CONFLICT_POLICY` - `first-wins`, `warn` or `reject` (default: warn)
    /// - `TABLEGEN_KEY_ATTRIBUTES_ONLY` - `true` or `false` (default: true)
    ///
    /// Unparseable values are logged and fall back to the default.
    pub fn from_env() -> Self {
        Self {
            conflict_policy: env_or("TABLEGEN_CONFLICT_POLICY", ConflictPolicy::default()),
            key_attributes_only: env_or("TABLEGEN_KEY_ATTRIBUTES_ONLY", true),
        }
    }

    /// Overrides the conflict policy when one is given.
    pub fn with_conflict_policy(mut self, policy: Option<ConflictPolicy>) -> Self {
        if let Some(policy) = policy {
            self.conflict_policy = policy;
        }
        self
    }
}

fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    let Ok(value) = env::var(key) else {
        return default;
    };
    match value.parse() {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!(key, %value, error = %e, "Ignoring invalid environment value");
            default
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("TABLEGEN_CONFLICT_POLICY");
        env::remove_var("TABLEGEN_KEY_ATTRIBUTES_ONLY");

        let config = Config::from_env();

        assert_eq!(config.conflict_policy, ConflictPolicy::Warn);
        assert!(config.key_attributes_only);
    }

    #[test]
    fn test_invalid_env_value_falls_back() {
        env::set_var("TABLEGEN_TEST_CAPACITY", "seven");
        assert_eq!(env_or("TABLEGEN_TEST_CAPACITY", 7u32), 7);

        env::set_var("TABLEGEN_TEST_CAPACITY", "12");
        assert_eq!(env_or("TABLEGEN_TEST_CAPACITY", 7u32), 12);

        env::remove_var("TABLEGEN_TEST_CAPACITY");
        assert_eq!(env_or("TABLEGEN_TEST_CAPACITY", 7u32), 7);
    }

    #[test]
    fn test_override_conflict_policy() {
        let config = Config {
            conflict_policy: ConflictPolicy::Warn,
            key_attributes_only: true,
        };

        assert_eq!(
            config.clone().with_conflict_policy(Some(ConflictPolicy::Reject)).conflict_policy,
            ConflictPolicy::Reject
        );
        assert_eq!(
            config.with_conflict_policy(None).conflict_policy,
            ConflictPolicy::Warn
        );
    }
}
