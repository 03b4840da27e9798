use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::{ConfigurationError, Result};

/// How the builder treats members of a group that disagree.
///
/// Whatever the policy, the first declaration in group order is the one
/// kept; the policy only decides whether a later disagreement is ignored,
/// logged, or turned into an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConflictPolicy {
    /// Keep the first declaration without reporting.
    FirstWins,
    /// Keep the first declaration and log a warning.
    #[default]
    Warn,
    /// Fail the build.
    Reject,
}

/// Error returned when parsing an unknown policy name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown conflict policy '{0}', expected one of: first-wins, warn, reject")]
pub struct ParsePolicyError(pub String);

impl ConflictPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictPolicy::FirstWins => "first-wins",
            ConflictPolicy::Warn => "warn",
            ConflictPolicy::Reject => "reject",
        }
    }

    /// Applies the policy to a detected conflict.
    pub(crate) fn resolve(&self, conflict: ConfigurationError) -> Result<()> {
        match self {
            ConflictPolicy::FirstWins => Ok(()),
            ConflictPolicy::Warn => {
                tracing::warn!(%conflict, "Keeping first declaration");
                Ok(())
            }
            ConflictPolicy::Reject => Err(conflict),
        }
    }
}

impl fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConflictPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first-wins" | "first_wins" | "silent" => Ok(ConflictPolicy::FirstWins),
            "warn" => Ok(ConflictPolicy::Warn),
            "reject" | "strict" => Ok(ConflictPolicy::Reject),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conflict() -> ConfigurationError {
        ConfigurationError::ConflictingCapacity {
            table: "Orders".to_string(),
            first: "Order".to_string(),
            other: "OrderLine".to_string(),
        }
    }

    #[test]
    fn test_default_is_warn() {
        assert_eq!(ConflictPolicy::default(), ConflictPolicy::Warn);
    }

    #[test]
    fn test_parse_round_trips_display() {
        for policy in [
            ConflictPolicy::FirstWins,
            ConflictPolicy::Warn,
            ConflictPolicy::Reject,
        ] {
            assert_eq!(policy.to_string().parse::<ConflictPolicy>(), Ok(policy));
        }
        assert_eq!(" Strict ".parse::<ConflictPolicy>(), Ok(ConflictPolicy::Reject));
    }

    #[test]
    fn test_parse_unknown_policy() {
        let error = "loud".parse::<ConflictPolicy>().unwrap_err();
        assert_eq!(
            error.to_string(),
            "Unknown conflict policy 'loud', expected one of: first-wins, warn, reject"
        );
    }

    #[test]
    fn test_only_reject_fails() {
        assert!(ConflictPolicy::FirstWins.resolve(conflict()).is_ok());
        assert!(ConflictPolicy::Warn.resolve(conflict()).is_ok());
        assert_eq!(ConflictPolicy::Reject.resolve(conflict()), Err(conflict()));
    }
}
