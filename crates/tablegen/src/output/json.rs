//! JSON output formatting.

use crate::error::Result;

/// Format a value as pretty-printed JSON.
pub fn format_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablegen_core::TableResourceArgs;

    #[test]
    fn test_format_args_skips_empty_optionals() {
        let args = TableResourceArgs {
            name: Some("Orders".to_string()),
            hash_key: Some("OrderId".to_string()),
            ..TableResourceArgs::new()
        };

        let json = format_json(&args).unwrap();

        assert!(json.contains("\"name\": \"Orders\""));
        assert!(json.contains("\"hash_key\": \"OrderId\""));
        assert!(!json.contains("range_key"));
        assert!(!json.contains("global_secondary_indexes"));
    }
}
