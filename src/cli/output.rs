//! Output formatting utilities for the CLI.

use serde::Serialize;

/// Placeholder shown instead of credential values
pub const REDACTED: &str = "[REDACTED]";

/// Result of a command, printable for humans or as JSON
pub trait CommandOutput: Serialize {
    /// Plain-text rendering
    fn to_human(&self) -> String;
    /// JSON rendering
    fn to_json(&self) -> serde_json::Value;
}

/// Print a command result to stdout
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

/// Report a command failure on stderr
pub fn handle_error(err: &anyhow::Error, json_mode: bool) {
    if json_mode {
        let causes: Vec<String> = err.chain().map(ToString::to_string).collect();
        let body = serde_json::json!({
            "success": false,
            "error": err.to_string(),
            "causes": causes,
        });
        eprintln!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
    }
}

/// Credential value as it may be displayed
pub fn display_value(value: &str, reveal: bool) -> String {
    if reveal {
        value.to_string()
    } else {
        REDACTED.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_value() {
        assert_eq!(display_value("secret", false), REDACTED);
        assert_eq!(display_value("secret", true), "secret");
        assert_eq!(display_value("", true), "");
    }
}
