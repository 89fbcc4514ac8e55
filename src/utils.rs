//! Shared utility functions

use std::io::Read;
use std::path::Path;

use serde::Serialize;

use ldgen::error::{LdgenError, Result};

/// Read a file, or stdin when `path` is `None` or "-"
pub fn read_input(path: Option<&Path>) -> Result<String> {
    let content = match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p).map_err(|e| {
            LdgenError::InputError(format!("Could not read {}: {}", p.display(), e))
        })?,
        _ => {
            if atty::is(atty::Stream::Stdin) {
                return Err(LdgenError::InputError("No file given and stdin is a terminal".into()));
            }
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    if content.trim().is_empty() {
        return Err(LdgenError::InputError("Input is empty".into()));
    }
    Ok(content)
}

/// Serialize to JSON, pretty or compact
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

/// Whether human output should be colored
pub fn use_color() -> bool {
    atty::is(atty::Stream::Stdout)
}

/// Confidence as a fixed-width percentage
pub fn format_confidence(confidence: f64) -> String {
    format!("{:>3.0}%", confidence * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_confidence() {
        assert_eq!(format_confidence(1.0), "100%");
        assert_eq!(format_confidence(0.456), " 46%");
        assert_eq!(format_confidence(0.0), "  0%");
    }

    #[test]
    fn test_to_json_compact() {
        let value = serde_json::json!({ "a": 1 });
        assert_eq!(to_json(&value, false).unwrap(), r#"{"a":1}"#);
        assert!(to_json(&value, true).unwrap().contains('\n'));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_input(Some(Path::new("/nonexistent/ldgen/page.md"))).unwrap_err();
        assert!(matches!(err, LdgenError::InputError(_)));
    }
}
