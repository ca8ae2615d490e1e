//! Local input validation.
//!
//! These are the checks that block a mutation before any network call:
//! required record fields and the import file path.

use std::path::PathBuf;

/// Trim both record fields; None when either is empty afterwards.
pub fn record_fields(name: &str, email: &str) -> Option<(String, String)> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() {
        return None;
    }
    Some((name.to_string(), email.to_string()))
}

/// Validate the import path input: non-empty and pointing at an
/// existing file.
pub fn import_path(input: &str) -> Result<PathBuf, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Choose a CSV file first".to_string());
    }

    let path = PathBuf::from(trimmed);
    if !path.is_file() {
        return Err(format!("No such file: {}", trimmed));
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_fields_trims_and_accepts() {
        assert_eq!(
            record_fields("  Ann ", " ann@example.com "),
            Some(("Ann".to_string(), "ann@example.com".to_string()))
        );
    }

    #[test]
    fn record_fields_rejects_empty_name() {
        assert_eq!(record_fields("", "x@y.com"), None);
        assert_eq!(record_fields("   ", "x@y.com"), None);
    }

    #[test]
    fn record_fields_rejects_empty_email() {
        assert_eq!(record_fields("Ann", ""), None);
        assert_eq!(record_fields("Ann", "  "), None);
    }

    #[test]
    fn import_path_rejects_empty_input() {
        assert!(import_path("").is_err());
        assert!(import_path("   ").is_err());
    }

    #[test]
    fn import_path_rejects_missing_file() {
        let err = import_path("/no/such/file.csv").unwrap_err();
        assert!(err.contains("/no/such/file.csv"));
    }

    #[test]
    fn import_path_accepts_existing_file() {
        let mut path = std::env::temp_dir();
        path.push("admintui-validate-test.csv");
        std::fs::write(&path, "name,email\n").unwrap();

        let accepted = import_path(path.to_str().unwrap()).unwrap();
        assert_eq!(accepted, path);

        let _ = std::fs::remove_file(&path);
    }
}
