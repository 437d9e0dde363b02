//! Validation of entry titles before they become store paths.
//!
//! Titles come from untrusted export data (record titles, usernames) and are
//! used both as command arguments and as paths under the store directory.

use crate::{Pif2PassError, Result};

/// Maximum allowed length for an entry title.
const MAX_TITLE_LENGTH: usize = 255;

/// Validates an entry title.
///
/// Rejects:
/// - Empty titles
/// - Excessive length (>255 bytes)
/// - Null bytes and control characters
/// - Absolute paths, and empty, `.` or `..` path components
///
/// # Errors
///
/// Returns [`Pif2PassError::InvalidTitle`] if validation fails.
///
/// # Example
///
/// ```
/// use pif2pass::validation::validate_title;
///
/// assert!(validate_title("example.com/jdoe").is_ok());
/// assert!(validate_title("example.com/jdoe@example.com").is_ok());
/// assert!(validate_title("My Router").is_ok());
///
/// assert!(validate_title("").is_err());
/// assert!(validate_title("../../etc/passwd").is_err());
/// assert!(validate_title("/etc/passwd").is_err());
/// ```
pub fn validate_title(title: &str) -> Result<()> {
    if title.is_empty() {
        return Err(Pif2PassError::InvalidTitle(
            "title cannot be empty".to_string(),
        ));
    }

    if title.len() > MAX_TITLE_LENGTH {
        return Err(Pif2PassError::InvalidTitle(format!(
            "title exceeds maximum length of {} characters",
            MAX_TITLE_LENGTH
        )));
    }

    if title.contains('\0') {
        return Err(Pif2PassError::InvalidTitle(
            "title contains null byte".to_string(),
        ));
    }

    if title.chars().any(char::is_control) {
        return Err(Pif2PassError::InvalidTitle(
            "title contains control characters".to_string(),
        ));
    }

    if title.starts_with('/') {
        return Err(Pif2PassError::InvalidTitle(format!(
            "title is an absolute path: {}",
            title
        )));
    }

    if title
        .split('/')
        .any(|part| part.is_empty() || part == "." || part == "..")
    {
        return Err(Pif2PassError::InvalidTitle(format!(
            "title has an empty or relative path component: {}",
            title
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_titles() {
        assert!(validate_title("example.com").is_ok());
        assert!(validate_title("example.com/jdoe").is_ok());
        assert!(validate_title("192.168.1.5/admin").is_ok());
        assert!(validate_title("Bank (savings)").is_ok());
        assert!(validate_title("example.com/first.last+tag@example.org").is_ok());
    }

    #[test]
    fn test_empty_title() {
        let result = validate_title("");
        assert!(result.unwrap_err().to_string().contains("empty"));
    }

    #[test]
    fn test_too_long() {
        let result = validate_title(&"a".repeat(256));
        assert!(result.unwrap_err().to_string().contains("maximum length"));
    }

    #[test]
    fn test_null_byte() {
        let result = validate_title("name\0with\0nulls");
        assert!(result.unwrap_err().to_string().contains("null byte"));
    }

    #[test]
    fn test_control_characters() {
        let result = validate_title("name\nwith\tcontrol");
        assert!(result.unwrap_err().to_string().contains("control"));
    }

    #[test]
    fn test_path_traversal() {
        let bad = vec![
            "/etc/passwd",
            "../outside",
            "example.com/../../outside",
            "example.com/./jdoe",
            "example.com//jdoe",
            "example.com/",
        ];

        for title in bad {
            assert!(validate_title(title).is_err(), "Expected '{}' to fail validation", title);
        }
    }
}
