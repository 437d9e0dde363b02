//! Repair of the 1PIF record separator syntax.
//!
//! A `.1pif` export is one JSON object per record, each followed by a line
//! such as `***5642bee8-a5ff-11dc-8314-0800200c9a66***`. Turning every
//! separator into a comma and wrapping the whole text in brackets yields a
//! JSON array.

use crate::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Matches a whole separator line. `R` makes `^`/`$` CRLF-aware.
static SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mR)^\*\*\*.*\*\*\*$").unwrap_or_else(|_| unreachable!()));

/// Replaces separator lines with commas and strips the trailing comma.
///
/// The returned text is the body of a JSON array, without the brackets.
///
/// # Example
///
/// ```
/// use pif2pass::normalize::repair;
///
/// let raw = "{\"a\":1}\n***x***\n{\"b\":2}\n***y***\n";
/// assert_eq!(repair(raw), "{\"a\":1}\n,\n{\"b\":2}");
/// ```
pub fn repair(raw: &str) -> String {
    let replaced = SEPARATOR.replace_all(raw, ",");

    let body = replaced.trim_end();
    let body = body.strip_suffix(',').unwrap_or(body).trim_end();

    body.to_string()
}

/// Parses raw export text into one JSON value per record.
///
/// # Errors
///
/// Returns [`Pif2PassError::Json`] if the repaired text is not valid JSON.
/// There is no partial recovery: one malformed record fails the document.
pub fn normalize(raw: &str) -> Result<Vec<Value>> {
    let body = repair(raw);
    let document: Vec<Value> = serde_json::from_str(&format!("[{}]", body))?;
    Ok(document)
}
