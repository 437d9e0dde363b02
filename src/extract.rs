//! Extraction of importable credentials from a normalized export.

use crate::domain::domain_title;
use crate::record::{Designations, Field, SourceRecord, UrlEntry};
use crate::{Credential, Result};
use serde_json::Value;
use tracing::{debug, warn};

/// Extracts credentials using the standard 1Password field designations.
///
/// See [`extract_with`].
pub fn extract(document: &[Value]) -> Result<Vec<Credential>> {
    extract_with(document, &Designations::default())
}

/// Extracts credentials from a normalized document.
///
/// Records are processed in document order and the output keeps that order.
/// Records that are not web forms, have no fields, or have no password are
/// skipped without error.
///
/// # Errors
///
/// Returns [`Pif2PassError::InvalidUrl`](crate::Pif2PassError::InvalidUrl) or
/// [`Pif2PassError::MissingHost`](crate::Pif2PassError::MissingHost) if a
/// login URL cannot be turned into a title. This aborts the whole extraction.
pub fn extract_with(document: &[Value], designations: &Designations) -> Result<Vec<Credential>> {
    let mut credentials = Vec::new();

    for (index, value) in document.iter().enumerate() {
        if value.get("typeName").and_then(Value::as_str) != Some(crate::record::WEB_FORM_TYPE) {
            continue;
        }

        let record: SourceRecord = match serde_json::from_value(value.clone()) {
            Ok(record) => record,
            Err(e) => {
                warn!(index, error = %e, "skipping unreadable web form record");
                continue;
            }
        };

        if let Some(credential) = credential_from_record(&record, designations)? {
            credentials.push(credential);
        } else {
            debug!(index, title = ?record.title, "skipping record without password");
        }
    }

    Ok(credentials)
}

/// Builds a credential from one record, or `None` if it is not importable.
pub fn credential_from_record(
    record: &SourceRecord,
    designations: &Designations,
) -> Result<Option<Credential>> {
    if !record.is_web_form() {
        return Ok(None);
    }

    let Some(contents) = record.secure_contents.as_ref() else {
        return Ok(None);
    };
    if contents.fields.is_none() {
        return Ok(None);
    }

    let Some(password) = contents.field(&designations.password).and_then(Field::text) else {
        return Ok(None);
    };

    let domains = distinct_domain_titles(contents.urls.as_deref().unwrap_or_default())?;
    let mut domains = domains.into_iter();

    let mut credential = match domains.next() {
        Some(title) => Credential::new(title, password).with_aliases(domains.collect()),
        None => Credential::new(record.title.clone().unwrap_or_default(), password),
    };

    if let Some(username) = contents.field(&designations.username).and_then(Field::text) {
        credential = credential.with_username(username);
    }

    Ok(Some(credential))
}

/// Domain titles of a URL list, deduplicated in first-occurrence order.
fn distinct_domain_titles(urls: &[UrlEntry]) -> Result<Vec<String>> {
    let mut titles: Vec<String> = Vec::new();

    for url in urls.iter().filter_map(|entry| entry.url.as_deref()) {
        let title = domain_title(url)?;
        if !titles.contains(&title) {
            titles.push(title);
        }
    }

    Ok(titles)
}
