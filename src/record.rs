//! Typed view of a single 1PIF export record.
//!
//! Only the attributes the extractor reads are modelled. Every attribute is
//! optional because non-login records carry very different shapes.

use serde::Deserialize;
use serde_json::Value;

/// Record type tag of a website login.
pub const WEB_FORM_TYPE: &str = "webforms.WebForm";

/// Field designation of the password field in a web form.
pub const PASSWORD_DESIGNATION: &str = "password";

/// Field designation of the username field in a web form.
pub const USERNAME_DESIGNATION: &str = "username";

/// One entry of the export.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SourceRecord {
    /// Record kind (e.g. `webforms.WebForm`, `securenotes.SecureNote`)
    pub type_name: Option<String>,

    /// Title shown in 1Password
    pub title: Option<String>,

    /// Payload holding fields and URLs
    pub secure_contents: Option<SecureContents>,
}

impl SourceRecord {
    /// Returns true if this record is a website login.
    pub fn is_web_form(&self) -> bool {
        self.type_name.as_deref() == Some(WEB_FORM_TYPE)
    }
}

/// The `secureContents` object of a record.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SecureContents {
    /// Form fields (username, password, checkboxes, ...)
    pub fields: Option<Vec<Field>>,

    /// Websites the login applies to
    #[serde(rename = "URLs")]
    pub urls: Option<Vec<UrlEntry>>,
}

impl SecureContents {
    /// Finds the first field with the given designation.
    pub fn field(&self, designation: &str) -> Option<&Field> {
        self.fields
            .as_deref()?
            .iter()
            .find(|f| f.designation.as_deref() == Some(designation))
    }
}

/// A single form field.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Field {
    /// Role of the field (`password`, `username`), absent for plain inputs
    pub designation: Option<String>,

    /// Field value. Kept loose because checkboxes and selects are not strings.
    pub value: Option<Value>,
}

impl Field {
    /// Returns the value if it is a non-empty string.
    pub fn text(&self) -> Option<&str> {
        self.value
            .as_ref()
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// One entry of the `URLs` list.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct UrlEntry {
    /// The URL text
    pub url: Option<String>,
}

/// The field designations identifying the password and username fields.
///
/// 1Password uses `password` and `username`; these are the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Designations {
    /// Designation of the password field
    pub password: String,
    /// Designation of the username field
    pub username: String,
}

impl Default for Designations {
    fn default() -> Self {
        Self {
            password: PASSWORD_DESIGNATION.to_string(),
            username: USERNAME_DESIGNATION.to_string(),
        }
    }
}
