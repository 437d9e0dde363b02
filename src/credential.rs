//! Credential data structure produced by the extractor.

use serde::Serialize;

/// A login ready to be written to the password store.
///
/// `title` already carries the `/<username>` suffix when a username is set,
/// matching the `<domain>/<username>` layout Browserpass looks up.
/// `aliases` are further domain titles that should resolve to the same
/// entry; they are not username-suffixed.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credential {
    /// Entry title (store path without the `.gpg` extension)
    pub title: String,

    /// The secret
    #[serde(skip_serializing)]
    pub password: String,

    /// Login name, if the record had one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Additional domain titles, in first-seen order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl Credential {
    /// Creates a credential with no username or aliases.
    ///
    /// # Example
    ///
    /// ```
    /// use pif2pass::Credential;
    ///
    /// let cred = Credential::new("example.com", "hunter2")
    ///     .with_username("jdoe");
    /// assert_eq!(cred.title, "example.com/jdoe");
    /// ```
    pub fn new(title: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            password: password.into(),
            username: None,
            aliases: Vec::new(),
        }
    }

    /// Sets the alias titles.
    pub fn with_aliases(mut self, aliases: Vec<String>) -> Self {
        self.aliases = aliases;
        self
    }

    /// Sets the username and appends it to the title.
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        let username = username.into();
        self.title = format!("{}/{}", self.title, username);
        self.username = Some(username);
        self
    }

    /// Store path of an alias link, username-suffixed like the title.
    pub fn alias_title(&self, alias: &str) -> String {
        match &self.username {
            Some(username) => format!("{}/{}", alias, username),
            None => alias.to_string(),
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("title", &self.title)
            .field("password", &"<redacted>")
            .field("username", &self.username)
            .field("aliases", &self.aliases)
            .finish()
    }
}
