//! Writing extracted credentials into a [`Store`].

use crate::{Config, Credential, Pif2PassError, Store};
use futures::stream::{self, StreamExt};
use tracing::{info, warn};

/// Guidance printed after a run with failures.
pub const FORCE_HINT: &str = "Check the errors. Make sure these passwords do not already exist. \
If you're sure you want to overwrite them with the new import, try again with --force.";

/// Options for an import run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOptions {
    /// Overwrite existing entries
    pub force: bool,
    /// Maximum insertions in flight; 1 keeps document order
    pub concurrency: usize,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            force: false,
            concurrency: 1,
        }
    }
}

impl From<&Config> for ImportOptions {
    fn from(config: &Config) -> Self {
        Self {
            force: config.force,
            concurrency: config.effective_concurrency(),
        }
    }
}

/// Result of importing one credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Entry inserted and all alias links created
    Imported {
        /// Entry title
        title: String,
    },
    /// Insertion or an alias link failed
    Failed {
        /// Entry title
        title: String,
        /// Error message
        reason: String,
    },
}

impl Outcome {
    /// Title of the credential this outcome belongs to.
    pub fn title(&self) -> &str {
        match self {
            Self::Imported { title } | Self::Failed { title, .. } => title,
        }
    }

    /// Returns true if the credential was imported.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Imported { .. })
    }
}

/// Summary of an import run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Titles imported, in completion order
    pub imported: Vec<String>,
    /// Titles that failed, in completion order
    pub failed: Vec<String>,
}

impl ImportReport {
    /// Returns true if any credential failed.
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// One-line summary of failed titles, or `None` if nothing failed.
    ///
    /// ```
    /// use pif2pass::importer::ImportReport;
    ///
    /// let report = ImportReport {
    ///     imported: vec![],
    ///     failed: vec!["a.com".to_string(), "b.com/jdoe".to_string()],
    /// };
    /// assert_eq!(report.failure_summary().as_deref(), Some("Failed to import a.com, b.com/jdoe"));
    /// ```
    pub fn failure_summary(&self) -> Option<String> {
        if self.failed.is_empty() {
            None
        } else {
            Some(format!("Failed to import {}", self.failed.join(", ")))
        }
    }
}

/// Inserts credentials into a store and links their aliases.
///
/// A failed credential is recorded and the run continues with the next one.
pub struct Importer<'a> {
    store: &'a dyn Store,
    options: ImportOptions,
}

impl<'a> Importer<'a> {
    /// Creates an importer writing to `store`.
    pub fn new(store: &'a dyn Store, options: ImportOptions) -> Self {
        Self { store, options }
    }

    /// Imports every credential that has a password.
    ///
    /// `on_outcome` is called as each credential finishes. With a
    /// concurrency of 1 that is document order; otherwise it is completion
    /// order.
    pub async fn import<F>(&self, credentials: &[Credential], mut on_outcome: F) -> ImportReport
    where
        F: FnMut(&Outcome),
    {
        let mut report = ImportReport::default();

        let mut outcomes = stream::iter(credentials.iter().filter(|c| !c.password.is_empty()))
            .map(|credential| self.import_one(credential))
            .buffer_unordered(self.options.concurrency.max(1));

        while let Some(outcome) = outcomes.next().await {
            on_outcome(&outcome);
            match outcome {
                Outcome::Imported { title } => report.imported.push(title),
                Outcome::Failed { title, .. } => report.failed.push(title),
            }
        }

        report
    }

    async fn import_one(&self, credential: &Credential) -> Outcome {
        let title = &credential.title;

        if let Err(e) = self
            .store
            .insert(title, &credential.password, self.options.force)
            .await
        {
            return self.failed(title, Pif2PassError::store_op(self.store.name(), "insert", title, e));
        }

        for alias in &credential.aliases {
            let link = credential.alias_title(alias);
            if let Err(e) = self.store.link(&link, title, self.options.force).await {
                return self.failed(title, Pif2PassError::store_op(self.store.name(), "link", link, e));
            }
        }

        info!(title = %title, aliases = credential.aliases.len(), "imported");
        Outcome::Imported {
            title: title.clone(),
        }
    }

    fn failed(&self, title: &str, err: Pif2PassError) -> Outcome {
        warn!(title, error = %err, "import failed");
        Outcome::Failed {
            title: title.to_string(),
            reason: err.to_string(),
        }
    }
}
