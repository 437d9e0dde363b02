//! Import configuration.
//!
//! Only the store writer and the binary read this. Normalization and
//! extraction take no configuration.

use std::path::{Path, PathBuf};

/// Default program used to insert entries.
pub const DEFAULT_INSERT_COMMAND: &str = "gopass";

/// Default number of concurrent insertions in parallel mode.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Configuration for an import run.
///
/// Use the builder pattern for ergonomic configuration:
///
/// ```
/// use pif2pass::Config;
///
/// let config = Config::default()
///     .with_store_dir("/tmp/store")
///     .with_insert_command("pass")
///     .with_force(true);
///
/// assert!(config.force);
/// assert_eq!(config.insert_command, "pass");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Password store directory (default: `~/.password-store`)
    pub store_dir: PathBuf,

    /// Program invoked as `<cmd> insert [-f] -m <title>` (default: `gopass`)
    pub insert_command: String,

    /// Overwrite existing entries
    pub force: bool,

    /// Insert several credentials concurrently
    pub parallel: bool,

    /// Upper bound on concurrent insertions when `parallel` is set
    pub concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_dir: default_store_dir(),
            insert_command: DEFAULT_INSERT_COMMAND.to_string(),
            force: false,
            parallel: false,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl Config {
    /// Sets the password store directory.
    pub fn with_store_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.store_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Sets the insert command.
    pub fn with_insert_command(mut self, command: impl Into<String>) -> Self {
        self.insert_command = command.into();
        self
    }

    /// Allows overwriting existing entries.
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Enables concurrent insertion with at most `concurrency` in flight.
    ///
    /// A concurrency of zero is treated as one.
    pub fn with_parallel(mut self, parallel: bool, concurrency: usize) -> Self {
        self.parallel = parallel;
        self.concurrency = concurrency.max(1);
        self
    }

    /// Number of insertions allowed in flight at once.
    pub fn effective_concurrency(&self) -> usize {
        if self.parallel {
            self.concurrency.max(1)
        } else {
            1
        }
    }
}

/// `~/.password-store`, falling back to `/tmp` when `HOME` is unset.
pub fn default_store_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".password-store")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = Config::default()
            .with_store_dir("/srv/store")
            .with_insert_command("pass")
            .with_force(true)
            .with_parallel(true, 8);

        assert_eq!(config.store_dir, PathBuf::from("/srv/store"));
        assert_eq!(config.insert_command, "pass");
        assert!(config.force);
        assert_eq!(config.effective_concurrency(), 8);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.insert_command, DEFAULT_INSERT_COMMAND);
        assert!(!config.force);
        assert!(!config.parallel);
        assert!(config.store_dir.ends_with(".password-store"));
        assert_eq!(config.effective_concurrency(), 1);
    }

    #[test]
    fn test_zero_concurrency_is_clamped() {
        let config = Config::default().with_parallel(true, 0);
        assert_eq!(config.effective_concurrency(), 1);
    }
}
