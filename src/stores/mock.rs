//! Mock store for testing.
//!
//! Keeps entries and links in memory and supports error injection, so the
//! import pipeline can be exercised without spawning `gopass`.

use crate::*;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Mock store for testing.
///
/// # Example
///
/// ```
/// use pif2pass::stores::mock::MockStore;
/// use pif2pass::{Pif2PassError, Store};
///
/// #[tokio::main]
/// async fn main() -> pif2pass::Result<()> {
///     let mut store = MockStore::new();
///     store.init().await?;
///
///     store.insert("example.com/jdoe", "hunter2", false).await?;
///     assert_eq!(store.entry("example.com/jdoe").await.as_deref(), Some("hunter2"));
///
///     // Duplicates are refused unless forced.
///     let result = store.insert("example.com/jdoe", "other", false).await;
///     assert!(matches!(result, Err(Pif2PassError::AlreadyExists(_))));
///
///     Ok(())
/// }
/// ```
pub struct MockStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
    links: Arc<RwLock<HashMap<String, String>>>,
    inserted: Arc<RwLock<Vec<String>>>,

    /// Builds the error returned from every `insert()`, given the title
    pub insert_error: Option<fn(&str) -> Pif2PassError>,
    /// Builds the error returned from every `link()`, given the alias
    pub link_error: Option<fn(&str) -> Pif2PassError>,
    /// Titles whose insertion fails with a command error
    pub failing_titles: Vec<String>,
}

impl MockStore {
    /// Creates a new mock store with no entries.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            links: Arc::new(RwLock::new(HashMap::new())),
            inserted: Arc::new(RwLock::new(Vec::new())),
            insert_error: None,
            link_error: None,
            failing_titles: Vec::new(),
        }
    }

    /// Pre-populates the store with an entry.
    pub async fn set_entry(&self, title: impl Into<String>, password: impl Into<String>) {
        let mut entries = self.entries.write().await;
        entries.insert(title.into(), password.into());
    }

    /// Returns the stored password of an entry.
    pub async fn entry(&self, title: &str) -> Option<String> {
        self.entries.read().await.get(title).cloned()
    }

    /// Returns the target title of an alias link.
    pub async fn link_target(&self, alias: &str) -> Option<String> {
        self.links.read().await.get(alias).cloned()
    }

    /// Number of stored entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if no entries are stored.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Titles in the order they were successfully inserted.
    pub async fn insertion_order(&self) -> Vec<String> {
        self.inserted.read().await.clone()
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MockStore {
    fn name(&self) -> &str {
        "mock"
    }

    async fn init(&mut self) -> Result<()> {
        Ok(())
    }

    async fn insert(&self, title: &str, password: &str, force: bool) -> Result<()> {
        if let Some(make_error) = self.insert_error {
            return Err(make_error(title));
        }

        if self.failing_titles.iter().any(|t| t == title) {
            return Err(Pif2PassError::CommandFailed(format!(
                "mock insert failed for {}",
                title
            )));
        }

        let mut entries = self.entries.write().await;
        if entries.contains_key(title) && !force {
            return Err(Pif2PassError::AlreadyExists(title.to_string()));
        }

        entries.insert(title.to_string(), password.to_string());
        self.inserted.write().await.push(title.to_string());
        Ok(())
    }

    fn entry_path(&self, title: &str) -> PathBuf {
        PathBuf::from(title)
    }

    async fn link(&self, alias: &str, target: &str, force: bool) -> Result<()> {
        if let Some(make_error) = self.link_error {
            return Err(make_error(alias));
        }

        let mut entries = self.entries.write().await;
        if entries.contains_key(alias) {
            if !force {
                return Err(Pif2PassError::AlreadyExists(alias.to_string()));
            }
            entries.remove(alias);
        }

        let mut links = self.links.write().await;
        links.insert(alias.to_string(), target.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_store_insert_and_get() {
        let mut store = MockStore::new();
        store.init().await.unwrap();

        store.insert("example.com", "hunter2", false).await.unwrap();

        assert_eq!(store.entry("example.com").await.as_deref(), Some("hunter2"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_mock_store_force_overwrites() {
        let store = MockStore::new();
        store.set_entry("example.com", "original").await;

        let result = store.insert("example.com", "updated", false).await;
        assert!(matches!(result, Err(Pif2PassError::AlreadyExists(_))));

        store.insert("example.com", "updated", true).await.unwrap();
        assert_eq!(store.entry("example.com").await.as_deref(), Some("updated"));
    }

    #[tokio::test]
    async fn test_mock_store_links() {
        let store = MockStore::new();
        store.link("example.org/jdoe", "example.com/jdoe", false).await.unwrap();

        assert_eq!(
            store.link_target("example.org/jdoe").await.as_deref(),
            Some("example.com/jdoe")
        );
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_mock_store_link_over_entry_needs_force() {
        let store = MockStore::new();
        store.set_entry("example.org/jdoe", "original").await;

        let result = store.link("example.org/jdoe", "example.com/jdoe", false).await;
        assert!(matches!(result, Err(Pif2PassError::AlreadyExists(_))));
        assert_eq!(store.entry("example.org/jdoe").await.as_deref(), Some("original"));

        store.link("example.org/jdoe", "example.com/jdoe", true).await.unwrap();
        assert!(store.entry("example.org/jdoe").await.is_none());
        assert_eq!(
            store.link_target("example.org/jdoe").await.as_deref(),
            Some("example.com/jdoe")
        );
    }

    #[tokio::test]
    async fn test_error_injection() {
        let mut store = MockStore::new();
        store.insert_error = Some(|title| Pif2PassError::AlreadyExists(title.to_string()));
        store.link_error = Some(|_| Pif2PassError::NotSupported("links".to_string()));

        let result = store.insert("example.com", "pw", false).await;
        assert!(matches!(result, Err(Pif2PassError::AlreadyExists(ref t)) if t == "example.com"));

        let result = store.link("a", "b", false).await;
        assert!(matches!(result, Err(Pif2PassError::NotSupported(_))));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_failing_titles() {
        let mut store = MockStore::new();
        store.failing_titles = vec!["bad.example".to_string()];

        assert!(store.insert("bad.example", "pw", false).await.is_err());
        store.insert("good.example", "pw", false).await.unwrap();
        assert_eq!(store.insertion_order().await, vec!["good.example".to_string()]);
    }
}
