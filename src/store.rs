//! Store trait definition for password store integrations.
//!
//! This module defines the [`Store`] trait the importer writes through. The
//! import pipeline never spawns processes or touches the filesystem itself;
//! everything goes through this capability so it can be replaced by
//! [`MockStore`](crate::stores::mock::MockStore) in tests.

use crate::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Store represents a destination password store.
///
/// All implementations must be `Send + Sync` so the importer can drive
/// several insertions concurrently.
///
/// # Example
///
/// ```no_run
/// use pif2pass::{Config, Store};
/// use pif2pass::stores::pass::PassStore;
///
/// #[tokio::main]
/// async fn main() -> pif2pass::Result<()> {
///     let mut store = PassStore::new(&Config::default());
///     store.init().await?;
///
///     store.insert("example.com/jdoe", "hunter2", false).await?;
///     store.link("example.org/jdoe", "example.com/jdoe", false).await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait Store: Send + Sync {
    /// Returns the store name (e.g., "pass", "mock").
    fn name(&self) -> &str;

    /// Initializes the store.
    ///
    /// # Errors
    ///
    /// - [`Pif2PassError::StoreNotInstalled`](crate::Pif2PassError::StoreNotInstalled):
    ///   the insert command is not available
    /// - [`Pif2PassError::StoreNotInitialized`](crate::Pif2PassError::StoreNotInitialized):
    ///   the store directory does not exist
    async fn init(&mut self) -> Result<()>;

    /// Inserts an entry whose content is `password`.
    ///
    /// With `force` an existing entry is overwritten.
    ///
    /// # Errors
    ///
    /// - [`Pif2PassError::InvalidTitle`](crate::Pif2PassError::InvalidTitle):
    ///   title is not a usable store path
    /// - [`Pif2PassError::AlreadyExists`](crate::Pif2PassError::AlreadyExists) or
    ///   [`Pif2PassError::CommandFailed`](crate::Pif2PassError::CommandFailed):
    ///   the store refused the entry
    async fn insert(&self, title: &str, password: &str, force: bool) -> Result<()>;

    /// Returns where the entry `title` lives on disk.
    fn entry_path(&self, title: &str) -> PathBuf;

    /// Makes `alias` resolve to the entry `target`.
    ///
    /// An existing link at `alias` is always replaced. An existing entry is
    /// only replaced with `force`.
    ///
    /// # Errors
    ///
    /// - [`Pif2PassError::AlreadyExists`](crate::Pif2PassError::AlreadyExists):
    ///   an entry already lives at `alias` and `force` is false
    /// - [`Pif2PassError::InvalidTitle`](crate::Pif2PassError::InvalidTitle):
    ///   either title is not a usable store path
    /// - [`Pif2PassError::NotSupported`](crate::Pif2PassError::NotSupported):
    ///   the platform has no symbolic links
    async fn link(&self, alias: &str, target: &str, force: bool) -> Result<()>;
}
