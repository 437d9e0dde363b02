//! pif2pass - import 1Password exports into a pass/gopass password store.
//!
//! A `.1pif` export is turned into store entries named the way Browserpass
//! looks them up: `<domain>/<username>`. Logins that cover several domains
//! get one real entry plus a symbolic link per extra domain.
//!
//! # Pipeline
//!
//! 1. [`normalize`] repairs the export's record separators into a JSON array.
//! 2. [`extract`] keeps website logins and derives titles, usernames and
//!    aliases ([`domain`] turns URLs into titles).
//! 3. [`importer`] writes each [`Credential`] through a [`Store`].
//!
//! Steps 1 and 2 are pure and need no configuration.
//!
//! # Quick Start
//!
//! ```no_run
//! use pif2pass::importer::{ImportOptions, Importer};
//! use pif2pass::stores::pass::PassStore;
//! use pif2pass::{Config, Store};
//!
//! #[tokio::main]
//! async fn main() -> pif2pass::Result<()> {
//!     let credentials = pif2pass::read_export("export.1pif")?;
//!
//!     let config = Config::default();
//!     let mut store = PassStore::new(&config);
//!     store.init().await?;
//!
//!     let report = Importer::new(&store, ImportOptions::from(&config))
//!         .import(&credentials, |outcome| println!("{}", outcome.title()))
//!         .await;
//!     println!("{} imported, {} failed", report.imported.len(), report.failed.len());
//!     Ok(())
//! }
//! ```

pub mod command;
pub mod config;
pub mod credential;
pub mod domain;
pub mod error;
pub mod extract;
pub mod importer;
pub mod normalize;
pub mod record;
pub mod store;
pub mod stores;
pub mod validation;

pub use config::Config;
pub use credential::Credential;
pub use error::{Pif2PassError, Result};
pub use store::Store;

use std::path::Path;

/// File extension of 1Password interchange exports.
pub const EXPORT_EXTENSION: &str = "1pif";

/// Checks that `path` has the `.1pif` extension (case-insensitive).
///
/// # Errors
///
/// Returns [`Pif2PassError::UnsupportedFormat`] otherwise.
pub fn check_export_path(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let supported = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(EXPORT_EXTENSION));

    if supported {
        Ok(())
    } else {
        Err(Pif2PassError::UnsupportedFormat(path.display().to_string()))
    }
}

/// Normalizes and extracts credentials from export text.
pub fn parse_export(raw: &str) -> Result<Vec<Credential>> {
    let document = normalize::normalize(raw)?;
    extract::extract(&document)
}

/// Reads a `.1pif` file and extracts its credentials.
///
/// # Errors
///
/// - [`Pif2PassError::UnsupportedFormat`]: wrong extension
/// - [`Pif2PassError::Io`]: the file cannot be read
/// - [`Pif2PassError::Json`], [`Pif2PassError::InvalidUrl`]: the export is malformed
pub fn read_export(path: impl AsRef<Path>) -> Result<Vec<Credential>> {
    let path = path.as_ref();
    check_export_path(path)?;

    let raw = std::fs::read_to_string(path)?;
    parse_export(&raw)
}
