//! pass/gopass store.
//!
//! Entries are inserted through the `gopass` (or `pass`) command line and
//! alias links are created directly in the store directory, where each entry
//! is a GPG-encrypted `<title>.gpg` file.
//!
//! # Requirements
//!
//! - `gopass` or `pass` on `PATH` (or an explicit path to it)
//! - An initialized password store (`gopass init` / `pass init <gpg-id>`)
//!
//! # Example
//!
//! ```no_run
//! use pif2pass::{Config, Store};
//! use pif2pass::stores::pass::PassStore;
//!
//! #[tokio::main]
//! async fn main() -> pif2pass::Result<()> {
//!     let config = Config::default()
//!         .with_store_dir("/home/user/.password-store")
//!         .with_insert_command("pass");
//!
//!     let mut store = PassStore::new(&config);
//!     store.init().await?;
//!     store.insert("example.com/jdoe", "hunter2", false).await?;
//!
//!     Ok(())
//! }
//! ```

mod store;

pub use store::PassStore;
