//! pass/gopass store implementation.

use crate::command::{check_command_exists, run_command_with_stdin};
use crate::validation::validate_title;
use crate::{Config, Pif2PassError, Result, Store};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Store backed by `gopass` or `pass` and a store directory on disk.
pub struct PassStore {
    store_dir: PathBuf,
    insert_command: String,
}

impl PassStore {
    /// Creates a new pass store from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            store_dir: config.store_dir.clone(),
            insert_command: config.insert_command.clone(),
        }
    }

    /// Arguments for `<cmd> insert`.
    ///
    /// `-m` (multiline) makes both gopass and pass read the secret from
    /// stdin until EOF instead of prompting twice.
    fn insert_args<'a>(title: &'a str, force: bool) -> Vec<&'a str> {
        let mut args = vec!["insert"];
        if force {
            args.push("-f");
        }
        args.push("-m");
        args.push(title);
        args
    }
}

#[async_trait]
impl Store for PassStore {
    fn name(&self) -> &str {
        "pass"
    }

    async fn init(&mut self) -> Result<()> {
        if !check_command_exists(&self.insert_command).await? {
            return Err(Pif2PassError::StoreNotInstalled(format!(
                "{} command not found - install gopass or pass",
                self.insert_command
            )));
        }

        if !self.store_dir.is_dir() {
            return Err(Pif2PassError::StoreNotInitialized(format!(
                "{} (run: {} init)",
                self.store_dir.display(),
                self.insert_command
            )));
        }

        Ok(())
    }

    async fn insert(&self, title: &str, password: &str, force: bool) -> Result<()> {
        validate_title(title)?;

        let store_dir = self.store_dir.to_string_lossy();
        let payload = format!("{}\n", password);

        debug!(title, force, command = %self.insert_command, "inserting entry");
        run_command_with_stdin(
            &self.insert_command,
            &Self::insert_args(title, force),
            &[("PASSWORD_STORE_DIR", &*store_dir)],
            &payload,
        )
        .await
        .map_err(|e| match e {
            Pif2PassError::CommandFailed(msg) if msg.contains("already exists") => {
                Pif2PassError::AlreadyExists(title.to_string())
            }
            other => other,
        })?;

        Ok(())
    }

    fn entry_path(&self, title: &str) -> PathBuf {
        self.store_dir.join(format!("{}.gpg", title))
    }

    async fn link(&self, alias: &str, target: &str, force: bool) -> Result<()> {
        validate_title(alias)?;
        validate_title(target)?;

        let link_path = self.entry_path(alias);
        let target_path = self.entry_path(target);

        if let Some(parent) = link_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        match tokio::fs::symlink_metadata(&link_path).await {
            Ok(meta) if !meta.file_type().is_symlink() && !force => {
                return Err(Pif2PassError::AlreadyExists(alias.to_string()));
            }
            Ok(_) => tokio::fs::remove_file(&link_path).await?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        debug!(alias, target, "linking alias");
        symlink(&target_path, &link_path).await
    }
}

#[cfg(unix)]
async fn symlink(target: &Path, link: &Path) -> Result<()> {
    tokio::fs::symlink(target, link).await?;
    Ok(())
}

#[cfg(not(unix))]
async fn symlink(_target: &Path, link: &Path) -> Result<()> {
    Err(Pif2PassError::NotSupported(format!(
        "symbolic link {} requires a Unix platform",
        link.display()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_entry_path() {
        let config = Config::default().with_store_dir("/home/jdoe/.password-store");
        let store = PassStore::new(&config);

        assert_eq!(
            store.entry_path("example.com/jdoe"),
            PathBuf::from("/home/jdoe/.password-store/example.com/jdoe.gpg")
        );
    }

    #[test]
    fn test_insert_args() {
        assert_eq!(
            PassStore::insert_args("example.com", false),
            vec!["insert", "-m", "example.com"]
        );
        assert_eq!(
            PassStore::insert_args("example.com", true),
            vec!["insert", "-f", "-m", "example.com"]
        );
    }

    #[tokio::test]
    async fn test_init_missing_command() {
        let dir = tempdir().unwrap();
        let config = Config::default()
            .with_store_dir(dir.path())
            .with_insert_command("nonexistent-command-12345");
        let mut store = PassStore::new(&config);

        let result = store.init().await;
        assert!(matches!(result, Err(Pif2PassError::StoreNotInstalled(_))));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_init_missing_store_dir() {
        let dir = tempdir().unwrap();
        let config = Config::default()
            .with_store_dir(dir.path().join("missing"))
            .with_insert_command("/bin/sh");
        let mut store = PassStore::new(&config);

        let result = store.init().await;
        assert!(matches!(result, Err(Pif2PassError::StoreNotInitialized(_))));
    }

    #[tokio::test]
    async fn test_insert_rejects_invalid_title() {
        let config = Config::default().with_insert_command("/bin/true");
        let store = PassStore::new(&config);

        let result = store.insert("../escape", "pw", false).await;
        assert!(matches!(result, Err(Pif2PassError::InvalidTitle(_))));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_link_creates_and_replaces_symlink() {
        let dir = tempdir().unwrap();
        let config = Config::default().with_store_dir(dir.path());
        let store = PassStore::new(&config);

        store.link("example.org/jdoe", "example.com/jdoe", false).await.unwrap();

        let link = dir.path().join("example.org/jdoe.gpg");
        let target = std::fs::read_link(&link).unwrap();
        assert_eq!(target, dir.path().join("example.com/jdoe.gpg"));

        // Linking again replaces the existing link.
        store.link("example.org/jdoe", "example.net/jdoe", false).await.unwrap();
        let target = std::fs::read_link(&link).unwrap();
        assert_eq!(target, dir.path().join("example.net/jdoe.gpg"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_link_keeps_existing_entry_without_force() {
        let dir = tempdir().unwrap();
        let config = Config::default().with_store_dir(dir.path());
        let store = PassStore::new(&config);

        let entry = dir.path().join("example.org/jdoe.gpg");
        std::fs::create_dir_all(entry.parent().unwrap()).unwrap();
        std::fs::write(&entry, b"encrypted").unwrap();

        let result = store.link("example.org/jdoe", "example.com/jdoe", false).await;
        assert!(matches!(result, Err(Pif2PassError::AlreadyExists(ref t)) if t == "example.org/jdoe"));
        assert!(!std::fs::symlink_metadata(&entry).unwrap().file_type().is_symlink());
        assert_eq!(std::fs::read(&entry).unwrap(), b"encrypted");

        store.link("example.org/jdoe", "example.com/jdoe", true).await.unwrap();
        assert_eq!(
            std::fs::read_link(&entry).unwrap(),
            dir.path().join("example.com/jdoe.gpg")
        );
    }

    #[tokio::test]
    async fn test_link_rejects_invalid_alias() {
        let dir = tempdir().unwrap();
        let config = Config::default().with_store_dir(dir.path());
        let store = PassStore::new(&config);

        let result = store.link("/etc/passwd", "example.com", false).await;
        assert!(matches!(result, Err(Pif2PassError::InvalidTitle(_))));
    }
}
