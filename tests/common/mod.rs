//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub const SEPARATOR: &str = "***5642bee8-a5ff-11dc-8314-0800200c9a66***";

/// Five records: three importable logins, a secure note and a login
/// without a password.
pub fn sample_records() -> Vec<&'static str> {
    vec![
        r#"{"uuid":"1","typeName":"webforms.WebForm","title":"GitHub","secureContents":{"fields":[{"designation":"username","name":"login","value":"octocat"},{"designation":"password","name":"password","value":"hunter2"}],"URLs":[{"label":"website","url":"https://github.com/login"},{"url":"https://gist.github.com/"}]}}"#,
        r#"{"uuid":"2","typeName":"webforms.WebForm","title":"Example","secureContents":{"fields":[{"designation":"username","value":"jdoe"},{"designation":"password","value":"s3cret"}],"URLs":[{"url":"https://login.example.com/"},{"url":"https://www.example.org/signin"}]}}"#,
        r#"{"uuid":"3","typeName":"securenotes.SecureNote","title":"Wifi","secureContents":{"notesPlain":"abc"}}"#,
        r#"{"uuid":"4","typeName":"webforms.WebForm","title":"Router","secureContents":{"fields":[{"designation":"password","value":"admin"}]}}"#,
        r#"{"uuid":"5","typeName":"webforms.WebForm","title":"NoPassword","secureContents":{"fields":[{"designation":"username","value":"ghost"}],"URLs":[{"url":"https://ghost.example.net/"}]}}"#,
    ]
}

/// Joins records the way 1Password writes them.
pub fn export_text(records: &[&str]) -> String {
    records
        .iter()
        .map(|r| format!("{}\n{}\n", r, SEPARATOR))
        .collect()
}

/// Writes the sample export into `dir` and returns its path.
pub fn write_sample_export(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, export_text(&sample_records())).unwrap();
    path
}

/// Writes an executable shell script standing in for `gopass`.
///
/// The succeeding variant stores stdin at `$PASSWORD_STORE_DIR/<title>.gpg`.
#[cfg(unix)]
pub fn write_fake_insert_command(dir: &Path, succeed: bool) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = if succeed {
        "#!/bin/sh\nfor title; do :; done\nmkdir -p \"$PASSWORD_STORE_DIR/$(dirname \"$title\")\"\ncat > \"$PASSWORD_STORE_DIR/$title.gpg\"\n"
    } else {
        "#!/bin/sh\ncat > /dev/null\necho \"An entry already exists\" >&2\nexit 1\n"
    };

    let path = dir.join(if succeed { "fake-gopass" } else { "failing-gopass" });
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}
