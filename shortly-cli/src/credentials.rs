use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use directories::BaseDirs;
use shortly_shared::{credentials::CredentialStore, models::AuthTokens};

/// JWT pair persisted as a JSON document on disk, mode 0600.
///
/// The CLI counterpart of the browser's local-storage token slots.
#[derive(Debug, Clone)]
pub struct FileCredentials {
    path: PathBuf,
}

impl FileCredentials {
    /// Store backed by an explicit path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the conventional location: `$SHORTLY_TOKENS` when set, else
    /// `tokens.json` under the user's Shortly config directory.
    pub fn load_default() -> Self {
        Self::at(default_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the pair to disk, creating the parent directory as needed.
    pub fn persist(&self, tokens: &AuthTokens) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create token directory {}", parent.display())
            })?;
        }

        let body = serde_json::to_string_pretty(tokens)?;
        fs::write(&self.path, body)
            .with_context(|| format!("failed to write tokens at {}", self.path.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))
                .context("failed to set token file permissions")?;
        }
        Ok(())
    }

    /// Delete the token file. Returns whether one existed.
    pub fn remove(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path)
            .with_context(|| format!("failed to remove tokens at {}", self.path.display()))?;
        Ok(true)
    }

    fn read(&self) -> Option<AuthTokens> {
        let contents = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&contents).ok()
    }
}

fn default_path() -> PathBuf {
    if let Some(path) = std::env::var_os("SHORTLY_TOKENS") {
        return PathBuf::from(path);
    }
    BaseDirs::new()
        .map(|dirs| dirs.config_dir().join("shortly").join("tokens.json"))
        .unwrap_or_else(|| PathBuf::from("./tokens.json"))
}

impl CredentialStore for FileCredentials {
    fn tokens(&self) -> Option<AuthTokens> {
        self.read()
    }

    fn store(&self, tokens: &AuthTokens) {
        if let Err(err) = self.persist(tokens) {
            tracing::warn!(%err, "failed to persist tokens");
        }
    }

    fn clear(&self) {
        if let Err(err) = self.remove() {
            tracing::warn!(%err, "failed to remove tokens");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> AuthTokens {
        AuthTokens {
            access: "access-token".to_string(),
            refresh: "refresh-token".to_string(),
        }
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentials::at(dir.path().join("tokens.json"));

        assert!(store.tokens().is_none());
        store.persist(&tokens()).unwrap();
        assert_eq!(store.tokens(), Some(tokens()));
    }

    #[test]
    fn test_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentials::at(dir.path().join("nested").join("tokens.json"));

        store.persist(&tokens()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_clear_removes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentials::at(dir.path().join("tokens.json"));

        store.persist(&tokens()).unwrap();
        store.clear();
        assert!(store.tokens().is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_remove_reports_whether_a_file_existed() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentials::at(dir.path().join("tokens.json"));

        assert!(!store.remove().unwrap());
        store.persist(&tokens()).unwrap();
        assert!(store.remove().unwrap());
    }

    #[test]
    fn test_corrupt_file_reads_as_no_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.json");
        fs::write(&path, "not json").unwrap();

        let store = FileCredentials::at(path);
        assert!(store.tokens().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_token_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentials::at(dir.path().join("tokens.json"));
        store.persist(&tokens()).unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
