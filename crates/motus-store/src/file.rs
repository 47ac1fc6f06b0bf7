//! Filesystem-backed credential store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use motus_core::error::StoreError;
use motus_core::session::{AuthToken, UserProfile};
use motus_core::store::CredentialStore;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Token entry file name.
const TOKEN_FILE: &str = "token";

/// User profile entry file name.
const USER_FILE: &str = "user.json";

/// A credential store backed by two files in a single directory.
///
/// The token is stored raw; the profile is stored as JSON. The two
/// entries are independent: clearing one leaves the other intact.
/// The directory is created lazily on the first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given directory.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Returns the store directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE)
    }

    fn user_path(&self) -> PathBuf {
        self.dir.join(USER_FILE)
    }

    fn ensure_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    fn remove_entry(path: &Path) -> Result<(), StoreError> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl CredentialStore for FileStore {
    fn token(&self) -> Option<AuthToken> {
        match fs::read_to_string(self.token_path()) {
            Ok(raw) => {
                let token = raw.trim_end();
                if token.is_empty() {
                    None
                } else {
                    Some(AuthToken::new(token))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!(error = %e, "Failed to read token entry");
                None
            }
        }
    }

    fn set_token(&self, token: &AuthToken) -> Result<(), StoreError> {
        self.ensure_dir()?;
        let path = self.token_path();
        fs::write(&path, token.as_str())?;

        // Set restrictive permissions (Unix only)
        #[cfg(unix)]
        {
            let mut perms = fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&path, perms)?;
        }

        debug!(path = %path.display(), "Stored token");
        Ok(())
    }

    fn clear_token(&self) -> Result<(), StoreError> {
        Self::remove_entry(&self.token_path())
    }

    fn user(&self) -> Option<UserProfile> {
        let json = match fs::read_to_string(self.user_path()) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(error = %e, "Failed to read user entry");
                return None;
            }
        };

        match serde_json::from_str(&json) {
            Ok(user) => Some(user),
            Err(e) => {
                // Corrupt profile reads as absent; the token entry is
                // independent and keeps the session authenticated.
                warn!(error = %e, "Stored user profile is not valid JSON");
                None
            }
        }
    }

    fn set_user(&self, user: &UserProfile) -> Result<(), StoreError> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(user)?;
        fs::write(self.user_path(), json)?;
        Ok(())
    }

    fn clear_user(&self) -> Result<(), StoreError> {
        Self::remove_entry(&self.user_path())
    }
}
