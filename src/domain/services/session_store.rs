#[cfg(test)]
#[path = "session_store_test.rs"]
mod tests;

use std::fs;
use std::path;
use std::sync::Mutex;

use anyhow::Result;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Session;
use crate::domain::models::UserProfile;

/// Single source of truth for "am I authenticated" and "who am I". The
/// session survives restarts through a JSON file under a fixed path; every
/// other component reads authentication state through this store rather
/// than re-deriving it from storage.
pub struct SessionStore {
    pub file_path: path::PathBuf,
    cache: Mutex<Session>,
}

impl Default for SessionStore {
    fn default() -> SessionStore {
        return SessionStore::new(path::PathBuf::from(Config::get(ConfigKey::SessionFile)));
    }
}

impl SessionStore {
    pub fn new(file_path: path::PathBuf) -> SessionStore {
        let session = SessionStore::read(&file_path);

        return SessionStore {
            file_path,
            cache: Mutex::new(session),
        };
    }

    fn read(file_path: &path::Path) -> Session {
        if !file_path.exists() {
            return Session::default();
        }

        let payload = match fs::read_to_string(file_path) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(error = ?err, "Unable to read the persisted session");
                return Session::default();
            }
        };

        return serde_json::from_str::<Session>(&payload).unwrap_or_else(|err| {
            tracing::warn!(error = ?err, "Persisted session is corrupt, starting unauthenticated");
            return Session::default();
        });
    }

    fn persist(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let payload = serde_json::to_string(session)?;
        fs::write(&self.file_path, payload)?;

        return Ok(());
    }

    pub fn credential(&self) -> Option<String> {
        return self.cache.lock().unwrap().credential.clone();
    }

    pub fn set_credential(&self, token: &str) -> Result<()> {
        let mut session = self.cache.lock().unwrap();
        session.credential = Some(token.to_string());

        return self.persist(&session);
    }

    pub fn identity(&self) -> Option<UserProfile> {
        return self.cache.lock().unwrap().identity.clone();
    }

    pub fn set_identity(&self, profile: UserProfile) -> Result<()> {
        let mut session = self.cache.lock().unwrap();
        session.identity = Some(profile);

        return self.persist(&session);
    }

    /// Removes the credential and the cached identity together. Idempotent.
    pub fn clear(&self) -> Result<()> {
        let mut session = self.cache.lock().unwrap();
        *session = Session::default();

        if !self.file_path.exists() {
            return Ok(());
        }

        fs::remove_file(&self.file_path)?;

        return Ok(());
    }

    pub fn is_authenticated(&self) -> bool {
        return self.credential().is_some();
    }
}
