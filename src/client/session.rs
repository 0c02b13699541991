//! Client-side session state: the bearer token and the signed-in user.
//!
//! The session is an explicit object handed to whatever drives the client,
//! with load/save hooks around a storage path. Nothing reads or writes it
//! ambiently.

use crate::{error::Error, store::models::UserPublic};
use serde::{Deserialize, Serialize};
use std::{fs, io::ErrorKind, path::Path};
use tracing::debug;

#[derive(Serialize, Deserialize, Default, Clone)]
pub struct Session {
    token: Option<String>,
    user: Option<UserPublic>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a session from `path`. A missing file yields a signed-out
    /// session; a corrupt one is an error.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No session file at {}, starting signed out", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(Error::internal(format!(
                    "Failed to read session file: {e}"
                )))
            }
        };

        serde_json::from_str(&contents)
            .map_err(|e| Error::internal(format!("Failed to parse session file: {e}")))
    }

    /// Persist the session to `path`.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::internal(format!("Failed to serialize session: {e}")))?;

        fs::write(path, contents)
            .map_err(|e| Error::internal(format!("Failed to write session file: {e}")))
    }

    pub fn sign_in(&mut self, token: String, user: UserPublic) {
        self.token = Some(token);
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        self.token = None;
        self.user = None;
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn user(&self) -> Option<&UserPublic> {
        self.user.as_ref()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("user", &self.user)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ulid::Ulid;
    use uuid::Uuid;

    fn test_user() -> UserPublic {
        UserPublic {
            id: Uuid::new_v4(),
            username: "ada".to_string(),
            email: "ada@x.com".to_string(),
        }
    }

    fn temp_path() -> std::path::PathBuf {
        std::env::temp_dir().join(format!("stack-eleven-session-{}.json", Ulid::new()))
    }

    #[test]
    fn test_new_session_is_signed_out() {
        let session = Session::new();

        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_sign_in_and_out() {
        let mut session = Session::new();
        session.sign_in("token".to_string(), test_user());

        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("token"));
        assert_eq!(session.user().map(|u| u.username.as_str()), Some("ada"));

        session.sign_out();

        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = temp_path();
        let user = test_user();

        let mut session = Session::new();
        session.sign_in("token".to_string(), user.clone());
        session.save(&path).unwrap();

        let loaded = Session::load(&path).unwrap();
        assert_eq!(loaded.token(), Some("token"));
        assert_eq!(loaded.user(), Some(&user));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file_is_signed_out() {
        let session = Session::load(&temp_path()).unwrap();

        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_load_corrupt_file_fails() {
        let path = temp_path();
        std::fs::write(&path, "not json").unwrap();

        assert!(Session::load(&path).is_err());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_debug_redacts_token() {
        let mut session = Session::new();
        session.sign_in("super-secret-token".to_string(), test_user());

        let debug = format!("{session:?}");
        assert!(!debug.contains("super-secret-token"));
    }
}
