//! Session flag storage.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session storage error: {0}")]
    Storage(String),

    #[error("No config directory available")]
    NoConfigDir,
}

/// Authentication state provider.
///
/// Read once at startup; mutated only through explicit login/logout.
pub trait SessionStore {
    fn is_authenticated(&self) -> bool;

    /// Mock login: always succeeds and persists the flag.
    ///
    /// # Errors
    ///
    /// Fails only when the flag cannot be written to disk.
    fn login(&mut self) -> Result<(), SessionError>;

    /// Clear the flag.
    ///
    /// # Errors
    ///
    /// Fails only when the flag cannot be written to disk.
    fn logout(&mut self) -> Result<(), SessionError>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFlag {
    is_authenticated: bool,
}

/// File-backed session flag under the user config dir.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    flag: SessionFlag,
}

impl FileSessionStore {
    /// Open the store at the default location, reading any persisted flag.
    ///
    /// # Errors
    ///
    /// Fails when no user config directory exists or it cannot be created.
    pub fn open() -> Result<Self, SessionError> {
        let dir = dirs::config_dir()
            .ok_or(SessionError::NoConfigDir)?
            .join("soulsurf");
        Self::open_at(dir.join("session.json"))
    }

    /// Open the store at an explicit path (tests use a temp dir).
    ///
    /// A missing or unreadable file is treated as logged out, matching the
    /// "absent flag" startup behavior.
    ///
    /// # Errors
    ///
    /// Fails when the parent directory cannot be created.
    pub fn open_at(path: PathBuf) -> Result<Self, SessionError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| SessionError::Storage(e.to_string()))?;
        }
        let flag = Self::read_flag(&path);
        Ok(Self { path, flag })
    }

    fn read_flag(path: &Path) -> SessionFlag {
        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Ignoring corrupt session file: {}", e);
                SessionFlag::default()
            }),
            Err(_) => SessionFlag::default(),
        }
    }

    fn write_flag(&self) -> Result<(), SessionError> {
        let contents = serde_json::to_string(&self.flag)
            .map_err(|e| SessionError::Storage(e.to_string()))?;
        fs::write(&self.path, contents).map_err(|e| SessionError::Storage(e.to_string()))
    }
}

impl SessionStore for FileSessionStore {
    fn is_authenticated(&self) -> bool {
        self.flag.is_authenticated
    }

    fn login(&mut self) -> Result<(), SessionError> {
        self.flag.is_authenticated = true;
        self.write_flag()?;
        tracing::info!("Session flag set");
        Ok(())
    }

    fn logout(&mut self) -> Result<(), SessionError> {
        self.flag.is_authenticated = false;
        self.write_flag()?;
        tracing::info!("Session flag cleared");
        Ok(())
    }
}
