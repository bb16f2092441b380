//! Access gate module
//!
//! Verifies a submitted passcode against a reference SHA-256 digest and
//! tracks the authenticated flag behind a session-scoped persisted marker.
//! This is a cosmetic deterrent for draft content: one shared code, no
//! per-user identity, no rate limiting. Do not mistake it for real auth.

use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

use crate::constants::{DEFAULT_ACCESS_CODE, SESSION_KEY, SESSION_MARKER};

/// Errors surfaced by the gate
#[derive(Debug, Error)]
pub enum GateError {
    /// Empty or whitespace-only input, rejected before digesting
    #[error("access code must not be empty")]
    EmptyCode,
}

/// Errors surfaced by session stores
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("failed to read session marker: {0}")]
    Read(#[source] std::io::Error),
    #[error("failed to write session marker: {0}")]
    Write(#[source] std::io::Error),
    #[error("failed to remove session marker: {0}")]
    Remove(#[source] std::io::Error),
}

/// Session-scoped key/value marker storage
///
/// Mirrors browser sessionStorage: a single opaque marker under a fixed key,
/// nothing else is ever persisted.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionStoreError>;
    fn remove(&mut self, key: &str) -> Result<(), SessionStoreError>;
}

/// In-memory store; the session lasts exactly as long as the process
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: HashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SessionStoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Single-slot file store so a "session" can span CLI invocations
///
/// The file holds one `key=value` line; removing the marker deletes the file.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(SessionStoreError::Read(err)),
        };
        match contents.trim().split_once('=') {
            Some((stored_key, value)) if stored_key == key => Ok(Some(value.to_string())),
            _ => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(SessionStoreError::Write)?;
        }
        fs::write(&self.path, format!("{}={}\n", key, value)).map_err(SessionStoreError::Write)
    }

    fn remove(&mut self, key: &str) -> Result<(), SessionStoreError> {
        // Single-slot store: removing any key clears the file
        let _ = key;
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SessionStoreError::Remove(err)),
        }
    }
}

/// Hex-encoded SHA-256 digest of the exact input bytes
pub fn digest_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// The access gate: authenticated flag plus persisted session marker
///
/// Construct, then call [`AccessGate::initialize`] once at startup to compute
/// the reference digest and restore any persisted session. A login attempt
/// before initialization fails closed.
pub struct AccessGate<S: SessionStore> {
    store: S,
    access_code: String,
    reference_digest: Option<String>,
    is_authenticated: bool,
    is_loading: bool,
}

impl<S: SessionStore> AccessGate<S> {
    /// Gate over the built-in access code
    pub fn new(store: S) -> Self {
        Self::with_access_code(DEFAULT_ACCESS_CODE, store)
    }

    /// Gate over a caller-supplied access code
    pub fn with_access_code(access_code: impl Into<String>, store: S) -> Self {
        Self {
            store,
            access_code: access_code.into(),
            reference_digest: None,
            is_authenticated: false,
            is_loading: true,
        }
    }

    /// Compute the reference digest and restore a persisted session
    ///
    /// Restore is session continuity, not re-validation: a present marker is
    /// trusted without re-checking the passcode. Store errors only cost the
    /// restored session.
    pub async fn initialize(&mut self) {
        self.reference_digest = Some(digest_hex(&self.access_code));
        match self.store.get(SESSION_KEY) {
            Ok(Some(marker)) if marker == SESSION_MARKER => {
                debug!("session restored from persisted marker");
                self.is_authenticated = true;
            }
            Ok(_) => {}
            Err(err) => warn!("session restore failed: {}", err),
        }
        self.is_loading = false;
    }

    /// Verify a submitted code; on match, authenticate and persist the marker
    ///
    /// Returns `Ok(false)` for any mismatch, for attempts racing ahead of
    /// [`AccessGate::initialize`], and for marker persistence failures — the
    /// gate never leaves partial state behind a failed login.
    pub fn login(&mut self, code: &str) -> Result<bool, GateError> {
        if code.trim().is_empty() {
            return Err(GateError::EmptyCode);
        }
        let Some(reference) = self.reference_digest.as_deref() else {
            // Fail closed until the reference digest is ready
            return Ok(false);
        };
        if digest_hex(code) != reference {
            return Ok(false);
        }
        if let Err(err) = self.store.set(SESSION_KEY, SESSION_MARKER) {
            warn!("failed to persist session marker: {}", err);
            return Ok(false);
        }
        self.is_authenticated = true;
        Ok(true)
    }

    /// Clear the authenticated flag and remove the persisted marker
    pub fn logout(&mut self) {
        self.is_authenticated = false;
        if let Err(err) = self.store.remove(SESSION_KEY) {
            warn!("failed to remove session marker: {}", err);
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
