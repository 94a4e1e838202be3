//! Session token storage.
//!
//! Presence of a token IS the authentication state. Nothing here validates
//! the token; the API client's interceptor clears it when the server rejects it.

use std::cell::RefCell;
use std::fmt;
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Opaque bearer credential returned by `/login`.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a raw token. Empty strings are not tokens.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

/// Durable token storage.
///
/// `set` and `clear` are the only writers. Writes replace the whole value.
pub trait SessionStore {
    fn get(&self) -> Option<SessionToken>;
    fn set(&self, token: SessionToken);
    fn clear(&self);

    fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}

/// In-memory store for tests, and for native systems without a data directory.
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    token: Rc<RefCell<Option<SessionToken>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: SessionToken) -> Self {
        let store = Self::new();
        store.set(token);
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<SessionToken> {
        self.token.borrow().clone()
    }

    fn set(&self, token: SessionToken) {
        *self.token.borrow_mut() = Some(token);
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

/// `localStorage`-backed store, scoped to the page origin.
#[cfg(target_arch = "wasm32")]
pub struct BrowserSessionStore {
    key: String,
}

#[cfg(target_arch = "wasm32")]
impl BrowserSessionStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!(error = ?e, "localStorage unavailable");
                None
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for BrowserSessionStore {
    fn get(&self) -> Option<SessionToken> {
        let raw = Self::storage()?.get_item(&self.key).ok().flatten()?;
        SessionToken::new(raw)
    }

    fn set(&self, token: SessionToken) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("Cannot persist session token: no storage");
            return;
        };
        if let Err(e) = storage.set_item(&self.key, token.as_str()) {
            tracing::warn!(error = ?e, "Failed to persist session token");
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(&self.key) {
                tracing::warn!(error = ?e, "Failed to remove session token");
            }
        }
    }
}

/// File-backed store for native (desktop) builds. One file per key.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/<key>` under the platform's per-user application directory.
    pub fn in_data_dir(key: &str) -> Option<Self> {
        let dirs = directories::ProjectDirs::from("com", "campaign-console", "campaign-console")?;
        Some(Self::new(dirs.data_dir().join(key)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SessionStore for FileSessionStore {
    fn get(&self) -> Option<SessionToken> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => SessionToken::new(raw.trim()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read session token");
                None
            }
        }
    }

    fn set(&self, token: SessionToken) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!(path = %parent.display(), error = %e, "Cannot create session directory");
                return;
            }
        }
        if let Err(e) = std::fs::write(&self.path, token.as_str()) {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to persist session token");
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to remove session token");
            }
        }
    }
}

/// Durable store for the current target under the given key.
pub fn default_store(key: &str) -> Rc<dyn SessionStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserSessionStore::new(key))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        match FileSessionStore::in_data_dir(key) {
            Some(store) => {
                tracing::debug!(path = %store.path().display(), "Session token stored on disk");
                Rc::new(store)
            }
            None => {
                tracing::warn!(key, "No data directory on this system, keeping session in memory");
                Rc::new(MemorySessionStore::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_rejected() {
        assert!(SessionToken::new("").is_none());
        assert!(SessionToken::new("  ").is_none());
        assert_eq!(SessionToken::new("abc").unwrap().as_str(), "abc");
    }

    #[test]
    fn test_debug_redacts_token() {
        let token = SessionToken::new("secret-jwt").unwrap();
        let printed = format!("{:?}", token);
        assert!(!printed.contains("secret-jwt"));
    }

    #[test]
    fn test_memory_store_set_get_clear() {
        let store = MemorySessionStore::new();
        assert!(!store.is_authenticated());

        store.set(SessionToken::new("t1").unwrap());
        assert_eq!(store.get().unwrap().as_str(), "t1");

        store.set(SessionToken::new("t2").unwrap());
        assert_eq!(store.get().unwrap().as_str(), "t2");

        store.clear();
        assert!(store.get().is_none());
    }

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn test_file_store_survives_new_instance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("token");

        FileSessionStore::new(&path).set(SessionToken::new("jwt-disk").unwrap());

        let reopened = FileSessionStore::new(&path);
        assert_eq!(reopened.get().unwrap().as_str(), "jwt-disk");

        reopened.clear();
        assert!(!FileSessionStore::new(&path).is_authenticated());
        // Clearing twice is not an error.
        reopened.clear();
    }

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn test_file_store_ignores_blank_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "  \n").unwrap();

        assert!(FileSessionStore::new(&path).get().is_none());
    }

    #[test]
    fn test_memory_store_clones_share_state() {
        let store = MemorySessionStore::new();
        let other = store.clone();
        store.set(SessionToken::new("shared").unwrap());
        assert!(other.is_authenticated());
        other.clear();
        assert!(!store.is_authenticated());
    }
}
