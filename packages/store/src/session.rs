//! # Session record — who is logged in, in memory and on disk
//!
//! [`SessionStore`] is the single source of truth for the current identity.
//! It keeps the in-memory answer and the durable one in lockstep: every
//! mutation writes the [`Storage`] entries and the in-memory identity
//! together, never one without the other.
//!
//! ## Storage layout
//!
//! Two independent entries, not atomic as a pair:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`"token"`) | the opaque bearer credential, verbatim |
//! | [`USER_KEY`] (`"user"`) | the [`UserInfo`] identity record as JSON |
//!
//! ## Operations
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`restore`](SessionStore::restore) | Read both entries on process start. Both present and parseable ⇒ that identity; anything else ⇒ unauthenticated. No network validation — a stale credential is only discovered on the next failed call. |
//! | [`establish`](SessionStore::establish) | Persist a freshly issued credential + identity, then set the in-memory identity. |
//! | [`clear`](SessionStore::clear) | Drop both entries and the in-memory identity. Purely local, unconditional, idempotent. |
//! | [`current_user`](SessionStore::current_user) | The in-memory identity. |
//! | [`token`](SessionStore::token) | The credential, read from storage — not from a cached copy — so a clone handed to the HTTP client reflects a login or logout performed through any other store over the same storage. |
//!
//! A malformed identity record fails closed: `restore` reports
//! unauthenticated rather than erroring.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::models::UserInfo;
use crate::storage::Storage;

/// Storage key for the bearer credential.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the serialized identity record.
pub const USER_KEY: &str = "user";

/// A credential together with the identity it was issued for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserInfo,
}

/// Client-side session state backed by durable storage.
///
/// Clones share the in-memory identity, so the copy held by the HTTP
/// client as a credential provider and the copy held by the auth context
/// are the same session.
#[derive(Clone, Debug)]
pub struct SessionStore<S: Storage> {
    storage: S,
    current: Arc<Mutex<Option<UserInfo>>>,
}

impl<S: Storage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            current: Arc::new(Mutex::new(None)),
        }
    }

    /// Restore the session from storage, as on process start.
    ///
    /// Trust-on-read: whatever credential is found is assumed valid until
    /// the server rejects it.
    pub fn restore(&self) -> Option<UserInfo> {
        let restored = self.read_session().map(|s| s.user);
        *self.current.lock().unwrap() = restored.clone();
        restored
    }

    /// Persist a freshly issued session: storage entries first, then the
    /// in-memory identity.
    pub fn establish(&self, token: &str, user: UserInfo) {
        self.storage.set(TOKEN_KEY, token);
        let record = serde_json::to_string(&user).unwrap_or_default();
        self.storage.set(USER_KEY, &record);
        *self.current.lock().unwrap() = Some(user);
    }

    /// Drop the session locally. No server round-trip; calling this with no
    /// session is a no-op.
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        *self.current.lock().unwrap() = None;
    }

    /// The in-memory identity, if logged in.
    pub fn current_user(&self) -> Option<UserInfo> {
        self.current.lock().unwrap().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.lock().unwrap().is_some()
    }

    /// The bearer credential, read from durable storage at call time.
    ///
    /// An empty entry counts as absent.
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// The full session record, when both halves are present and parseable.
    pub fn session(&self) -> Option<Session> {
        self.read_session()
    }

    fn read_session(&self) -> Option<Session> {
        let token = self.token()?;
        let record = self.storage.get(USER_KEY)?;
        let user: UserInfo = serde_json::from_str(&record).ok()?;
        Some(Session { token, user })
    }
}
