//! # Durable key/value storage
//!
//! [`Storage`] is the seam between the session record and wherever it
//! actually lives: a directory of files on native platforms
//! ([`crate::FileStorage`]), a shared map in tests and for ephemeral
//! sessions ([`crate::MemoryStorage`]). Entries are independent — there is
//! no transaction spanning two keys, so callers that persist related values
//! (credential + identity) write them back to back and treat a half-present
//! pair as absent when reading.
//!
//! Access is synchronous and non-blocking. Reads fail closed (`None`);
//! writes are best-effort and never surface an error to the caller.

/// Synchronous string key/value storage.
pub trait Storage {
    /// Read the value stored under `key`, or `None` if absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
    /// Remove the entry under `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str);
}
