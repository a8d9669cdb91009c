//! Durable key-value storage backing the plan store.
//!
//! The plan store keeps its whole collection in a single named slot, the same
//! way a browser keeps it in one `localStorage` entry. Any type implementing
//! [`KeyValueStore`] can serve as that storage:
//!
//! - [`SqliteStore`]: a `kv` table in a SQLite file, for durable use
//! - [`MemoryStore`]: a shared in-process map with an optional byte quota,
//!   for tests and ephemeral sessions

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::Result;

/// Slot name used when none is configured.
pub const DEFAULT_SLOT: &str = "wanderlust_plans";

/// String-keyed, string-valued storage that survives a reload.
pub trait KeyValueStore: Send {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }}
