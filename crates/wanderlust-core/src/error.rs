//! Error types for the plan store.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for every fallible plan store operation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG data directory could not be resolved
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// The backing store refused a write because it would exceed its quota
    #[error("Storage quota exceeded: {needed} bytes needed, {limit} bytes available")]
    QuotaExceeded { needed: usize, limit: usize },
    /// A mutation happened in memory but could not be written out
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// A write to durable storage failed after the in-memory state changed.
///
/// The change is still visible for the current session; callers should warn
/// that it may not survive a reload.
#[derive(Error, Debug)]
#[error("Failed to persist plans to slot '{slot}': {source}")]
pub struct PersistenceError {
    pub slot: String,
    #[source]
    pub source: Box<StoreError>,
}

impl PersistenceError {
    pub(crate) fn new(slot: impl Into<String>, source: StoreError) -> Self {
        Self {
            slot: slot.into(),
            source: Box::new(source),
        }
    }
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> StoreError {
        StoreError::Database {
            message: self.message,
            source,
        }
    }
}

impl StoreError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a configuration error from any displayable message.
    pub fn configuration(message: impl Into<String>) -> Self {
        StoreError::Configuration {
            message: message.into(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| StoreError::database(message).with_source(e))
    }
}

/// Result type alias for plan store operations
pub type Result<T> = std::result::Result<T, StoreError>;
