//! Error types for the album search crate.
//!
//! This module defines [`AlbumSearchError`] and the [`Result`] alias used across
//! the crate. Errors derive `Error` through `thiserror`.

use thiserror::Error;

/// The main error type for album search operations.
///
/// Only [`AlbumSearchError::Source`] reaches the store: it is the failure of the
/// album data source. The store swallows it after notifying the user, so it is
/// never returned from a store operation.
///
/// # Examples
///
/// ```
/// use album_search::AlbumSearchError;
///
/// let err = AlbumSearchError::Source("connection refused".to_string());
/// assert_eq!(err.to_string(), "Album source error: connection refused");
/// ```
#[derive(Debug, Error)]
pub enum AlbumSearchError {
    /// The album data source could not produce the album list.
    ///
    /// Covers unreachable or unreadable sources and malformed payloads.
    #[error("Album source error: {0}")]
    Source(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid.
    ///
    /// Occurs when a configuration file cannot be parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for album search operations.
pub type Result<T> = std::result::Result<T, AlbumSearchError>;
