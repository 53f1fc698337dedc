//! JSON file album source.
//!
//! Reads the whole album catalogue from a JSON file on every fetch. The file
//! is never written: the album list is a read-only snapshot.
//!
//! # File Format
//!
//! Either a bare array or an object wrapping it:
//!
//! ```json
//! {
//!   "albums": [
//!     { "id": 1, "title": "Abbey Road", "artist": "The Beatles" },
//!     { "id": 2, "title": "Revolver" }
//!   ]
//! }
//! ```

use crate::domain::error::{AlbumSearchError, Result};
use crate::domain::Album;
use crate::services::backend::AlbumsService;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;

/// Accepted top-level layouts of the catalogue file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Catalogue {
    Bare(Vec<Album>),
    Wrapped { albums: Vec<Album> },
}

impl Catalogue {
    fn into_albums(self) -> Vec<Album> {
        match self {
            Self::Bare(albums) | Self::Wrapped { albums } => albums,
        }
    }
}

/// Album source backed by a JSON file.
///
/// # Examples
///
/// ```no_run
/// use album_search::services::{AlbumsService, JsonAlbumsService};
///
/// let service = JsonAlbumsService::new("/tmp/albums.json");
/// let albums = futures::executor::block_on(service.get_all())?;
/// # Ok::<(), album_search::AlbumSearchError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonAlbumsService {
    file_path: PathBuf,
}

impl JsonAlbumsService {
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    /// Reads and parses the catalogue.
    ///
    /// # Errors
    ///
    /// Every failure is reported as [`AlbumSearchError::Source`], naming the file.
    fn load_from_file(&self) -> Result<Vec<Album>> {
        let contents = std::fs::read_to_string(&self.file_path).map_err(|e| {
            AlbumSearchError::Source(format!(
                "failed to read {}: {e}",
                self.file_path.display()
            ))
        })?;

        let catalogue: Catalogue = serde_json::from_str(&contents).map_err(|e| {
            AlbumSearchError::Source(format!(
                "failed to parse {}: {e}",
                self.file_path.display()
            ))
        })?;

        Ok(catalogue.into_albums())
    }
}

#[async_trait(?Send)]
impl AlbumsService for JsonAlbumsService {
    async fn get_all(&self) -> Result<Vec<Album>> {
        let _span = tracing::debug_span!("json_get_all_albums",
            path = %self.file_path.display()
        ).entered();

        let albums = self.load_from_file()?;

        tracing::debug!(album_count = albums.len(), "albums loaded");
        Ok(albums)
    }
}
