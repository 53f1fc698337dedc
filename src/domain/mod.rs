//! Domain layer for album search.
//!
//! This module holds the core types and pure logic, independent of the store,
//! the data source and the presentation layer.
//!
//! # Organization
//!
//! - [`album`]: Album record plus `search_albums` / `sort_albums`
//! - [`error`]: Error types and result aliases
//! - [`sort_order`]: Ascending / descending ordering criterion
//!
//! # Examples
//!
//! ```
//! use album_search::domain::{search_albums, sort_albums, Album, SortOrder};
//!
//! let albums = vec![Album::new(1, "Revolver"), Album::new(2, "Rubber Soul")];
//! let view = sort_albums(&search_albums(&albums, "r"), SortOrder::Desc);
//! assert_eq!(view[0].title, "Rubber Soul");
//! ```

pub mod album;
pub mod error;
pub mod sort_order;

pub use album::{search_albums, sort_albums, Album};
pub use error::{AlbumSearchError, Result};
pub use sort_order::{ParseSortOrderError, SortOrder};
