//! Collaborator ports used by the search store.
//!
//! The store does not know where albums come from or how messages reach the
//! user. It is handed one [`AlbumsService`] and one [`Notifier`] at construction
//! time and talks to them only through these traits.
//!
//! Both traits are single-threaded: the fetch future is polled on the same
//! execution context that mutates the store, so no `Send` bound is required.

use crate::domain::error::Result;
use crate::domain::Album;
use async_trait::async_trait;
use std::rc::Rc;

/// Asynchronous source of the full album list.
///
/// # Implementations
///
/// - [`JsonAlbumsService`](crate::services::JsonAlbumsService): reads a JSON catalogue file
///
/// # Examples
///
/// ```
/// use album_search::services::AlbumsService;
/// use album_search::{Album, Result};
/// use async_trait::async_trait;
///
/// struct Fixed;
///
/// #[async_trait(?Send)]
/// impl AlbumsService for Fixed {
///     async fn get_all(&self) -> Result<Vec<Album>> {
///         Ok(vec![Album::new(1, "Revolver")])
///     }
/// }
///
/// let albums = futures::executor::block_on(Fixed.get_all()).unwrap();
/// assert_eq!(albums.len(), 1);
/// ```
#[async_trait(?Send)]
pub trait AlbumsService {
    /// Fetches every album. No paging, no server-side filtering.
    ///
    /// # Errors
    ///
    /// Returns [`AlbumSearchError::Source`](crate::AlbumSearchError::Source) when the
    /// list cannot be produced. There are no partial results.
    async fn get_all(&self) -> Result<Vec<Album>>;
}

/// Sink for dismissible user-facing messages.
///
/// Fire-and-forget: the store never inspects what happens to the message.
pub trait Notifier {
    /// Shows `message` with a dismiss control labelled `action`.
    fn open(&self, message: &str, action: &str);
}

#[async_trait(?Send)]
impl<T: AlbumsService + ?Sized> AlbumsService for Rc<T> {
    async fn get_all(&self) -> Result<Vec<Album>> {
        (**self).get_all().await
    }
}

impl<T: Notifier + ?Sized> Notifier for Rc<T> {
    fn open(&self, message: &str, action: &str) {
        (**self).open(message, action);
    }
}
