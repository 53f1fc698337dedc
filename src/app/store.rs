//! The album search store.
//!
//! [`AlbumSearchStore`] owns the [`SearchState`] of one screen activation
//! together with the album data source and the notification sink it was built
//! with. Reads recompute derived views from the current state; writes go
//! through [`handle_event`] and the resulting [`Action`]s are carried out here.
//!
//! # Fetching
//!
//! [`load_all_albums`](AlbumSearchStore::load_all_albums) flips the loading
//! flag immediately and hands back the fetch as a future. The future is
//! `!Send` and borrows the store; the caller polls it on the same execution
//! context that handles user input. While it is pending, further load requests
//! are dropped (exhaust policy) and return `None`.
//!
//! ```rust
//! use album_search::app::AlbumSearchStore;
//! use album_search::services::{AlbumsService, Notifier};
//! use album_search::{Album, Result};
//! use async_trait::async_trait;
//!
//! struct Catalogue;
//!
//! #[async_trait(?Send)]
//! impl AlbumsService for Catalogue {
//!     async fn get_all(&self) -> Result<Vec<Album>> {
//!         Ok(vec![Album::new(1, "Abbey Road"), Album::new(2, "Revolver")])
//!     }
//! }
//!
//! struct Silent;
//!
//! impl Notifier for Silent {
//!     fn open(&self, _message: &str, _action: &str) {}
//! }
//!
//! let store = AlbumSearchStore::new(Catalogue, Silent);
//! let fetch = store.on_init().expect("first activation loads albums");
//! assert!(store.show_spinner());
//! futures::executor::block_on(fetch);
//!
//! store.update_query("rev");
//! assert_eq!(store.total_albums(), 1);
//! ```

use crate::app::{handle_event, Action, Event, SearchState};
use crate::domain::{Album, SortOrder};
use crate::services::{AlbumsService, Notifier};
use crate::ui::viewmodel::UIViewModel;
use futures::future::LocalBoxFuture;
use std::cell::{Cell, RefCell};

/// Notification text shown when a fetch fails.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to load albums";

/// Label of the notification's dismiss control.
pub const DEFAULT_DISMISS_LABEL: &str = "Dismiss";

/// An in-flight album fetch. Drive it to completion to settle the load.
pub type LoadAlbums<'a> = LocalBoxFuture<'a, ()>;

/// State container for the album search screen.
///
/// Generic over its collaborators so callers and tests can inject any
/// [`AlbumsService`] and [`Notifier`].
pub struct AlbumSearchStore<S, N> {
    state: RefCell<SearchState>,
    service: S,
    notifier: N,
    failure_message: String,
    dismiss_label: String,
    initialized: Cell<bool>,
    revision: Cell<u64>,
}

impl<S: AlbumsService, N: Notifier> AlbumSearchStore<S, N> {
    /// Creates a store with default state. No fetch is started until
    /// [`on_init`](Self::on_init) or [`load_all_albums`](Self::load_all_albums).
    #[must_use]
    pub fn new(service: S, notifier: N) -> Self {
        Self {
            state: RefCell::new(SearchState::default()),
            service,
            notifier,
            failure_message: DEFAULT_FAILURE_MESSAGE.to_string(),
            dismiss_label: DEFAULT_DISMISS_LABEL.to_string(),
            initialized: Cell::new(false),
            revision: Cell::new(0),
        }
    }

    /// Overrides the failure notification text and its dismiss label.
    #[must_use]
    pub fn with_failure_notice(mut self, message: impl Into<String>, action: impl Into<String>) -> Self {
        self.failure_message = message.into();
        self.dismiss_label = action.into();
        self
    }

    /// Activation hook: starts the initial load the first time it is called.
    ///
    /// Later calls return `None` without touching state.
    #[must_use]
    pub fn on_init(&self) -> Option<LoadAlbums<'_>> {
        if self.initialized.replace(true) {
            tracing::debug!("store already activated");
            return None;
        }
        tracing::debug!("store activated, loading albums");
        self.load_all_albums()
    }

    /// Requests a fetch of every album.
    ///
    /// Sets the loading flag before returning. Returns `None` when a fetch is
    /// already in flight; the request is dropped and nothing changes.
    ///
    /// On success the album list is replaced. On failure the current list is
    /// kept, the user is notified once, and the error is swallowed. Dropping
    /// the future before it completes clears the loading flag silently.
    #[must_use]
    pub fn load_all_albums(&self) -> Option<LoadAlbums<'_>> {
        if self.dispatch(&Event::LoadAllAlbums) {
            Some(Box::pin(self.fetch(InFlight { store: self, settled: false })))
        } else {
            None
        }
    }

    /// Current filter text.
    #[must_use]
    pub fn query(&self) -> String {
        self.state.borrow().query.clone()
    }

    /// Current sort order.
    #[must_use]
    pub fn order(&self) -> SortOrder {
        self.state.borrow().order
    }

    /// Albums matching the query in the current order.
    #[must_use]
    pub fn filtered_albums(&self) -> Vec<Album> {
        self.state.borrow().filtered_albums()
    }

    /// Number of albums in [`filtered_albums`](Self::filtered_albums).
    #[must_use]
    pub fn total_albums(&self) -> usize {
        self.state.borrow().total_albums()
    }

    /// `true` while a fetch is in flight and no album is visible.
    #[must_use]
    pub fn show_spinner(&self) -> bool {
        self.state.borrow().show_spinner()
    }

    /// `true` while a fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// The unfiltered album list from the last successful fetch.
    #[must_use]
    pub fn albums(&self) -> Vec<Album> {
        self.state.borrow().albums.clone()
    }

    /// View model for the presentation layer.
    #[must_use]
    pub fn view_model(&self) -> UIViewModel {
        self.state.borrow().compute_viewmodel()
    }

    /// Counter bumped on every state change that affects rendering.
    ///
    /// Lets a presentation loop skip redraws when nothing changed.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    /// Replaces the filter text. Never triggers a fetch.
    pub fn update_query(&self, query: impl Into<String>) {
        self.dispatch(&Event::UpdateQuery(query.into()));
    }

    /// Replaces the sort order. Never triggers a fetch.
    pub fn update_order(&self, order: SortOrder) {
        self.dispatch(&Event::UpdateOrder(order));
    }

    /// The injected album data source.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// The injected notification sink.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Owns `in_flight` from the moment the future is created, so dropping
    /// the future unpolled still releases the loading flag.
    async fn fetch(&self, mut in_flight: InFlight<'_, S, N>) {
        let event = match self.service.get_all().await {
            Ok(albums) => Event::AlbumsLoaded { albums },
            Err(e) => {
                tracing::warn!(error = %e, "failed to load albums");
                Event::AlbumsLoadFailed { error: e.to_string() }
            }
        };
        in_flight.settled = true;
        self.dispatch(&event);
    }

    /// Runs one event through the handler and executes its actions.
    ///
    /// Returns `true` if the handler asked for a fetch. The state borrow ends
    /// before any action runs.
    fn dispatch(&self, event: &Event) -> bool {
        let (should_render, actions) = handle_event(&mut self.state.borrow_mut(), event);

        if should_render {
            self.revision.set(self.revision.get().wrapping_add(1));
        }

        let mut fetch_requested = false;
        for action in actions {
            match action {
                Action::FetchAlbums => fetch_requested = true,
                Action::NotifyLoadFailed { error } => {
                    tracing::debug!(error = %error, message = %self.failure_message, "notifying user");
                    self.notifier.open(&self.failure_message, &self.dismiss_label);
                }
            }
        }
        fetch_requested
    }
}

/// Marks one fetch as in flight until it settles or is dropped.
struct InFlight<'a, S: AlbumsService, N: Notifier> {
    store: &'a AlbumSearchStore<S, N>,
    settled: bool,
}

impl<S: AlbumsService, N: Notifier> Drop for InFlight<'_, S, N> {
    fn drop(&mut self) {
        if !self.settled {
            self.store.dispatch(&Event::LoadCancelled);
        }
    }
}

impl<S, N> std::fmt::Debug for AlbumSearchStore<S, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlbumSearchStore")
            .field("state", &self.state)
            .field("initialized", &self.initialized.get())
            .finish_non_exhaustive()
    }
}
