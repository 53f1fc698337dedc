//! Search state and its derived views.
//!
//! [`SearchState`] is the single mutable entity of the screen: the album list,
//! the query, the sort order and the loading flag. Everything the presentation
//! layer shows is derived from it on read, so derived values can never drift
//! from the fields they are computed from.
//!
//! # Example
//!
//! ```rust
//! use album_search::app::SearchState;
//! use album_search::{Album, SortOrder};
//!
//! let mut state = SearchState::default();
//! state.albums = vec![Album::new(1, "Abbey Road"), Album::new(2, "Revolver")];
//! state.query = "rev".to_string();
//! assert_eq!(state.total_albums(), 1);
//! assert!(!state.show_spinner());
//! ```

use crate::domain::{search_albums, sort_albums, Album, SortOrder};
use crate::ui::viewmodel::{DisplayItem, UIViewModel};

/// Message shown in place of the list when nothing matches.
const EMPTY_STATE_MESSAGE: &str = "No albums found";

/// The mutable state behind the album search screen.
///
/// Mutated only by [`handle_event`](crate::app::handle_event). Fields are public
/// for reads and for tests; the store never hands out a mutable reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// Album list from the last successful fetch, replaced wholesale.
    pub albums: Vec<Album>,

    /// Current filter text.
    pub query: String,

    /// Current sort order of the filtered view.
    pub order: SortOrder,

    /// `true` while a fetch is in flight.
    pub loading: bool,
}

impl SearchState {
    /// Albums matching the query, sorted by the current order.
    #[must_use]
    pub fn filtered_albums(&self) -> Vec<Album> {
        let _span = tracing::trace_span!("filtered_albums",
            total_albums = self.albums.len(),
            query_len = self.query.len(),
            order = %self.order
        ).entered();

        sort_albums(&search_albums(&self.albums, &self.query), self.order)
    }

    /// Number of albums in [`filtered_albums`](Self::filtered_albums).
    #[must_use]
    pub fn total_albums(&self) -> usize {
        self.filtered_albums().len()
    }

    /// `true` while loading and nothing is visible yet.
    ///
    /// Once any result is on screen a background refresh does not bring the
    /// spinner back.
    #[must_use]
    pub fn show_spinner(&self) -> bool {
        self.loading && self.filtered_albums().is_empty()
    }

    /// Computes the renderable view model from one snapshot of the state.
    ///
    /// The filtered list is computed once and reused for the header count, the
    /// items and the spinner flag.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let filtered = self.filtered_albums();
        let show_spinner = self.loading && filtered.is_empty();

        let empty_state = (!show_spinner && filtered.is_empty())
            .then(|| EMPTY_STATE_MESSAGE.to_string());

        UIViewModel {
            header: format!("Albums ({})", filtered.len()),
            query: self.query.clone(),
            order: self.order,
            items: filtered
                .iter()
                .map(|album| DisplayItem::from_album(album, &self.query))
                .collect(),
            show_spinner,
            empty_state,
            snack_bar: None,
        }
    }
}
