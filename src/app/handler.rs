//! Event handling and state transition logic.
//!
//! Every change to [`SearchState`] goes through [`handle_event`]. Each call is
//! one synchronous mutation step, so a reader never sees the album list
//! replaced without the loading flag toggled alongside it.
//!
//! # Loading state machine
//!
//! ```text
//!            LoadAllAlbums      AlbumsLoaded / AlbumsLoadFailed / LoadCancelled
//!   Idle ───────────────────▶ Loading ─────────────────────────────────▶ Idle
//!                              │  ▲
//!                              └──┘ LoadAllAlbums (dropped, no new fetch)
//! ```
//!
//! # Example
//!
//! ```rust
//! use album_search::app::{handle_event, Action, Event, SearchState};
//!
//! let mut state = SearchState::default();
//! let (_, actions) = handle_event(&mut state, &Event::LoadAllAlbums);
//! assert_eq!(actions, vec![Action::FetchAlbums]);
//!
//! let (_, actions) = handle_event(&mut state, &Event::LoadAllAlbums);
//! assert!(actions.is_empty());
//! ```

use crate::app::{Action, SearchState};
use crate::domain::{Album, SortOrder};

/// Events from user input and from the album data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Replaces the filter text.
    UpdateQuery(String),
    /// Replaces the sort order.
    UpdateOrder(SortOrder),
    /// Requests a fetch of the full album list.
    LoadAllAlbums,
    /// The in-flight fetch produced the album list.
    AlbumsLoaded {
        /// Complete album list; replaces the current one.
        albums: Vec<Album>,
    },
    /// The in-flight fetch failed.
    AlbumsLoadFailed {
        /// Description of the failure.
        error: String,
    },
    /// The in-flight fetch was dropped before it settled.
    LoadCancelled,
}

/// Processes an event, mutates state, and returns the actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. `should_render` is `false` when the event left
/// every rendered value unchanged.
pub fn handle_event(state: &mut SearchState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();

    match event {
        Event::UpdateQuery(query) => {
            if &state.query == query {
                tracing::trace!("query unchanged, skipping render");
                return (false, vec![]);
            }
            state.query.clone_from(query);
            tracing::trace!(query = %state.query, "search query updated");
            (true, vec![])
        }
        Event::UpdateOrder(order) => {
            if state.order == *order {
                return (false, vec![]);
            }
            state.order = *order;
            tracing::debug!(order = %order, "sort order updated");
            (true, vec![])
        }
        Event::LoadAllAlbums => {
            if state.loading {
                tracing::debug!("fetch already in flight, dropping load request");
                return (false, vec![]);
            }
            state.loading = true;
            tracing::debug!("loading albums");
            (true, vec![Action::FetchAlbums])
        }
        Event::AlbumsLoaded { albums } => {
            if !state.loading {
                tracing::debug!("album list arrived with no fetch in flight");
            }
            state.albums.clone_from(albums);
            state.loading = false;
            tracing::debug!(album_count = state.albums.len(), "albums loaded");
            (true, vec![])
        }
        Event::AlbumsLoadFailed { error } => {
            state.loading = false;
            tracing::debug!(
                error = %error,
                kept_albums = state.albums.len(),
                "album load failed"
            );
            (true, vec![Action::NotifyLoadFailed { error: error.clone() }])
        }
        Event::LoadCancelled => {
            if !state.loading {
                return (false, vec![]);
            }
            state.loading = false;
            tracing::debug!("album fetch cancelled before settling");
            (true, vec![])
        }
    }
}

fn event_name(event: &Event) -> &'static str {
    match event {
        Event::UpdateQuery(_) => "UpdateQuery",
        Event::UpdateOrder(_) => "UpdateOrder",
        Event::LoadAllAlbums => "LoadAllAlbums",
        Event::AlbumsLoaded { .. } => "AlbumsLoaded",
        Event::AlbumsLoadFailed { .. } => "AlbumsLoadFailed",
        Event::LoadCancelled => "LoadCancelled",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_when_idle_starts_fetch() {
        let mut state = SearchState::default();
        let (render, actions) = handle_event(&mut state, &Event::LoadAllAlbums);

        assert!(render);
        assert!(state.loading);
        assert_eq!(actions, vec![Action::FetchAlbums]);
    }

    #[test]
    fn test_load_while_loading_is_dropped() {
        let mut state = SearchState::default();
        handle_event(&mut state, &Event::LoadAllAlbums);
        let before = state.clone();

        let (render, actions) = handle_event(&mut state, &Event::LoadAllAlbums);

        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn test_loaded_replaces_albums_and_clears_loading() {
        let mut state = SearchState {
            albums: vec![Album::new(1, "Old")],
            loading: true,
            ..SearchState::default()
        };
        let albums = vec![Album::new(2, "Abbey Road"), Album::new(3, "Revolver")];

        let (render, actions) = handle_event(&mut state, &Event::AlbumsLoaded { albums: albums.clone() });

        assert!(render);
        assert!(actions.is_empty());
        assert!(!state.loading);
        assert_eq!(state.albums, albums);
    }

    #[test]
    fn test_failure_keeps_albums_and_requests_notification() {
        let mut state = SearchState {
            albums: vec![Album::new(1, "Revolver")],
            loading: true,
            ..SearchState::default()
        };

        let (_, actions) = handle_event(&mut state, &Event::AlbumsLoadFailed { error: "boom".to_string() });

        assert!(!state.loading);
        assert_eq!(state.albums, vec![Album::new(1, "Revolver")]);
        assert_eq!(actions, vec![Action::NotifyLoadFailed { error: "boom".to_string() }]);
    }

    #[test]
    fn test_cancel_clears_loading_without_notification() {
        let mut state = SearchState {
            albums: vec![Album::new(1, "Revolver")],
            ..SearchState::default()
        };
        handle_event(&mut state, &Event::LoadAllAlbums);

        let (render, actions) = handle_event(&mut state, &Event::LoadCancelled);
        assert!(render);
        assert!(actions.is_empty());
        assert!(!state.loading);
        assert_eq!(state.albums, vec![Album::new(1, "Revolver")]);

        let (render, _) = handle_event(&mut state, &Event::LoadCancelled);
        assert!(!render);
    }

    #[test]
    fn test_load_after_settlement_starts_new_fetch() {
        let mut state = SearchState::default();
        handle_event(&mut state, &Event::LoadAllAlbums);
        handle_event(&mut state, &Event::AlbumsLoaded { albums: vec![] });

        let (_, actions) = handle_event(&mut state, &Event::LoadAllAlbums);
        assert_eq!(actions, vec![Action::FetchAlbums]);
    }

    #[test]
    fn test_query_and_order_updates_never_fetch() {
        let mut state = SearchState::default();

        let (render, actions) = handle_event(&mut state, &Event::UpdateQuery("rev".to_string()));
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.query, "rev");

        let (render, actions) = handle_event(&mut state, &Event::UpdateOrder(SortOrder::Desc));
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.order, SortOrder::Desc);
        assert!(!state.loading);
    }

    #[test]
    fn test_unchanged_values_skip_render() {
        let mut state = SearchState::default();
        assert!(!handle_event(&mut state, &Event::UpdateQuery(String::new())).0);
        assert!(!handle_event(&mut state, &Event::UpdateOrder(SortOrder::Asc)).0);
    }

    #[test]
    fn test_query_updates_do_not_disturb_loading() {
        let mut state = SearchState::default();
        handle_event(&mut state, &Event::LoadAllAlbums);
        handle_event(&mut state, &Event::UpdateQuery("abbey".to_string()));
        assert!(state.loading);
    }
}
