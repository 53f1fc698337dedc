//! View model types representing renderable UI state.
//!
//! View models are plain data computed from [`SearchState`](crate::app::SearchState)
//! via `compute_viewmodel()` and consumed by the renderer. They carry no
//! business logic, only display-ready values.
//!
//! # Example
//!
//! ```rust
//! use album_search::ui::viewmodel::{DisplayItem, UIViewModel};
//! use album_search::{Album, SortOrder};
//!
//! let vm = UIViewModel {
//!     header: "Albums (1)".to_string(),
//!     query: "rev".to_string(),
//!     order: SortOrder::Asc,
//!     items: vec![DisplayItem::from_album(&Album::new(2, "Revolver"), "rev")],
//!     show_spinner: false,
//!     empty_state: None,
//!     snack_bar: None,
//! };
//! assert_eq!(vm.items[0].highlight_ranges, vec![(0, 3)]);
//! ```

use crate::domain::album::match_range;
use crate::domain::{Album, SortOrder};

/// Complete view model for one frame of the album search screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Title with the filtered count, e.g. `"Albums (12)"`.
    pub header: String,

    /// Current filter text, shown in the filter bar.
    pub query: String,

    /// Current sort order, shown in the filter bar.
    pub order: SortOrder,

    /// Filtered and sorted albums.
    pub items: Vec<DisplayItem>,

    /// Whether the progress indicator is visible.
    pub show_spinner: bool,

    /// Message shown instead of the list when nothing matches.
    pub empty_state: Option<String>,

    /// Open notification, attached by the presentation layer.
    pub snack_bar: Option<SnackBarInfo>,
}

/// One album row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub id: i64,

    /// Album title.
    pub title: String,

    /// Secondary line: artist and release date when known.
    pub subtitle: Option<String>,

    /// Character ranges of `title` matching the query, `(start, end)` exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

impl DisplayItem {
    /// Builds a row, highlighting the first case-insensitive occurrence of `query`.
    #[must_use]
    pub fn from_album(album: &Album, query: &str) -> Self {
        let subtitle = match (&album.artist, &album.release_date) {
            (Some(artist), Some(date)) => Some(format!("{artist} · {date}")),
            (Some(artist), None) => Some(artist.clone()),
            (None, Some(date)) => Some(date.clone()),
            (None, None) => None,
        };

        Self {
            id: album.id,
            title: album.title.clone(),
            subtitle,
            highlight_ranges: match_range(&album.title, query).into_iter().collect(),
        }
    }
}

/// Notification line shown at the bottom of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnackBarInfo {
    pub message: String,

    /// Label of the dismiss control.
    pub action: String,
}
