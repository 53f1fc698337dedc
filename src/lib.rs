//! Album search: a reactive store behind an album browsing screen.
//!
//! The store holds the album catalogue, the user's filter text and sort order,
//! and a loading flag. Everything the screen shows (filtered list, count,
//! spinner) is derived from that state on read. Fetching goes through an
//! injected [`AlbumsService`](services::AlbumsService); failures surface through
//! an injected [`Notifier`](services::Notifier) instead of errors.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shim (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Store with exhaust-on-load fetching              │
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! └─────────────────────────────────────────────────────┘
//!         │                                   │
//! ┌───────────────────────┐   ┌───────────────────────────┐
//! │ UI Layer (ui/)        │   │ Services (services/)      │
//! │ - View models         │   │ - AlbumsService port      │
//! │ - Rendering, theming  │   │ - Notifier port           │
//! │ - Snack bar           │   │ - JSON file source        │
//! └───────────────────────┘   └───────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Album, SortOrder, search and sort (domain/)      │
//! │  - Data paths (infrastructure/)                     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use album_search::{initialize, Config};
//!
//! let dir = tempfile::tempdir()?;
//! let path = dir.path().join("albums.json");
//! std::fs::write(&path, r#"[{"id": 1, "title": "Revolver"}, {"id": 2, "title": "Abbey Road"}]"#)?;
//!
//! let config = Config {
//!     albums_file: Some(path.display().to_string()),
//!     ..Config::default()
//! };
//! let store = initialize(&config);
//! if let Some(fetch) = store.on_init() {
//!     futures::executor::block_on(fetch);
//! }
//!
//! store.update_query("abbey");
//! assert_eq!(store.total_albums(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod services;
pub mod ui;

pub use app::{handle_event, Action, AlbumSearchStore, Event, SearchState};
pub use domain::{search_albums, sort_albums, Album, AlbumSearchError, Result, SortOrder};
pub use ui::Theme;

use serde::Deserialize;
use services::JsonAlbumsService;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use ui::SnackBar;

/// File name of the album catalogue inside the data directory.
pub const DEFAULT_ALBUMS_FILE_NAME: &str = "albums.json";

/// Runtime configuration.
///
/// Built from a TOML file, from `key=value` pairs, or both:
///
/// ```toml
/// albums_file = "~/music/albums.json"
/// failure_message = "Could not load albums"
/// dismiss_label = "OK"
/// snackbar_duration_secs = 5
/// theme_file = "~/.config/album-search/theme.toml"
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Album catalogue path. Defaults to `<data dir>/albums.json`.
    pub albums_file: Option<String>,

    /// Text of the notification shown when loading fails.
    pub failure_message: String,

    /// Label of the notification's dismiss control.
    pub dismiss_label: String,

    /// Seconds before the notification closes on its own. Unset or
    /// non-positive keeps it open until dismissed.
    pub snackbar_duration_secs: Option<i64>,

    /// Path to a TOML theme. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing filter, e.g. `debug` or `album_search=trace`. `RUST_LOG` wins.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            albums_file: None,
            failure_message: app::DEFAULT_FAILURE_MESSAGE.to_string(),
            dismiss_label: app::DEFAULT_DISMISS_LABEL.to_string(),
            snackbar_duration_secs: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Builds a config from string pairs, defaulting every missing key.
    ///
    /// Blank values and unparsable numbers are ignored.
    ///
    /// ```rust
    /// use album_search::Config;
    /// use std::collections::BTreeMap;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("dismiss_label".to_string(), "OK".to_string());
    /// map.insert("snackbar_duration_secs".to_string(), "soon".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.dismiss_label, "OK");
    /// assert_eq!(config.snackbar_duration_secs, None);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let mut config = Self::default();
        config.merge_map(map);
        config
    }

    /// Applies string pairs on top of this config.
    pub fn merge_map(&mut self, map: &BTreeMap<String, String>) {
        let get = |key: &str| {
            map.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        if let Some(path) = get("albums_file") {
            self.albums_file = Some(path);
        }
        if let Some(message) = get("failure_message") {
            self.failure_message = message;
        }
        if let Some(label) = get("dismiss_label") {
            self.dismiss_label = label;
        }
        match get("snackbar_duration_secs").map(|v| v.parse::<i64>()) {
            Some(Ok(secs)) => self.snackbar_duration_secs = Some(secs),
            Some(Err(e)) => tracing::debug!(error = %e, "ignoring invalid snackbar_duration_secs"),
            None => {}
        }
        if let Some(path) = get("theme_file") {
            self.theme_file = Some(path);
        }
        if let Some(level) = get("trace_level") {
            self.trace_level = Some(level);
        }
    }

    /// Reads a TOML config file. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`AlbumSearchError::Io`] if the file cannot be read and
    /// [`AlbumSearchError::Config`] if it is not valid TOML for this struct.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| {
            AlbumSearchError::Config(format!("failed to parse {}: {e}", path.display()))
        })
    }

    /// Where the album catalogue is read from.
    #[must_use]
    pub fn albums_path(&self) -> PathBuf {
        self.albums_file.as_deref().map_or_else(
            || infrastructure::get_data_dir().join(DEFAULT_ALBUMS_FILE_NAME),
            |path| PathBuf::from(infrastructure::expand_tilde(path)),
        )
    }
}

/// Wires a store to the JSON catalogue and a terminal snack bar.
///
/// No fetch is started; call [`AlbumSearchStore::on_init`].
#[must_use]
pub fn initialize(config: &Config) -> AlbumSearchStore<JsonAlbumsService, SnackBar> {
    let albums_path = config.albums_path();
    tracing::debug!(albums_path = %albums_path.display(), "initializing album search");

    let snack_bar = match config.snackbar_duration_secs {
        Some(secs) if secs > 0 => SnackBar::with_duration(chrono::Duration::seconds(secs)),
        _ => SnackBar::default(),
    };

    AlbumSearchStore::new(JsonAlbumsService::new(albums_path), snack_bar)
        .with_failure_notice(config.failure_message.clone(), config.dismiss_label.clone())
}

/// The configured theme, or the default one when unset or unreadable.
#[must_use]
pub fn load_theme(config: &Config) -> Theme {
    config.theme_file.as_deref().map_or_else(Theme::default, |theme_file| {
        let path = infrastructure::expand_tilde(theme_file);
        Theme::from_file(&path).unwrap_or_else(|e| {
            tracing::debug!(theme_file = %path, error = %e, "failed to load theme, using default");
            Theme::default()
        })
    })
}
