//! Path resolution for data files.
//!
//! Data lives under the XDG data directory (`$XDG_DATA_HOME/album-search`),
//! falling back to `~/.local/share/album-search`. When neither variable is set
//! the system temp directory is used so the binary still runs in bare
//! environments.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "album-search";

/// Returns the data directory for album search files.
///
/// The directory is not created here.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    data_dir_from(env::var_os("XDG_DATA_HOME"), env::var_os("HOME"))
}

fn data_dir_from(xdg_data_home: Option<std::ffi::OsString>, home: Option<std::ffi::OsString>) -> PathBuf {
    if let Some(xdg) = xdg_data_home.filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg).join(APP_DIR);
    }
    if let Some(home) = home.filter(|v| !v.is_empty()) {
        return PathBuf::from(home).join(".local").join("share").join(APP_DIR);
    }
    env::temp_dir().join(APP_DIR)
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and any path when `HOME` is unset, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use album_search::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("relative/~"), "relative/~");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    expand_tilde_with(path, env::var("HOME").ok().as_deref())
}

fn expand_tilde_with(path: &str, home: Option<&str>) -> String {
    let Some(home) = home.filter(|h| !h.is_empty()) else {
        return path.to_string();
    };
    if path == "~" {
        home.to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{}/{rest}", home.trim_end_matches('/'))
    } else {
        path.to_string()
    }
}
