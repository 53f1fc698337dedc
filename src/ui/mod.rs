//! Presentation layer: view models, rendering, theme and snack bar.
//!
//! # Architecture
//!
//! ```text
//! SearchState → compute_viewmodel → UIViewModel → render → terminal text
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Frame rendering, with or without colors
//! - [`snackbar`]: Single dismissible notification, the terminal [`Notifier`](crate::services::Notifier)
//! - [`theme`]: Color scheme and ANSI escape sequence generation

pub mod renderer;
pub mod snackbar;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_plain};
pub use snackbar::{SnackBar, SnackBarEntry};
pub use theme::{Theme, ThemeColors};
pub use viewmodel::{DisplayItem, SnackBarInfo, UIViewModel};
