//! Snack bar: the single dismissible notification line.
//!
//! [`SnackBar`] is the terminal implementation of [`Notifier`]. Only one
//! notification is visible at a time; opening a new one replaces it. An
//! optional duration closes it automatically.

use crate::services::Notifier;
use crate::ui::viewmodel::SnackBarInfo;
use chrono::{DateTime, Duration, Utc};
use std::cell::{Cell, RefCell};

/// A notification currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnackBarEntry {
    pub message: String,
    pub action: String,
    pub opened_at: DateTime<Utc>,
}

/// Holds at most one open notification.
///
/// # Example
///
/// ```rust
/// use album_search::services::Notifier;
/// use album_search::ui::SnackBar;
///
/// let snack_bar = SnackBar::default();
/// snack_bar.open("Failed to load albums", "Dismiss");
/// assert_eq!(snack_bar.current().unwrap().message, "Failed to load albums");
///
/// snack_bar.dismiss();
/// assert!(snack_bar.current().is_none());
/// ```
#[derive(Debug, Default)]
pub struct SnackBar {
    current: RefCell<Option<SnackBarEntry>>,
    duration: Option<Duration>,
    opened: Cell<usize>,
}

impl SnackBar {
    /// Creates a snack bar whose notifications close after `duration`.
    #[must_use]
    pub fn with_duration(duration: Duration) -> Self {
        Self {
            duration: Some(duration),
            ..Self::default()
        }
    }

    /// The open notification, if any and not yet expired.
    #[must_use]
    pub fn current(&self) -> Option<SnackBarEntry> {
        self.current_at(Utc::now())
    }

    /// Like [`current`](Self::current), evaluated at `now`.
    #[must_use]
    pub fn current_at(&self, now: DateTime<Utc>) -> Option<SnackBarEntry> {
        let entry = self.current.borrow().clone()?;
        match self.duration {
            Some(duration) if now - entry.opened_at >= duration => None,
            _ => Some(entry),
        }
    }

    /// Closes the open notification. Returns `true` if one was open.
    pub fn dismiss(&self) -> bool {
        let was_open = self.current.borrow_mut().take().is_some();
        if was_open {
            tracing::debug!("snack bar dismissed");
        }
        was_open
    }

    /// Number of notifications opened since creation.
    #[must_use]
    pub fn opened_count(&self) -> usize {
        self.opened.get()
    }

    /// View model fragment for the open notification.
    #[must_use]
    pub fn info(&self) -> Option<SnackBarInfo> {
        self.current().map(|entry| SnackBarInfo {
            message: entry.message,
            action: entry.action,
        })
    }
}

impl Notifier for SnackBar {
    fn open(&self, message: &str, action: &str) {
        tracing::debug!(message = %message, action = %action, "snack bar opened");
        self.opened.set(self.opened.get() + 1);
        *self.current.borrow_mut() = Some(SnackBarEntry {
            message: message.to_string(),
            action: action.to_string(),
            opened_at: Utc::now(),
        });
    }
}
