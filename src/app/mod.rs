//! Application layer: search state, events, actions and the store.
//!
//! This module sits between the presentation layer (`main.rs`, [`crate::ui`])
//! and the domain and service layers.
//!
//! # Architecture
//!
//! The store follows a unidirectional data flow:
//!
//! ```text
//! User Input ─▶ Events ─▶ handle_event ─▶ State Mutation ─▶ Actions ─▶ Side Effects
//!                  ▲                                                      │
//!                  └────────── AlbumsLoaded / AlbumsLoadFailed ◀──────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and the loading state machine
//! - [`state`]: Search state and derived views
//! - [`store`]: Public store contract over state, data source and notifier

pub mod actions;
pub mod handler;
pub mod state;
pub mod store;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use state::SearchState;
pub use store::{AlbumSearchStore, LoadAlbums, DEFAULT_DISMISS_LABEL, DEFAULT_FAILURE_MESSAGE};
