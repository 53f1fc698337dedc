//! Album data source and notification ports, plus the JSON-backed source.
//!
//! # Modules
//!
//! - [`backend`]: The [`AlbumsService`] and [`Notifier`] traits
//! - [`json`]: [`JsonAlbumsService`], an album source reading a JSON catalogue

pub mod backend;
pub mod json;

pub use backend::{AlbumsService, Notifier};
pub use json::JsonAlbumsService;
