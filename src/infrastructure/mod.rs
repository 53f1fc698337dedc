//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where the album catalogue and trace files live on the host.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
