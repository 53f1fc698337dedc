//! Side effects requested by the event handler.
//!
//! [`handle_event`](crate::app::handle_event) never performs I/O itself. It
//! mutates [`SearchState`](crate::app::SearchState) and returns the actions the
//! store must carry out afterwards.

/// Commands representing side effects to be executed by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Start one fetch from the album data source.
    ///
    /// Emitted only on the Idle to Loading transition, so at most one fetch is
    /// ever in flight.
    FetchAlbums,

    /// Tell the user the last fetch failed.
    NotifyLoadFailed {
        /// Description of the data source failure, for logging.
        error: String,
    },
}
