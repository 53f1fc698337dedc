//! Album domain model and the pure search/sort utilities.
//!
//! [`Album`] is an immutable record as delivered by the album data source. The
//! two free functions, [`search_albums`] and [`sort_albums`], are the only
//! transformations the store applies to the album list; both return new vectors
//! and leave their input untouched.

use super::sort_order::SortOrder;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A music album as delivered by the album data source.
///
/// `title` is the display name used for searching and sorting. The remaining
/// metadata is carried through to the presentation layer untouched.
///
/// # Wire format
///
/// ```json
/// { "id": 1, "title": "Abbey Road", "artist": "The Beatles",
///   "releaseDate": "1969-09-26", "coverImage": "/covers/abbey-road.jpg" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

impl Album {
    /// Creates an album with only an identifier and a title.
    ///
    /// # Examples
    ///
    /// ```
    /// use album_search::Album;
    ///
    /// let album = Album::new(1, "Revolver");
    /// assert_eq!(album.title, "Revolver");
    /// assert!(album.artist.is_none());
    /// ```
    #[must_use]
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist: None,
            release_date: None,
            cover_image: None,
        }
    }

    /// Sets the artist, builder style.
    #[must_use]
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    /// Returns `true` if the title contains `needle`, which must already be folded.
    fn title_contains(&self, needle: &str) -> bool {
        needle.is_empty() || fold_case(&self.title).contains(needle)
    }
}

/// Lowercases `text` one character at a time.
///
/// Every folded character comes from exactly one source character, which lets
/// [`match_range`] map a match back onto the original title.
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Character range `(start, end)` of the first case-insensitive occurrence of
/// `query` in `text`. `None` for an empty query or no match.
///
/// Agrees with [`search_albums`]: a title it keeps always yields a range.
///
/// ```
/// use album_search::domain::album::match_range;
///
/// assert_eq!(match_range("Abbey Road", "ROAD"), Some((6, 10)));
/// assert_eq!(match_range("Abbey Road", "help"), None);
/// ```
#[must_use]
pub fn match_range(text: &str, query: &str) -> Option<(usize, usize)> {
    let needle: Vec<char> = fold_case(query).chars().collect();
    if needle.is_empty() {
        return None;
    }

    let folded: Vec<(usize, char)> = text
        .chars()
        .enumerate()
        .flat_map(|(i, c)| c.to_lowercase().map(move |lower| (i, lower)))
        .collect();

    folded
        .windows(needle.len())
        .find(|window| window.iter().map(|&(_, c)| c).eq(needle.iter().copied()))
        .and_then(|window| Some((window.first()?.0, window.last()?.0 + 1)))
}

/// Filters albums whose title contains `query`, ignoring case.
///
/// An empty query matches every album. Matches keep their relative order.
///
/// # Examples
///
/// ```
/// use album_search::{search_albums, Album};
///
/// let albums = vec![Album::new(1, "Abbey Road"), Album::new(2, "Revolver")];
/// let found = search_albums(&albums, "REV");
/// assert_eq!(found, vec![Album::new(2, "Revolver")]);
/// assert_eq!(search_albums(&albums, ""), albums);
/// ```
#[must_use]
pub fn search_albums(albums: &[Album], query: &str) -> Vec<Album> {
    let needle = fold_case(query);
    albums
        .iter()
        .filter(|album| album.title_contains(&needle))
        .cloned()
        .collect()
}

/// Returns the albums stably sorted by title in the given order.
///
/// Titles compare case-folded first, then byte-wise, so `"abbey"` and `"Abbey"`
/// end up adjacent in a fixed order. `Desc` uses the reversed comparator, which
/// keeps albums with identical titles in their input order.
///
/// # Examples
///
/// ```
/// use album_search::{sort_albums, Album, SortOrder};
///
/// let albums = vec![Album::new(1, "B"), Album::new(2, "A"), Album::new(3, "C")];
/// let titles: Vec<_> = sort_albums(&albums, SortOrder::Desc)
///     .into_iter()
///     .map(|a| a.title)
///     .collect();
/// assert_eq!(titles, ["C", "B", "A"]);
/// ```
#[must_use]
pub fn sort_albums(albums: &[Album], order: SortOrder) -> Vec<Album> {
    let mut sorted = albums.to_vec();
    match order {
        SortOrder::Asc => sorted.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortOrder::Desc => sorted.sort_by(|a, b| compare_titles(&b.title, &a.title)),
    }
    sorted
}

fn compare_titles(a: &str, b: &str) -> Ordering {
    fold_case(a)
        .cmp(&fold_case(b))
        .then_with(|| a.cmp(b))
}
