//! Sort order applied to album titles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordering criterion for album titles.
///
/// Serialized as `"asc"` / `"desc"`. Parsing is case-insensitive and also
/// accepts the long forms `"ascending"` / `"descending"`.
///
/// # Examples
///
/// ```
/// use album_search::SortOrder;
///
/// let order: SortOrder = "DESC".parse().unwrap();
/// assert_eq!(order, SortOrder::Desc);
/// assert_eq!(order.toggled(), SortOrder::Asc);
/// assert_eq!(SortOrder::default(), SortOrder::Asc);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Lexicographically increasing titles.
    #[default]
    Asc,
    /// Lexicographically decreasing titles.
    Desc,
}

impl SortOrder {
    /// Returns the opposite order.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Short textual form, as serialized.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no sort order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort order: {0:?} (expected \"asc\" or \"desc\")")]
pub struct ParseSortOrderError(pub String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            _ => Err(ParseSortOrderError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_short_and_long_forms() {
        assert_eq!("asc".parse::<SortOrder>(), Ok(SortOrder::Asc));
        assert_eq!(" Ascending ".parse::<SortOrder>(), Ok(SortOrder::Asc));
        assert_eq!("desc".parse::<SortOrder>(), Ok(SortOrder::Desc));
        assert_eq!("DESCENDING".parse::<SortOrder>(), Ok(SortOrder::Desc));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "sideways".parse::<SortOrder>().unwrap_err();
        assert_eq!(err, ParseSortOrderError("sideways".to_string()));
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&SortOrder::Desc).unwrap(), "\"desc\"");
        let order: SortOrder = serde_json::from_str("\"asc\"").unwrap();
        assert_eq!(order, SortOrder::Asc);
    }

    #[test]
    fn test_toggled_round_trips() {
        assert_eq!(SortOrder::Asc.toggled().toggled(), SortOrder::Asc);
    }
}
