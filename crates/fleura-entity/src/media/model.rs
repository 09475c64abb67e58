//! Media reference model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A reference to an image held by either the CDN-backed object store or
/// local storage.
///
/// Exactly one of the two fields is normally set. `file_url` is a fully
/// qualified, already-resolvable URL and takes precedence; `file_path` is
/// relative and requires resolution against a storage backend. A reference
/// with neither field resolves to the placeholder image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct MediaItem {
    /// Fully qualified URL, returned verbatim by resolution.
    pub file_url: Option<String>,
    /// Storage-relative path, resolved against a backend-specific origin.
    pub file_path: Option<String>,
}

impl MediaItem {
    /// A reference pointing at an already-resolvable URL.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            file_url: Some(url.into()),
            file_path: None,
        }
    }

    /// A reference pointing at a storage-relative path.
    pub fn from_path(path: impl Into<String>) -> Self {
        Self {
            file_url: None,
            file_path: Some(path.into()),
        }
    }

    /// True when neither field carries a usable value.
    pub fn is_empty(&self) -> bool {
        self.file_url.as_deref().is_none_or(str::is_empty)
            && self.file_path.as_deref().is_none_or(str::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        assert!(MediaItem::default().is_empty());
        assert!(
            MediaItem {
                file_url: Some(String::new()),
                file_path: Some(String::new()),
            }
            .is_empty()
        );
        assert!(!MediaItem::from_url("https://x").is_empty());
        assert!(!MediaItem::from_path("a/b.jpg").is_empty());
    }
}
