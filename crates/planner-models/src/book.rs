//! Reading list types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::BookId;

/// Maximum length of a book title.
pub const BOOK_TITLE_MAX_LEN: usize = 200;
/// Maximum length of the author field.
pub const AUTHOR_MAX_LEN: usize = 200;
/// Maximum length of the reading status label.
pub const STATUS_MAX_LEN: usize = 20;
/// Maximum length of the thumbnail URL.
pub const THUMBNAIL_MAX_LEN: usize = 200;

/// A book on the reading list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    #[serde(flatten)]
    pub details: BookDetails,
}

/// Every stored field of a book except its id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDetails {
    pub title: String,
    pub author: String,
    /// Free-form reading state, e.g. "reading" or "finished".
    pub status: String,
    #[serde(rename = "startDate")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "endDate")]
    pub end_date: Option<NaiveDate>,
    pub thumbnail: Option<String>,
    pub pages: Option<i64>,
    /// Display position; lower comes first.
    pub order: i64,
    pub notes: Option<String>,
}

impl BookDetails {
    /// Creates details with only the required fields set.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            status: status.into(),
            ..Default::default()
        }
    }

    /// Sets the display position.
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_json_shape() {
        let book = Book {
            id: BookId::new(4),
            details: BookDetails {
                start_date: NaiveDate::from_ymd_opt(2024, 3, 1),
                ..BookDetails::new("Dune", "Frank Herbert", "reading").with_order(2)
            },
        };

        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["title"], "Dune");
        assert_eq!(json["startDate"], "2024-03-01");
        assert!(json["endDate"].is_null());
        assert_eq!(json["order"], 2);
    }
}
