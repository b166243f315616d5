//! Parsing and validation of book field maps.
//!
//! Clients send books as loose JSON: dates may be `""`, numbers may arrive
//! as strings, and extra keys such as `id` ride along. This module turns
//! such a map into typed changes or a [`ValidationError`] listing every
//! offending field.

use chrono::NaiveDate;
use serde_json::{Map, Value};
use url::Url;

use planner_models::{
    BookDetails, ValidationError, AUTHOR_MAX_LEN, BOOK_TITLE_MAX_LEN, STATUS_MAX_LEN,
    THUMBNAIL_MAX_LEN,
};

const DATE_FORMAT: &str = "%Y-%m-%d";
const URL_SCHEMES: [&str; 4] = ["http", "https", "ftp", "ftps"];

const REQUIRED: &str = "this field is required";
const NOT_A_STRING: &str = "not a valid string";
const BAD_DATE: &str = "date has wrong format, use YYYY-MM-DD";
const BAD_INTEGER: &str = "a valid integer is required";
const BAD_URL: &str = "enter a valid URL";

/// Whether absent required fields are an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// Full replacement (PUT, create): title, author and status are required.
    Full,
    /// Partial update (PATCH): only present keys are touched.
    Partial,
}

/// Field changes to apply to a book, `order` excluded.
///
/// `None` leaves a field unchanged; for optional fields `Some(None)`
/// clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<Option<NaiveDate>>,
    pub end_date: Option<Option<NaiveDate>>,
    pub thumbnail: Option<Option<String>>,
    pub pages: Option<Option<i64>>,
    pub notes: Option<Option<String>>,
}

impl BookChanges {
    /// Parses every known book field out of `fields`. Unknown keys are ignored.
    pub fn parse(fields: &Map<String, Value>, mode: UpdateMode) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::new();

        let changes = Self {
            title: required_text(fields, "title", BOOK_TITLE_MAX_LEN, mode, &mut errors),
            author: required_text(fields, "author", AUTHOR_MAX_LEN, mode, &mut errors),
            status: required_text(fields, "status", STATUS_MAX_LEN, mode, &mut errors),
            start_date: optional(fields, "startDate", parse_date, &mut errors),
            end_date: optional(fields, "endDate", parse_date, &mut errors),
            thumbnail: optional(fields, "thumbnail", parse_url, &mut errors),
            pages: optional(fields, "pages", parse_integer, &mut errors),
            notes: optional(fields, "notes", parse_string, &mut errors),
        };

        errors.into_result()?;
        Ok(changes)
    }

    /// Writes the changes onto `details`.
    pub fn apply(self, details: &mut BookDetails) {
        if let Some(title) = self.title {
            details.title = title;
        }
        if let Some(author) = self.author {
            details.author = author;
        }
        if let Some(status) = self.status {
            details.status = status;
        }
        if let Some(start_date) = self.start_date {
            details.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            details.end_date = end_date;
        }
        if let Some(thumbnail) = self.thumbnail {
            details.thumbnail = thumbnail;
        }
        if let Some(pages) = self.pages {
            details.pages = pages;
        }
        if let Some(notes) = self.notes {
            details.notes = notes;
        }
    }
}

/// Reads an explicit `order` from the field map.
///
/// Accepts a JSON integer or a string holding one; `Ok(None)` when the key
/// is absent.
pub fn order_override(fields: &Map<String, Value>) -> Result<Option<i64>, ValidationError> {
    match fields.get("order") {
        None => Ok(None),
        Some(value) => integer_value(value)
            .map(Some)
            .ok_or_else(|| ValidationError::field("order", BAD_INTEGER)),
    }
}

fn required_text(
    fields: &Map<String, Value>,
    field: &str,
    max_len: usize,
    mode: UpdateMode,
    errors: &mut ValidationError,
) -> Option<String> {
    match fields.get(field) {
        None => {
            if mode == UpdateMode::Full {
                errors.push(field, REQUIRED);
            }
            None
        }
        Some(Value::String(text)) => {
            let before = errors.errors().len();
            errors.check_text(field, text, max_len);
            (errors.errors().len() == before).then(|| text.clone())
        }
        Some(_) => {
            errors.push(field, NOT_A_STRING);
            None
        }
    }
}

/// Parses an optional field where `null` and `""` both mean "clear".
fn optional<T>(
    fields: &Map<String, Value>,
    field: &str,
    parse: fn(&Value) -> Result<T, &'static str>,
    errors: &mut ValidationError,
) -> Option<Option<T>> {
    let value = fields.get(field)?;
    match value {
        Value::Null => Some(None),
        Value::String(text) if text.is_empty() => Some(None),
        _ => match parse(value) {
            Ok(parsed) => Some(Some(parsed)),
            Err(message) => {
                errors.push(field, message);
                None
            }
        },
    }
}

fn parse_date(value: &Value) -> Result<NaiveDate, &'static str> {
    value
        .as_str()
        .and_then(|text| NaiveDate::parse_from_str(text, DATE_FORMAT).ok())
        .ok_or(BAD_DATE)
}

fn parse_url(value: &Value) -> Result<String, &'static str> {
    let text = value.as_str().ok_or(NOT_A_STRING)?;
    if text.chars().count() > THUMBNAIL_MAX_LEN {
        return Err("ensure this field has no more than 200 characters");
    }
    let url = Url::parse(text).map_err(|_| BAD_URL)?;
    if !URL_SCHEMES.contains(&url.scheme()) || !url.has_host() {
        return Err(BAD_URL);
    }
    Ok(text.to_string())
}

fn parse_integer(value: &Value) -> Result<i64, &'static str> {
    integer_value(value).ok_or(BAD_INTEGER)
}

fn parse_string(value: &Value) -> Result<String, &'static str> {
    value.as_str().map(str::to_string).ok_or(NOT_A_STRING)
}

fn integer_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_full_mode_requires_core_fields() {
        let err = BookChanges::parse(&map(json!({"title": "Dune"})), UpdateMode::Full).unwrap_err();
        assert!(err.has_field("author"));
        assert!(err.has_field("status"));
        assert!(!err.has_field("title"));
    }

    #[test]
    fn test_partial_mode_touches_only_present_keys() {
        let changes =
            BookChanges::parse(&map(json!({"id": 3, "pages": "320"})), UpdateMode::Partial)
                .unwrap();
        assert_eq!(changes.pages, Some(Some(320)));
        assert_eq!(changes.title, None);

        let mut details = BookDetails::new("Dune", "Frank Herbert", "reading");
        changes.apply(&mut details);
        assert_eq!(details.pages, Some(320));
        assert_eq!(details.title, "Dune");
    }

    #[test]
    fn test_empty_string_clears_optional_fields() {
        let changes = BookChanges::parse(
            &map(json!({"startDate": "", "endDate": null, "thumbnail": ""})),
            UpdateMode::Partial,
        )
        .unwrap();

        let mut details = BookDetails {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 2, 1),
            thumbnail: Some("https://example.com/a.png".to_string()),
            ..BookDetails::new("Dune", "Frank Herbert", "reading")
        };
        changes.apply(&mut details);
        assert_eq!(details.start_date, None);
        assert_eq!(details.end_date, None);
        assert_eq!(details.thumbnail, None);
    }

    #[test]
    fn test_bad_values_collected_per_field() {
        let err = BookChanges::parse(
            &map(json!({
                "title": "",
                "startDate": "01/02/2024",
                "thumbnail": "not a url",
                "pages": "many",
                "status": "x".repeat(21),
            })),
            UpdateMode::Partial,
        )
        .unwrap_err();

        for field in ["title", "startDate", "thumbnail", "pages", "status"] {
            assert!(err.has_field(field), "missing error for {field}");
        }
        assert_eq!(err.errors().len(), 5);
    }

    #[test]
    fn test_thumbnail_length_limit() {
        let long = format!("https://example.com/{}", "a".repeat(200));
        let err = BookChanges::parse(&map(json!({"thumbnail": long})), UpdateMode::Partial)
            .unwrap_err();
        assert!(err.has_field("thumbnail"));
    }

    #[test]
    fn test_order_override_is_lenient() {
        assert_eq!(order_override(&map(json!({}))).unwrap(), None);
        assert_eq!(order_override(&map(json!({"order": 4}))).unwrap(), Some(4));
        assert_eq!(order_override(&map(json!({"order": "7"}))).unwrap(), Some(7));
        assert!(order_override(&map(json!({"order": "first"}))).is_err());
        assert!(order_override(&map(json!({"order": null}))).is_err());
    }
}
