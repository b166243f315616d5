//! Free-form notes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::NoteId;
use crate::validation::ValidationError;

/// A free-form note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Returns the first 50 characters of the content.
    pub fn summary(&self) -> String {
        self.content.chars().take(50).collect()
    }
}

/// Payload for creating or fully replacing a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub content: String,
}

impl NoteDraft {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.content.trim().is_empty() {
            return Err(ValidationError::field(
                "content",
                "this field may not be blank",
            ));
        }
        Ok(())
    }
}

/// Partial note update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotePatch {
    pub content: Option<String>,
}

impl NotePatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.content {
            Some(content) => NoteDraft::new(content.as_str()).validate(),
            None => Ok(()),
        }
    }

    pub fn apply(self, note: &mut Note) {
        if let Some(content) = self.content {
            note.content = content;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_summary_truncates() {
        let note = Note {
            id: NoteId::new(1),
            content: "a".repeat(80),
            created_at: Utc::now(),
        };
        assert_eq!(note.summary().len(), 50);
    }

    #[test]
    fn test_blank_note_rejected() {
        assert!(NoteDraft::new("  ").validate().is_err());
        assert!(NoteDraft::new("groceries").validate().is_ok());
    }
}
