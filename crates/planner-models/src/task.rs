//! Task and short task types.
//!
//! Both are plain pass-through records: the store keeps whatever a valid
//! draft carries. Tasks are soft-deleted through `is_deleted` and hidden from
//! the task endpoints once flagged; short tasks stay visible after a soft
//! delete.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ShortTaskId, TaskId};
use crate::validation::ValidationError;

/// Maximum length of a task or short task title.
pub const TITLE_MAX_LEN: usize = 100;

/// A schedulable task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned identifier.
    pub id: TaskId,

    /// Task title, also used as the label in weekly progress.
    pub title: String,

    /// Planned effort in hours.
    pub duration: f64,

    /// Number of days the effort is spread over.
    pub days: i64,

    /// Whether the task was created from the short task list.
    pub is_short_task: bool,

    /// Soft-delete flag.
    pub is_deleted: bool,

    /// When the task was created.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Replaces every writable field with the draft's values.
    pub fn replace_with(&mut self, draft: TaskDraft) {
        self.title = draft.title;
        self.duration = draft.duration;
        self.days = draft.days;
        self.is_short_task = draft.is_short_task;
        self.is_deleted = draft.is_deleted;
    }
}

/// Payload for creating or fully replacing a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub duration: f64,
    pub days: i64,
    #[serde(default)]
    pub is_short_task: bool,
    #[serde(default)]
    pub is_deleted: bool,
}

impl TaskDraft {
    /// Creates a draft with default flags.
    pub fn new(title: impl Into<String>, duration: f64, days: i64) -> Self {
        Self {
            title: title.into(),
            duration,
            days,
            is_short_task: false,
            is_deleted: false,
        }
    }

    /// Validates field constraints.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        errors.check_text("title", &self.title, TITLE_MAX_LEN);
        errors.check_finite("duration", self.duration);
        errors.into_result()
    }
}

/// Partial task update; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub duration: Option<f64>,
    pub days: Option<i64>,
    pub is_short_task: Option<bool>,
    pub is_deleted: Option<bool>,
}

impl TaskPatch {
    /// Validates the fields that are present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        if let Some(title) = &self.title {
            errors.check_text("title", title, TITLE_MAX_LEN);
        }
        if let Some(duration) = self.duration {
            errors.check_finite("duration", duration);
        }
        errors.into_result()
    }

    /// Applies present fields to the task.
    pub fn apply(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(duration) = self.duration {
            task.duration = duration;
        }
        if let Some(days) = self.days {
            task.days = days;
        }
        if let Some(is_short_task) = self.is_short_task {
            task.is_short_task = is_short_task;
        }
        if let Some(is_deleted) = self.is_deleted {
            task.is_deleted = is_deleted;
        }
    }
}

/// A quick to-do item kept outside the weekly grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortTask {
    pub id: ShortTaskId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub is_short_task: bool,
    pub is_deleted: bool,
}

impl ShortTask {
    /// Replaces every writable field with the draft's values.
    pub fn replace_with(&mut self, draft: ShortTaskDraft) {
        self.title = draft.title;
        self.is_short_task = draft.is_short_task;
        self.is_deleted = draft.is_deleted;
    }
}

fn default_true() -> bool {
    true
}

/// Payload for creating or fully replacing a short task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortTaskDraft {
    pub title: String,
    #[serde(default = "default_true")]
    pub is_short_task: bool,
    #[serde(default)]
    pub is_deleted: bool,
}

impl ShortTaskDraft {
    /// Creates a draft with default flags.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            is_short_task: true,
            is_deleted: false,
        }
    }

    /// Validates field constraints.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        errors.check_text("title", &self.title, TITLE_MAX_LEN);
        errors.into_result()
    }
}

/// Partial short task update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortTaskPatch {
    pub title: Option<String>,
    pub is_short_task: Option<bool>,
    pub is_deleted: Option<bool>,
}

impl ShortTaskPatch {
    /// Validates the fields that are present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        if let Some(title) = &self.title {
            errors.check_text("title", title, TITLE_MAX_LEN);
        }
        errors.into_result()
    }

    /// Applies present fields to the short task.
    pub fn apply(self, short_task: &mut ShortTask) {
        if let Some(title) = self.title {
            short_task.title = title;
        }
        if let Some(is_short_task) = self.is_short_task {
            short_task.is_short_task = is_short_task;
        }
        if let Some(is_deleted) = self.is_deleted {
            short_task.is_deleted = is_deleted;
        }
    }
}
