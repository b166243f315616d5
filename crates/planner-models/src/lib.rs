//! Core data models for Planner.
//!
//! This crate provides the record types stored by the planner backend:
//! tasks, short tasks, notes, the weekly schedule grid and the reading list.
//! Draft and patch types carry the field validation rules applied before
//! anything is written to the store.

pub mod book;
pub mod ids;
pub mod note;
pub mod schedule;
pub mod task;
pub mod validation;

// Re-export main types
pub use book::{Book, BookDetails, AUTHOR_MAX_LEN, BOOK_TITLE_MAX_LEN, STATUS_MAX_LEN, THUMBNAIL_MAX_LEN};
pub use ids::{BookId, EntryId, NoteId, ShortTaskId, TaskId};
pub use note::{Note, NoteDraft, NotePatch};
pub use schedule::{NewScheduleEntry, ScheduleEntry, UnknownWeekday, WeeklyProgress, Weekday};
pub use task::{ShortTask, ShortTaskDraft, ShortTaskPatch, Task, TaskDraft, TaskPatch, TITLE_MAX_LEN};
pub use validation::{FieldError, ValidationError};
