//! Weekly schedule grid types.
//!
//! The grid is a set of entries keyed by (day, task). Day labels are the
//! literal Turkish weekday names the existing clients read back from the
//! progress endpoint; English names are accepted on input and normalized.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::{EntryId, TaskId};
use crate::validation::ValidationError;

/// Day of the week, ordered Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    #[serde(rename = "Pazartesi", alias = "Monday")]
    Monday,
    #[serde(rename = "Salı", alias = "Tuesday")]
    Tuesday,
    #[serde(rename = "Çarşamba", alias = "Wednesday")]
    Wednesday,
    #[serde(rename = "Perşembe", alias = "Thursday")]
    Thursday,
    #[serde(rename = "Cuma", alias = "Friday")]
    Friday,
    #[serde(rename = "Cumartesi", alias = "Saturday")]
    Saturday,
    #[serde(rename = "Pazar", alias = "Sunday")]
    Sunday,
}

impl Weekday {
    /// All days, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Returns the stored label.
    pub fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Pazartesi",
            Weekday::Tuesday => "Salı",
            Weekday::Wednesday => "Çarşamba",
            Weekday::Thursday => "Perşembe",
            Weekday::Friday => "Cuma",
            Weekday::Saturday => "Cumartesi",
            Weekday::Sunday => "Pazar",
        }
    }

    fn english(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a day label is not one of the seven known names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown day: {0}")]
pub struct UnknownWeekday(pub String);

impl FromStr for Weekday {
    type Err = UnknownWeekday;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|day| day.label() == s || day.english() == s)
            .ok_or_else(|| UnknownWeekday(s.to_string()))
    }
}

/// One cell of the weekly grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: EntryId,
    pub day: Weekday,
    /// Referenced task; `None` for placeholder rows.
    pub task: Option<TaskId>,
    pub hours: f64,
    pub completed: bool,
}

/// Payload for one grid entry (bulk replace, create, full update).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewScheduleEntry {
    pub day: Weekday,
    #[serde(default)]
    pub task: Option<TaskId>,
    pub hours: f64,
    #[serde(default)]
    pub completed: bool,
}

impl NewScheduleEntry {
    pub fn new(day: Weekday, task: Option<TaskId>, hours: f64) -> Self {
        Self {
            day,
            task,
            hours,
            completed: false,
        }
    }

    /// Hours must be a finite, non-negative number.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        errors.check_finite("hours", self.hours);
        if self.hours < 0.0 {
            errors.push("hours", "ensure this value is greater than or equal to 0");
        }
        errors.into_result()
    }
}

/// Completion flags per day and task title.
///
/// Always holds all seven days, serialized Monday first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WeeklyProgress(BTreeMap<Weekday, BTreeMap<String, bool>>);

impl WeeklyProgress {
    /// Creates a progress map with an empty slot for every day.
    pub fn new() -> Self {
        Self(Weekday::ALL.into_iter().map(|day| (day, BTreeMap::new())).collect())
    }

    /// Records a task's completion flag for a day, replacing an earlier one.
    pub fn record(&mut self, day: Weekday, title: impl Into<String>, completed: bool) {
        self.0.entry(day).or_default().insert(title.into(), completed);
    }

    /// Returns the flags recorded for a day.
    pub fn day(&self, day: Weekday) -> &BTreeMap<String, bool> {
        // every day is inserted by `new`
        &self.0[&day]
    }

    /// Number of day keys (always 7).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for WeeklyProgress {
    fn default() -> Self {
        Self::new()
    }
}
