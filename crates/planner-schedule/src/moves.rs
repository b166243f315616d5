//! Moving hours of one task between two days.

use planner_models::{ScheduleEntry, TaskId, UnknownWeekday, Weekday};

use crate::error::{Result, ScheduleError};

/// A validated request to move hours of a task from one day to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveHours {
    pub task: TaskId,
    pub from: Weekday,
    pub to: Weekday,
    pub hours: f64,
}

impl MoveHours {
    pub fn new(task: TaskId, from: Weekday, to: Weekday, hours: f64) -> Self {
        Self {
            task,
            from,
            to,
            hours,
        }
    }

    /// Builds a move from loosely typed request fields.
    ///
    /// A field counts as missing when it is absent or zero-like: task id 0,
    /// an empty day string, or 0 hours. Clients rely on a zero-hour move
    /// being rejected this way.
    pub fn from_parts(
        task: Option<i64>,
        from: Option<&str>,
        to: Option<&str>,
        hours: Option<f64>,
    ) -> Result<Self> {
        let (Some(task), Some(from), Some(to), Some(hours)) = (
            task.filter(|id| *id != 0),
            from.filter(|day| !day.is_empty()),
            to.filter(|day| !day.is_empty()),
            hours.filter(|hours| *hours != 0.0),
        ) else {
            return Err(ScheduleError::Validation("Missing fields".to_string()));
        };

        let from = parse_day(from)?;
        let to = parse_day(to)?;

        if !hours.is_finite() || hours < 0.0 {
            return Err(ScheduleError::Validation(
                "hours must be a positive number".to_string(),
            ));
        }

        Ok(Self::new(TaskId::new(task), from, to, hours))
    }

    /// True when source and destination are the same day.
    pub fn is_same_day(&self) -> bool {
        self.from == self.to
    }
}

fn parse_day(label: &str) -> Result<Weekday> {
    label
        .parse()
        .map_err(|err: UnknownWeekday| ScheduleError::Validation(err.to_string()))
}

/// Result of a completed move.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveOutcome {
    /// The source entry after the move, `None` if it was emptied and removed.
    pub source: Option<ScheduleEntry>,
    pub destination: ScheduleEntry,
}

/// Shifts `hours` from `source` to `destination`.
///
/// Returns true when the source has no hours left and should be removed.
/// The destination has no upper bound.
pub fn transfer(source: &mut ScheduleEntry, destination: &mut ScheduleEntry, hours: f64) -> bool {
    destination.hours += hours;
    source.hours -= hours;
    source.hours <= 0.0
}
