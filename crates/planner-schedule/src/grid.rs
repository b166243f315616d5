//! ScheduleGrid - reconciliation rules for the weekly grid.
//!
//! The grid works over any pair of repositories, so the same rules run
//! against a transaction in production and in tests.

use std::collections::{HashMap, HashSet};

use planner_models::{EntryId, NewScheduleEntry, ScheduleEntry, TaskId, Weekday, WeeklyProgress};
use planner_persistence::{
    ScheduleRepository, SqliteScheduleRepository, SqliteTaskRepository, TaskRepository,
};
use rusqlite::Connection;
use tracing::debug;

use crate::error::{Result, ScheduleError};
use crate::moves::{transfer, MoveHours, MoveOutcome};

/// Weekly grid rules over a schedule and a task repository.
pub struct ScheduleGrid<S, T> {
    entries: S,
    tasks: T,
}

/// The grid over SQLite repositories sharing one connection.
pub type SqliteGrid<'conn> =
    ScheduleGrid<SqliteScheduleRepository<'conn>, SqliteTaskRepository<'conn>>;

impl<'conn> SqliteGrid<'conn> {
    pub fn over(conn: &'conn Connection) -> Self {
        Self::new(
            SqliteScheduleRepository::new(conn),
            SqliteTaskRepository::new(conn),
        )
    }
}

impl<S, T> ScheduleGrid<S, T>
where
    S: ScheduleRepository,
    T: TaskRepository,
{
    pub fn new(entries: S, tasks: T) -> Self {
        Self { entries, tasks }
    }

    /// Replaces every entry with `entries`, inserted in input order.
    pub fn replace_all(&self, entries: &[NewScheduleEntry]) -> Result<Vec<ScheduleEntry>> {
        let mut seen = HashSet::new();
        for entry in entries {
            entry.validate()?;
            if let Some(task) = entry.task {
                if !seen.insert((entry.day, task)) {
                    return Err(duplicate_pair(entry.day, task));
                }
            }
        }

        let removed = self.entries.clear_entries()?;
        debug!(removed, "cleared weekly schedule");

        let mut created = Vec::with_capacity(entries.len());
        for entry in entries {
            self.ensure_task(entry.task)?;
            created.push(self.entries.insert_entry(entry)?);
        }
        Ok(created)
    }

    /// Moves hours of a task from one day to another.
    pub fn move_hours(&self, request: &MoveHours) -> Result<MoveOutcome> {
        let task = self
            .tasks
            .get_task(request.task)?
            .ok_or_else(|| ScheduleError::NotFound("Task not found".to_string()))?;

        let mut source = self
            .entries
            .find_entry(request.from, task.id)?
            .ok_or_else(|| ScheduleError::NotFound("Old schedule not found".to_string()))?;

        if request.is_same_day() {
            return Ok(MoveOutcome {
                destination: source.clone(),
                source: Some(source),
            });
        }

        let mut destination = self.destination_for(request.to, task.id)?;
        let emptied = transfer(&mut source, &mut destination, request.hours);

        self.entries.update_entry(&destination)?;
        let source = if emptied {
            self.entries.delete_entry(source.id)?;
            None
        } else {
            self.entries.update_entry(&source)?;
            Some(source)
        };

        Ok(MoveOutcome {
            source,
            destination,
        })
    }

    /// Returns the (day, task) entry, creating an empty one if needed.
    pub fn destination_for(&self, day: Weekday, task: TaskId) -> Result<ScheduleEntry> {
        if let Some(existing) = self.entries.find_entry(day, task)? {
            return Ok(existing);
        }
        let created = self
            .entries
            .insert_entry(&NewScheduleEntry::new(day, Some(task), 0.0))?;
        Ok(created)
    }

    pub fn set_completion(&self, id: EntryId, completed: bool) -> Result<ScheduleEntry> {
        let mut entry = self.get(id)?;
        entry.completed = completed;
        self.entries.update_entry(&entry)?;
        Ok(entry)
    }

    /// Completion flags per day, keyed by task title.
    pub fn progress(&self) -> Result<WeeklyProgress> {
        let titles: HashMap<TaskId, String> = self
            .tasks
            .list_tasks(true)?
            .into_iter()
            .map(|task| (task.id, task.title))
            .collect();

        let mut progress = WeeklyProgress::new();
        for entry in self.entries.list_entries()? {
            let Some(title) = entry.task.and_then(|task| titles.get(&task)) else {
                continue;
            };
            progress.record(entry.day, title.as_str(), entry.completed);
        }
        Ok(progress)
    }

    pub fn list(&self) -> Result<Vec<ScheduleEntry>> {
        Ok(self.entries.list_entries()?)
    }

    pub fn get(&self, id: EntryId) -> Result<ScheduleEntry> {
        self.entries
            .get_entry(id)?
            .ok_or_else(|| entry_not_found(id))
    }

    pub fn create(&self, entry: &NewScheduleEntry) -> Result<ScheduleEntry> {
        self.check_entry(entry, None)?;
        Ok(self.entries.insert_entry(entry)?)
    }

    /// Replaces every field of an existing entry.
    pub fn update(&self, id: EntryId, entry: &NewScheduleEntry) -> Result<ScheduleEntry> {
        self.get(id)?;
        self.check_entry(entry, Some(id))?;

        let updated = ScheduleEntry {
            id,
            day: entry.day,
            task: entry.task,
            hours: entry.hours,
            completed: entry.completed,
        };
        self.entries.update_entry(&updated)?;
        Ok(updated)
    }

    pub fn delete(&self, id: EntryId) -> Result<()> {
        if !self.entries.delete_entry(id)? {
            return Err(entry_not_found(id));
        }
        Ok(())
    }

    fn check_entry(&self, entry: &NewScheduleEntry, own_id: Option<EntryId>) -> Result<()> {
        entry.validate()?;
        self.ensure_task(entry.task)?;

        if let Some(task) = entry.task {
            if let Some(existing) = self.entries.find_entry(entry.day, task)? {
                if Some(existing.id) != own_id {
                    return Err(duplicate_pair(entry.day, task));
                }
            }
        }
        Ok(())
    }

    fn ensure_task(&self, task: Option<TaskId>) -> Result<()> {
        match task {
            Some(id) if self.tasks.get_task(id)?.is_none() => {
                Err(ScheduleError::ReferenceNotFound(id))
            }
            _ => Ok(()),
        }
    }
}

fn entry_not_found(id: EntryId) -> ScheduleError {
    ScheduleError::NotFound(format!("weekly schedule entry not found: {id}"))
}

fn duplicate_pair(day: Weekday, task: TaskId) -> ScheduleError {
    ScheduleError::Validation(format!("task {task} is already scheduled on {day}"))
}
