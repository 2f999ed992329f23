//! In-memory task repository.
//!
//! Owns every task record and all id allocation. Ids are handed out from a
//! monotonically increasing counter starting at 1, so a deleted task's id is
//! never reissued. All operations are synchronous, in-memory, and
//! all-or-nothing: a failed call leaves the repository exactly as it was.

use std::collections::HashMap;

use thiserror::Error;

use crate::task::{MAX_DESCRIPTION_LEN, MAX_TITLE_LEN, Status, Task, Warning};

/// Failures a repository operation can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The title was empty after stripping surrounding whitespace.
    #[error("Title cannot be empty")]
    InvalidTitle,
    /// The referenced task id does not exist.
    #[error("Task ID {0} not found")]
    NotFound(u32),
}

/// A successfully written task plus any truncation warnings raised while
/// normalizing its text fields. Warnings travel on the success channel so
/// callers can surface them without treating the operation as failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Saved {
    pub task: Task,
    pub warnings: Vec<Warning>,
}

/// Process-wide store of tasks, keyed by id.
#[derive(Debug, Clone)]
pub struct TaskRepository {
    tasks: HashMap<u32, Task>,
    next_id: u32,
}

impl Default for TaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskRepository {
    /// Creates an empty repository. The first task created will get id 1.
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
            next_id: 1,
        }
    }

    /// Creates a task with the next available id and `Pending` status.
    ///
    /// The title is stripped of surrounding whitespace and must not end up
    /// empty. Over-length fields are truncated with a warning rather than
    /// rejected. On `InvalidTitle` no id is consumed.
    pub fn create(&mut self, title: &str, description: &str) -> Result<Saved, Error> {
        let (title, title_warning) = normalize_title(title)?;
        let (description, description_warning) = normalize_description(description);

        let id = self.next_id;
        let task = Task {
            id,
            title,
            description,
            status: Status::default(),
        };
        self.tasks.insert(id, task.clone());
        self.next_id += 1;

        Ok(Saved {
            task,
            warnings: title_warning
                .into_iter()
                .chain(description_warning)
                .collect(),
        })
    }

    /// Returns a snapshot of all tasks, ordered by ascending id.
    pub fn list(&self) -> Vec<Task> {
        let mut tasks: Vec<Task> = self.tasks.values().cloned().collect();
        tasks.sort_by_key(|task| task.id);
        tasks
    }

    /// Looks up a task by id.
    pub fn get(&self, id: u32) -> Result<&Task, Error> {
        self.tasks.get(&id).ok_or(Error::NotFound(id))
    }

    /// Updates a task's title and/or description, leaving id and status alone.
    ///
    /// An input that is empty after stripping means "keep the current value";
    /// it is the caller's no-op sentinel, not a validation failure. Non-empty
    /// inputs are normalized with the same truncation rules as [`create`].
    ///
    /// [`create`]: TaskRepository::create
    pub fn update(
        &mut self,
        id: u32,
        new_title: &str,
        new_description: &str,
    ) -> Result<Saved, Error> {
        let mut warnings = Vec::new();

        let new_title = match new_title.trim() {
            "" => None,
            trimmed => {
                let (title, warning) = normalize_title(trimmed)?;
                warnings.extend(warning);
                Some(title)
            }
        };
        let new_description = match new_description.trim() {
            "" => None,
            _ => {
                let (description, warning) = normalize_description(new_description);
                warnings.extend(warning);
                Some(description)
            }
        };

        let task = self.tasks.get_mut(&id).ok_or(Error::NotFound(id))?;
        if let Some(title) = new_title {
            task.title = title;
        }
        if let Some(description) = new_description {
            task.description = description;
        }

        Ok(Saved {
            task: task.clone(),
            warnings,
        })
    }

    /// Removes a task and returns the removed record.
    ///
    /// The id is permanently retired: the counter never moves backwards, so
    /// no future `create` will reissue it.
    pub fn delete(&mut self, id: u32) -> Result<Task, Error> {
        self.tasks.remove(&id).ok_or(Error::NotFound(id))
    }

    /// Flips a task's status between `Pending` and `Completed`.
    pub fn toggle_status(&mut self, id: u32) -> Result<&Task, Error> {
        let task = self.tasks.get_mut(&id).ok_or(Error::NotFound(id))?;
        task.status = task.status.toggled();
        Ok(task)
    }
}

fn normalize_title(raw: &str) -> Result<(String, Option<Warning>), Error> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(Error::InvalidTitle);
    }
    Ok(truncate_chars(title, MAX_TITLE_LEN, Warning::TitleTruncated))
}

fn normalize_description(raw: &str) -> (String, Option<Warning>) {
    truncate_chars(raw, MAX_DESCRIPTION_LEN, Warning::DescriptionTruncated)
}

// Truncation counts characters, not bytes, so the cut never splits a
// multi-byte code point.
fn truncate_chars(text: &str, max: usize, warning: Warning) -> (String, Option<Warning>) {
    match text.char_indices().nth(max) {
        Some((cut, _)) => (text[..cut].to_string(), Some(warning)),
        None => (text.to_string(), None),
    }
}
