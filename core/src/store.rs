use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::model::filter::ViewFilter;
use crate::model::task::{Task, TaskDraft};

/// Owner of the task collection and its only sanctioned mutation surface.
/// One store lives for one session; nothing touches disk and nothing
/// survives the process.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

/// Point-in-time view handed to the presentation layer, re-read after every
/// mutation. `tasks` respects the filter; `progress`, `total` and
/// `completed` always describe the full collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub progress: u8,
    pub total: usize,
    pub completed: usize,
}

impl TaskStore {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Validates the draft and appends a new task to the end of the
    /// collection. The collection is untouched when validation fails.
    pub fn add(&mut self, draft: TaskDraft) -> Result<Task, ValidationError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let description = draft.description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        let task = Task::new(title.to_string(), description.to_string(), draft.due);
        info!(id = %task.id, title = %task.title, due = %task.due, "task added");
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Flips `completed` on the matching task. An unknown id is ignored:
    /// the UI can hold a stale id after a delete, and that must not fail.
    pub fn toggle(&mut self, id: Uuid) {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                debug!(id = %id, completed = task.completed, "task toggled");
            }
            None => debug!(id = %id, "toggle on unknown id ignored"),
        }
    }

    /// Removes the matching task; survivors keep their relative order.
    /// An unknown id is ignored.
    pub fn delete(&mut self, id: Uuid) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() < before {
            debug!(id = %id, "task deleted");
        } else {
            debug!(id = %id, "delete on unknown id ignored");
        }
    }

    /// Share of completed tasks as a whole percent. An empty store reports 0
    /// rather than dividing by zero. Recomputed on every call; the
    /// collection is a handful of entries, not worth a running counter.
    pub fn progress(&self) -> u8 {
        if self.tasks.is_empty() {
            return 0;
        }
        let ratio = self.completed_count() as f64 / self.tasks.len() as f64;
        (ratio * 100.0).round() as u8
    }

    /// Immutable view of the current state. Never mutates the store.
    pub fn snapshot(&self, filter: ViewFilter) -> Snapshot {
        Snapshot {
            tasks: self
                .tasks
                .iter()
                .filter(|t| filter.matches(t))
                .cloned()
                .collect(),
            progress: self.progress(),
            total: self.tasks.len(),
            completed: self.completed_count(),
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }
}
