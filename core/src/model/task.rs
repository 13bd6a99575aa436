use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,

    // A plain calendar day. Time-of-day and timezone never enter the model;
    // the date parser hands us a normalized value and we keep it as-is.
    pub due: NaiveDate,

    pub completed: bool,
}

impl Task {
    pub fn new(title: String, description: String, due: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            due,
            completed: false,
        }
    }
}

/// Creation input as it leaves the input layer. The text fields are still
/// untrimmed and possibly blank; the store owns that validation.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due: NaiveDate,
}
