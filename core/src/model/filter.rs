use serde::{Deserialize, Serialize};

use crate::model::task::Task;

/// Which slice of the collection the list shows. Progress is always computed
/// over the full collection regardless of the active filter.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewFilter {
    All,
    IncompleteOnly,
}

impl Default for ViewFilter {
    fn default() -> Self {
        ViewFilter::All
    }
}

impl ViewFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            ViewFilter::All => true,
            ViewFilter::IncompleteOnly => !task.completed,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ViewFilter::All => ViewFilter::IncompleteOnly,
            ViewFilter::IncompleteOnly => ViewFilter::All,
        }
    }
}
