use thiserror::Error;

/// The one recoverable failure in the system: bad input handed to `add`.
/// Unknown ids on toggle/delete are deliberate no-ops, never errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a title.")]
    EmptyTitle,

    #[error("Please enter a description.")]
    EmptyDescription,

    #[error("'{input}' is not a date (try 2024-05-01, today, tomorrow, +3d or fri).")]
    InvalidDueDate { input: String },
}
