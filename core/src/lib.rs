pub mod date;
pub mod error;
pub mod input;
pub mod model;
pub mod store;

pub use date::parse_human_date;
pub use error::ValidationError;
pub use input::{parse_args, parse_draft, ParsedInput};
pub use model::filter::ViewFilter;
pub use model::task::{Task, TaskDraft};
pub use store::{Snapshot, TaskStore};
