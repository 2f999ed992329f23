//! In-memory todo console application.
//!
//! All state lives for the lifetime of the process; nothing is persisted.
//! [`repository`] owns the task records and id allocation, [`shell`] drives
//! the interactive menu on top of it.

pub mod repository;
pub mod shell;
pub mod task;

pub use repository::{Error, Saved, TaskRepository};
pub use task::{MAX_DESCRIPTION_LEN, MAX_TITLE_LEN, Status, Task, Warning};
