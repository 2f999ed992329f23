//! Domain types for tasks: the record itself, its completion status, and the
//! non-fatal warnings raised when over-length input gets shortened.

use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum title length in characters. Longer input is truncated, not rejected.
pub const MAX_TITLE_LEN: usize = 100;

/// Maximum description length in characters.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// A single to-do record.
///
/// The `id` is unique for the lifetime of the process and is never reused,
/// even after the task is deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub status: Status,
}

/// Completion status of a task. New tasks start out `Pending`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    #[default]
    Pending,
    Completed,
}

impl Status {
    /// Returns the other status. Applying this twice restores the original.
    pub fn toggled(self) -> Self {
        match self {
            Status::Pending => Status::Completed,
            Status::Completed => Status::Pending,
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Pending => write!(f, "Pending"),
            Status::Completed => write!(f, "Completed"),
        }
    }
}

/// Warning raised when a text field exceeded its limit and was truncated.
///
/// Warnings accompany a successful operation; they never fail it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    TitleTruncated,
    DescriptionTruncated,
}

impl Display for Warning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::TitleTruncated => {
                write!(f, "Title truncated to {MAX_TITLE_LEN} characters")
            }
            Warning::DescriptionTruncated => {
                write!(f, "Description truncated to {MAX_DESCRIPTION_LEN} characters")
            }
        }
    }
}
