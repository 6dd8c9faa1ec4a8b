use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which admissibility rule turned a candidate section away.
///
/// Rules are checked in declaration order and the first failure wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    /// The section is already on the schedule.
    AlreadyPresent,
    /// Enrollment for the section is closed.
    Closed,
    /// The schedule holds a section from another semester.
    SemesterMismatch,
    /// The section meets at the same time as a scheduled section.
    TimeConflict,
    /// Another section of the same course and component is scheduled.
    DuplicateComponent,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Rejection::AlreadyPresent => "section is already in the schedule",
            Rejection::Closed => "section is closed",
            Rejection::SemesterMismatch => "section is from a different semester",
            Rejection::TimeConflict => "section overlaps a scheduled section",
            Rejection::DuplicateComponent => "same course component is already scheduled",
        };
        f.write_str(reason)
    }
}

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Malformed time of day: {0:?}")]
    MalformedTimeFormat(String),

    #[error("Add rejected: {0}")]
    AddRejected(Rejection),

    #[error("Not present: section {semester}/{class_number} is not in the schedule")]
    RemoveRejected { semester: String, class_number: i32 },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),
}

impl AdvisorError {
    /// The rejection tag when this error came from the admissibility check.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            AdvisorError::AddRejected(reason) => Some(*reason),
            _ => None,
        }
    }
}

pub type AdvisorResult<T> = Result<T, AdvisorError>;
