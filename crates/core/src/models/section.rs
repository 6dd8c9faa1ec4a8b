use serde::{Deserialize, Serialize};

use crate::errors::{AdvisorError, AdvisorResult};

/// Enrollment state reported by the catalog for a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnrollmentStatus {
    #[serde(rename = "O")]
    Open,
    #[serde(rename = "W")]
    Waitlisted,
    #[serde(rename = "C")]
    Closed,
}

impl EnrollmentStatus {
    pub fn from_code(code: &str) -> AdvisorResult<Self> {
        match code {
            "O" => Ok(EnrollmentStatus::Open),
            "W" => Ok(EnrollmentStatus::Waitlisted),
            "C" => Ok(EnrollmentStatus::Closed),
            other => Err(AdvisorError::Validation(format!(
                "Unknown enrollment status code: {other:?}"
            ))),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            EnrollmentStatus::Open => "O",
            EnrollmentStatus::Waitlisted => "W",
            EnrollmentStatus::Closed => "C",
        }
    }
}

/// One meeting block of a section as published by the catalog.
///
/// `days` concatenates two-letter weekday abbreviations ("MoWeFr"); the
/// times keep the catalog's dotted format ("10.00.00.000000-05:00") and are
/// only parsed when a caller needs them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Meeting {
    pub days: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub facility_descr: String,
    #[serde(default)]
    pub start_dt: String,
    #[serde(default)]
    pub end_dt: String,
}

/// Identity of a section: unique per (semester, class number).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SectionKey {
    pub semester: String,
    pub class_number: i32,
}

impl SectionKey {
    pub fn new(semester: impl Into<String>, class_number: i32) -> Self {
        Self {
            semester: semester.into(),
            class_number,
        }
    }
}

impl std::fmt::Display for SectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.semester, self.class_number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub semester: String,
    pub class_number: i32,
    /// Course description, e.g. "Introduction to Modern Dance".
    pub name: String,
    pub subject: String,
    pub catalog_number: String,
    pub class_section: String,
    /// Pedagogical type such as "LEC", "LAB" or "DIS".
    pub component: String,
    pub units: String,
    pub enrollment_status: EnrollmentStatus,
    #[serde(default)]
    pub meetings: Vec<Meeting>,
}

impl Section {
    pub fn key(&self) -> SectionKey {
        SectionKey::new(self.semester.clone(), self.class_number)
    }

    /// True when both sections are the same kind of meeting for the same course.
    pub fn same_course_component(&self, other: &Section) -> bool {
        self.subject == other.subject
            && self.catalog_number == other.catalog_number
            && self.component == other.component
    }
}
