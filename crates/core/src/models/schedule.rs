use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::section::{Section, SectionKey};

/// Advisor verdict on a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Approval {
    Approved,
    Rejected,
    #[default]
    Undecided,
}

impl Approval {
    /// Storage form: `Some(true)` approved, `Some(false)` rejected, `None` undecided.
    pub fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => Approval::Approved,
            Some(false) => Approval::Rejected,
            None => Approval::Undecided,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Approval::Approved => Some(true),
            Approval::Rejected => Some(false),
            Approval::Undecided => None,
        }
    }
}

/// What an advisor can submit for a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approve,
    Reject,
    Clear,
}

impl From<Decision> for Approval {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Approve => Approval::Approved,
            Decision::Reject => Approval::Rejected,
            Decision::Clear => Approval::Undecided,
        }
    }
}

/// A student's chosen sections plus advisor-facing metadata.
///
/// Sections form a set keyed by [`SectionKey`]. The set only changes through
/// `add_section` / `remove_section`, and every change puts the approval back
/// to [`Approval::Undecided`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ScheduleParts")]
pub struct Schedule {
    pub id: Uuid,
    pub student_id: Uuid,
    pub(crate) sections: Vec<Section>,
    pub visible: bool,
    pub approval: Approval,
}

/// Wire form of [`Schedule`]; deserialization goes through [`Schedule::from_parts`].
#[derive(Deserialize)]
struct ScheduleParts {
    id: Uuid,
    student_id: Uuid,
    #[serde(default)]
    sections: Vec<Section>,
    visible: bool,
    approval: Approval,
}

impl From<ScheduleParts> for Schedule {
    fn from(parts: ScheduleParts) -> Self {
        Schedule::from_parts(
            parts.id,
            parts.student_id,
            parts.sections,
            parts.visible,
            parts.approval,
        )
    }
}

impl Schedule {
    pub fn new(student_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            student_id,
            sections: Vec::new(),
            visible: false,
            approval: Approval::Undecided,
        }
    }

    /// Rebuilds a stored schedule. Repeated keys collapse to the first occurrence.
    pub fn from_parts(
        id: Uuid,
        student_id: Uuid,
        sections: Vec<Section>,
        visible: bool,
        approval: Approval,
    ) -> Self {
        let mut unique: Vec<Section> = Vec::with_capacity(sections.len());
        for section in sections {
            if !unique.iter().any(|s| s.key() == section.key()) {
                unique.push(section);
            }
        }

        Self {
            id,
            student_id,
            sections: unique,
            visible,
            approval,
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section_keys(&self) -> Vec<SectionKey> {
        self.sections.iter().map(Section::key).collect()
    }

    pub fn contains(&self, key: &SectionKey) -> bool {
        self.sections.iter().any(|s| &s.key() == key)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Shows or hides the schedule from the advisor. Any prior verdict is dropped.
    pub fn set_visibility(&mut self, visible: bool) {
        self.visible = visible;
        self.reset_approval();
    }

    /// Records an advisor verdict, overwriting any earlier one.
    pub fn decide(&mut self, decision: Decision) {
        self.approval = decision.into();
    }

    pub(crate) fn reset_approval(&mut self) {
        self.approval = Approval::Undecided;
    }
}
