//! # Schedule Conflict Engine
//!
//! Decides whether a candidate section may join a schedule and applies the
//! add/remove mutations. Rules run in a fixed order and the first one that
//! fails names the [`Rejection`]:
//!
//! 1. the section is already scheduled
//! 2. enrollment is closed (waitlisted is fine)
//! 3. some scheduled section is from another semester
//! 4. some scheduled section meets at an overlapping time
//! 5. some scheduled section is the same subject, catalog number and component
//!
//! Each rule is checked against every scheduled section before the next rule
//! starts. Both mutations are all-or-nothing.

use tracing::debug;

use crate::errors::{AdvisorError, AdvisorResult, Rejection};
use crate::meetings::sections_overlap;
use crate::models::{EnrollmentStatus, Schedule, Section, SectionKey};

impl Schedule {
    /// Runs the admissibility rules and returns the first one that fails.
    ///
    /// `Ok(None)` means the candidate is admissible. A malformed meeting time
    /// on either side of a same-day comparison is an error, not a rejection.
    pub fn check_addition(&self, candidate: &Section) -> AdvisorResult<Option<Rejection>> {
        let candidate_key = candidate.key();

        if self.contains(&candidate_key) {
            return Ok(Some(Rejection::AlreadyPresent));
        }

        if candidate.enrollment_status == EnrollmentStatus::Closed {
            return Ok(Some(Rejection::Closed));
        }

        if self
            .sections
            .iter()
            .any(|existing| existing.semester != candidate.semester)
        {
            return Ok(Some(Rejection::SemesterMismatch));
        }

        for existing in &self.sections {
            if sections_overlap(existing, candidate)? {
                return Ok(Some(Rejection::TimeConflict));
            }
        }

        if self
            .sections
            .iter()
            .any(|existing| existing.same_course_component(candidate))
        {
            return Ok(Some(Rejection::DuplicateComponent));
        }

        Ok(None)
    }

    pub fn can_add(&self, candidate: &Section) -> AdvisorResult<bool> {
        Ok(self.check_addition(candidate)?.is_none())
    }

    /// Adds `candidate` if every rule passes, resetting the approval.
    ///
    /// On any error the schedule is left untouched.
    pub fn add_section(&mut self, candidate: Section) -> AdvisorResult<()> {
        if let Some(reason) = self.check_addition(&candidate)? {
            debug!(
                "Rejected {} for schedule {}: {}",
                candidate.key(),
                self.id,
                reason
            );
            return Err(AdvisorError::AddRejected(reason));
        }

        self.sections.push(candidate);
        self.reset_approval();
        Ok(())
    }

    /// Removes the section with `key`, resetting the approval, and hands it back.
    pub fn remove_section(&mut self, key: &SectionKey) -> AdvisorResult<Section> {
        let position = self
            .sections
            .iter()
            .position(|s| &s.key() == key)
            .ok_or_else(|| AdvisorError::RemoveRejected {
                semester: key.semester.clone(),
                class_number: key.class_number,
            })?;

        let removed = self.sections.remove(position);
        self.reset_approval();
        Ok(removed)
    }
}
