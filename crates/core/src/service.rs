//! # Advisor service
//!
//! The calling layer between request handling and the schedule engine. It
//! resolves students, advisors, schedules and sections through the injected
//! repository, checks who is allowed to do what, runs the engine on the
//! resolved [`Schedule`] and saves the result only when the engine succeeds.
//!
//! Mutations against one schedule are expected to be serialized by the
//! caller; the service itself holds no locks.

use tracing::{debug, info};
use uuid::Uuid;

use crate::catalog::CatalogQuery;
use crate::errors::{AdvisorError, AdvisorResult};
use crate::models::{Decision, Schedule, Section, SectionKey, User};
use crate::repository::{ScheduleRepository, SectionRepository, UserRepository};

pub struct AdvisorService<R> {
    repo: R,
}

impl<R> AdvisorService<R>
where
    R: ScheduleRepository + SectionRepository + UserRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    async fn require_user(&self, id: Uuid) -> AdvisorResult<User> {
        self.repo
            .get_user(id)
            .await?
            .ok_or_else(|| AdvisorError::NotFound(format!("User with ID {id} not found")))
    }

    async fn require_student(&self, id: Uuid) -> AdvisorResult<User> {
        let user = self.require_user(id).await?;
        if user.is_advisor {
            return Err(AdvisorError::Authorization("You are not a student".into()));
        }
        Ok(user)
    }

    async fn require_advisor(&self, id: Uuid) -> AdvisorResult<User> {
        let user = self.require_user(id).await?;
        if !user.is_advisor {
            return Err(AdvisorError::Authorization("You are not an advisor".into()));
        }
        Ok(user)
    }

    async fn require_advisee(&self, advisor: &User, student_id: Uuid) -> AdvisorResult<User> {
        let student = self.require_student(student_id).await?;
        if !student.is_advised_by(advisor.id) {
            return Err(AdvisorError::Authorization(
                "You are not this student's advisor".into(),
            ));
        }
        Ok(student)
    }

    async fn require_section(&self, key: &SectionKey) -> AdvisorResult<Section> {
        self.repo
            .get_section(key)
            .await?
            .ok_or_else(|| AdvisorError::NotFound(format!("Section {key} not found")))
    }

    pub async fn schedule_for(&self, student_id: Uuid) -> AdvisorResult<Schedule> {
        self.require_student(student_id).await?;
        self.repo.get_or_create_schedule(student_id).await
    }

    /// Adds the section to the student's schedule if the engine admits it.
    pub async fn add_section(&self, student_id: Uuid, key: &SectionKey) -> AdvisorResult<Schedule> {
        self.require_student(student_id).await?;
        let mut schedule = self.repo.get_or_create_schedule(student_id).await?;
        let section = self.require_section(key).await?;

        schedule.add_section(section)?;
        self.repo.save_schedule(&schedule).await?;

        info!("Added section {} to schedule {}", key, schedule.id);
        Ok(schedule)
    }

    pub async fn remove_section(
        &self,
        student_id: Uuid,
        key: &SectionKey,
    ) -> AdvisorResult<Schedule> {
        self.require_student(student_id).await?;
        let mut schedule = self.repo.get_or_create_schedule(student_id).await?;

        schedule.remove_section(key)?;
        self.repo.save_schedule(&schedule).await?;

        info!("Removed section {} from schedule {}", key, schedule.id);
        Ok(schedule)
    }

    /// Shows or hides the schedule from the student's advisor.
    pub async fn set_visibility(&self, student_id: Uuid, visible: bool) -> AdvisorResult<Schedule> {
        let student = self.require_student(student_id).await?;
        if student.advisor_id.is_none() {
            return Err(AdvisorError::Validation("You do not have an advisor".into()));
        }

        let mut schedule = self.repo.get_or_create_schedule(student_id).await?;
        schedule.set_visibility(visible);
        self.repo.save_schedule(&schedule).await?;

        debug!("Schedule {} visible={}", schedule.id, visible);
        Ok(schedule)
    }

    pub async fn record_decision(
        &self,
        advisor_id: Uuid,
        student_id: Uuid,
        decision: Decision,
    ) -> AdvisorResult<Schedule> {
        let advisor = self.require_advisor(advisor_id).await?;
        self.require_advisee(&advisor, student_id).await?;

        let mut schedule = self.repo.get_or_create_schedule(student_id).await?;
        schedule.decide(decision);
        self.repo.save_schedule(&schedule).await?;

        info!(
            "Advisor {} set schedule {} to {:?}",
            advisor.username, schedule.id, schedule.approval
        );
        Ok(schedule)
    }

    /// A visible schedule of one of the advisor's own advisees.
    pub async fn advisee_schedule(
        &self,
        advisor_id: Uuid,
        student_id: Uuid,
    ) -> AdvisorResult<Schedule> {
        let advisor = self.require_advisor(advisor_id).await?;
        self.require_advisee(&advisor, student_id).await?;

        let schedule = self.repo.get_or_create_schedule(student_id).await?;
        if !schedule.visible {
            return Err(AdvisorError::Authorization(
                "This schedule is not shared with you".into(),
            ));
        }
        Ok(schedule)
    }

    pub async fn assign_advisee(&self, advisor_id: Uuid, username: &str) -> AdvisorResult<User> {
        let advisor = self.require_advisor(advisor_id).await?;
        let mut student = self
            .repo
            .find_user_by_username(username)
            .await?
            .ok_or_else(|| AdvisorError::NotFound(format!("User {username} not found")))?;

        if student.is_advisor {
            return Err(AdvisorError::Validation(format!("{username} is not a student")));
        }
        match student.advisor_id {
            Some(current) if current == advisor.id => return Ok(student),
            Some(_) => {
                return Err(AdvisorError::Authorization(format!(
                    "{} already has another advisor",
                    student.display_name()
                )));
            }
            None => {}
        }

        self.repo.set_advisor(student.id, Some(advisor.id)).await?;
        student.advisor_id = Some(advisor.id);

        info!("{} now advises {}", advisor.username, student.display_name());
        Ok(student)
    }

    pub async fn release_advisee(&self, advisor_id: Uuid, username: &str) -> AdvisorResult<User> {
        let advisor = self.require_advisor(advisor_id).await?;
        let mut student = self
            .repo
            .find_user_by_username(username)
            .await?
            .ok_or_else(|| AdvisorError::NotFound(format!("User {username} not found")))?;

        if !student.is_advised_by(advisor.id) {
            return Err(AdvisorError::Authorization(
                "You are not this student's advisor".into(),
            ));
        }

        self.repo.set_advisor(student.id, None).await?;
        student.advisor_id = None;

        info!("{} no longer advises {}", advisor.username, student.display_name());
        Ok(student)
    }

    pub async fn advisees(&self, advisor_id: Uuid) -> AdvisorResult<Vec<User>> {
        self.require_advisor(advisor_id).await?;
        self.repo.advisees_of(advisor_id).await
    }

    pub async fn search_students(&self, advisor_id: Uuid, query: &str) -> AdvisorResult<Vec<User>> {
        self.require_advisor(advisor_id).await?;
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        self.repo.search_students(query).await
    }

    /// Catalog search within one semester.
    pub async fn search_catalog(&self, query: &CatalogQuery) -> AdvisorResult<Vec<Section>> {
        let semester = query
            .semester
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AdvisorError::Validation("A semester is required to search".into()))?;

        let sections = self.repo.sections_for_semester(semester).await?;
        Ok(query.apply(sections))
    }
}
