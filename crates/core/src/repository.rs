//! # Repository capabilities
//!
//! The storage operations the service layer needs, expressed as traits so a
//! store is handed in rather than looked up. The Postgres store in
//! `advisor-db` implements all three; tests use the mocks in [`crate::mock`].

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AdvisorResult;
use crate::models::{Schedule, Section, SectionKey, User};

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Returns the student's schedule, creating an empty one on first access.
    async fn get_or_create_schedule(&self, student_id: Uuid) -> AdvisorResult<Schedule>;

    /// Persists the section set, visibility flag and approval of `schedule`.
    async fn save_schedule(&self, schedule: &Schedule) -> AdvisorResult<()>;
}

#[async_trait]
pub trait SectionRepository: Send + Sync {
    async fn get_section(&self, key: &SectionKey) -> AdvisorResult<Option<Section>>;

    /// Inserts or refreshes a section keyed by (semester, class number).
    async fn upsert_section(&self, section: &Section) -> AdvisorResult<()>;

    async fn sections_for_semester(&self, semester: &str) -> AdvisorResult<Vec<Section>>;

    async fn delete_section(&self, key: &SectionKey) -> AdvisorResult<()>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_user(&self, id: Uuid) -> AdvisorResult<Option<User>>;

    async fn find_user_by_username(&self, username: &str) -> AdvisorResult<Option<User>>;

    async fn set_advisor(&self, student_id: Uuid, advisor_id: Option<Uuid>) -> AdvisorResult<()>;

    async fn advisees_of(&self, advisor_id: Uuid) -> AdvisorResult<Vec<User>>;

    /// Non-advisor users whose first name, last name or username contains `query`.
    async fn search_students(&self, query: &str) -> AdvisorResult<Vec<User>>;
}
