use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::errors::AdvisorResult;
use crate::models::{Schedule, Section, SectionKey, User};
use crate::repository::{ScheduleRepository, SectionRepository, UserRepository};

// Mock store implementing every repository capability, for service tests
mock! {
    pub Store {}

    #[async_trait]
    impl ScheduleRepository for Store {
        async fn get_or_create_schedule(&self, student_id: Uuid) -> AdvisorResult<Schedule>;
        async fn save_schedule(&self, schedule: &Schedule) -> AdvisorResult<()>;
    }

    #[async_trait]
    impl SectionRepository for Store {
        async fn get_section(&self, key: &SectionKey) -> AdvisorResult<Option<Section>>;
        async fn upsert_section(&self, section: &Section) -> AdvisorResult<()>;
        async fn sections_for_semester(&self, semester: &str) -> AdvisorResult<Vec<Section>>;
        async fn delete_section(&self, key: &SectionKey) -> AdvisorResult<()>;
    }

    #[async_trait]
    impl UserRepository for Store {
        async fn get_user(&self, id: Uuid) -> AdvisorResult<Option<User>>;
        async fn find_user_by_username(&self, username: &str) -> AdvisorResult<Option<User>>;
        async fn set_advisor(&self, student_id: Uuid, advisor_id: Option<Uuid>) -> AdvisorResult<()>;
        async fn advisees_of(&self, advisor_id: Uuid) -> AdvisorResult<Vec<User>>;
        async fn search_students(&self, query: &str) -> AdvisorResult<Vec<User>>;
    }
}
