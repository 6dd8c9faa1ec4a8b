//! Postgres-backed implementation of the core repository traits.

use advisor_core::errors::AdvisorResult;
use advisor_core::models::{Schedule, Section, SectionKey, User};
use advisor_core::repository::{ScheduleRepository, SectionRepository, UserRepository};
use async_trait::async_trait;
use uuid::Uuid;

use crate::DbPool;
use crate::models::DbSection;
use crate::repositories::{schedule as schedules, section as sections, user as users};

#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

fn into_sections(rows: Vec<DbSection>) -> eyre::Result<Vec<Section>> {
    rows.into_iter().map(Section::try_from).collect()
}

#[async_trait]
impl ScheduleRepository for PgStore {
    async fn get_or_create_schedule(&self, student_id: Uuid) -> AdvisorResult<Schedule> {
        let row = schedules::get_or_create_schedule(&self.pool, student_id).await?;
        let rows = sections::get_sections_by_schedule_id(&self.pool, row.id).await?;
        Ok(row.into_schedule(into_sections(rows)?))
    }

    async fn save_schedule(&self, schedule: &Schedule) -> AdvisorResult<()> {
        schedules::save_schedule(&self.pool, schedule).await?;
        Ok(())
    }
}

#[async_trait]
impl SectionRepository for PgStore {
    async fn get_section(&self, key: &SectionKey) -> AdvisorResult<Option<Section>> {
        let row = sections::get_section(&self.pool, &key.semester, key.class_number).await?;
        Ok(row.map(Section::try_from).transpose()?)
    }

    async fn upsert_section(&self, section: &Section) -> AdvisorResult<()> {
        sections::upsert_section(&self.pool, section).await?;
        Ok(())
    }

    async fn sections_for_semester(&self, semester: &str) -> AdvisorResult<Vec<Section>> {
        let rows = sections::get_sections_by_semester(&self.pool, semester).await?;
        Ok(into_sections(rows)?)
    }

    async fn delete_section(&self, key: &SectionKey) -> AdvisorResult<()> {
        sections::delete_section(&self.pool, &key.semester, key.class_number).await?;
        Ok(())
    }
}

#[async_trait]
impl UserRepository for PgStore {
    async fn get_user(&self, id: Uuid) -> AdvisorResult<Option<User>> {
        Ok(users::get_user_by_id(&self.pool, id).await?.map(User::from))
    }

    async fn find_user_by_username(&self, username: &str) -> AdvisorResult<Option<User>> {
        Ok(users::get_user_by_username(&self.pool, username)
            .await?
            .map(User::from))
    }

    async fn set_advisor(&self, student_id: Uuid, advisor_id: Option<Uuid>) -> AdvisorResult<()> {
        users::set_advisor(&self.pool, student_id, advisor_id).await?;
        Ok(())
    }

    async fn advisees_of(&self, advisor_id: Uuid) -> AdvisorResult<Vec<User>> {
        let rows = users::get_advisees(&self.pool, advisor_id).await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn search_students(&self, query: &str) -> AdvisorResult<Vec<User>> {
        let rows = users::search_students(&self.pool, query).await?;
        Ok(rows.into_iter().map(User::from).collect())
    }
}
