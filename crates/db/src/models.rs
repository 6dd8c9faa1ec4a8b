use advisor_core::models::{Approval, EnrollmentStatus, Meeting, Schedule, Section, User};
use chrono::{DateTime, Utc};
use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_advisor: bool,
    pub advisor_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<DbUser> for User {
    fn from(row: DbUser) -> Self {
        User {
            id: row.id,
            username: row.username,
            first_name: row.first_name,
            last_name: row.last_name,
            is_advisor: row.is_advisor,
            advisor_id: row.advisor_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSection {
    pub semester: String,
    pub class_number: i32,
    pub name: String,
    pub subject: String,
    pub catalog_number: String,
    pub class_section: String,
    pub component: String,
    pub units: String,
    pub enrollment_status: String,
    pub meetings: Json<Vec<Meeting>>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<DbSection> for Section {
    type Error = eyre::Report;

    fn try_from(row: DbSection) -> Result<Self> {
        let enrollment_status = EnrollmentStatus::from_code(&row.enrollment_status)
            .wrap_err_with(|| {
                format!(
                    "Stored section {}/{} has a bad enrollment status",
                    row.semester, row.class_number
                )
            })?;

        Ok(Section {
            semester: row.semester,
            class_number: row.class_number,
            name: row.name,
            subject: row.subject,
            catalog_number: row.catalog_number,
            class_section: row.class_section,
            component: row.component,
            units: row.units,
            enrollment_status,
            meetings: row.meetings.0,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSchedule {
    pub id: Uuid,
    pub student_id: Uuid,
    pub visible: bool,
    pub approved: Option<bool>,
    pub created_at: DateTime<Utc>,
}

impl DbSchedule {
    pub fn into_schedule(self, sections: Vec<Section>) -> Schedule {
        Schedule::from_parts(
            self.id,
            self.student_id,
            sections,
            self.visible,
            Approval::from_flag(self.approved),
        )
    }
}
