use crate::models::DbSection;
use advisor_core::models::Section;
use chrono::Utc;
use eyre::Result;
use sqlx::types::Json;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

const SECTION_COLUMNS: &str = "semester, class_number, name, subject, catalog_number, \
    class_section, component, units, enrollment_status, meetings, updated_at";

pub async fn upsert_section(pool: &Pool<Postgres>, section: &Section) -> Result<DbSection> {
    tracing::debug!(
        "Upserting section {}/{} ({} {} {})",
        section.semester,
        section.class_number,
        section.subject,
        section.catalog_number,
        section.component
    );

    let row = sqlx::query_as::<_, DbSection>(&format!(
        r#"
        INSERT INTO sections ({SECTION_COLUMNS})
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        ON CONFLICT (semester, class_number)
        DO UPDATE SET
            name = EXCLUDED.name,
            subject = EXCLUDED.subject,
            catalog_number = EXCLUDED.catalog_number,
            class_section = EXCLUDED.class_section,
            component = EXCLUDED.component,
            units = EXCLUDED.units,
            enrollment_status = EXCLUDED.enrollment_status,
            meetings = EXCLUDED.meetings,
            updated_at = EXCLUDED.updated_at
        RETURNING {SECTION_COLUMNS}
        "#
    ))
    .bind(&section.semester)
    .bind(section.class_number)
    .bind(&section.name)
    .bind(&section.subject)
    .bind(&section.catalog_number)
    .bind(&section.class_section)
    .bind(&section.component)
    .bind(&section.units)
    .bind(section.enrollment_status.code())
    .bind(Json(&section.meetings))
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn get_section(
    pool: &Pool<Postgres>,
    semester: &str,
    class_number: i32,
) -> Result<Option<DbSection>> {
    let row = sqlx::query_as::<_, DbSection>(&format!(
        r#"
        SELECT {SECTION_COLUMNS}
        FROM sections
        WHERE semester = $1 AND class_number = $2
        "#
    ))
    .bind(semester)
    .bind(class_number)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn get_sections_by_semester(
    pool: &Pool<Postgres>,
    semester: &str,
) -> Result<Vec<DbSection>> {
    let rows = sqlx::query_as::<_, DbSection>(&format!(
        r#"
        SELECT {SECTION_COLUMNS}
        FROM sections
        WHERE semester = $1
        ORDER BY subject, catalog_number, class_section, component
        "#
    ))
    .bind(semester)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn get_sections_by_schedule_id(
    pool: &Pool<Postgres>,
    schedule_id: Uuid,
) -> Result<Vec<DbSection>> {
    let rows = sqlx::query_as::<_, DbSection>(
        r#"
        SELECT s.semester, s.class_number, s.name, s.subject, s.catalog_number,
               s.class_section, s.component, s.units, s.enrollment_status,
               s.meetings, s.updated_at
        FROM schedule_sections ss
        JOIN sections s
          ON s.semester = ss.semester AND s.class_number = ss.class_number
        WHERE ss.schedule_id = $1
        ORDER BY s.subject, s.catalog_number, s.class_section
        "#,
    )
    .bind(schedule_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn delete_section(pool: &Pool<Postgres>, semester: &str, class_number: i32) -> Result<()> {
    tracing::debug!("Deleting section {}/{}", semester, class_number);

    sqlx::query(
        r#"
        DELETE FROM sections
        WHERE semester = $1 AND class_number = $2
        "#,
    )
    .bind(semester)
    .bind(class_number)
    .execute(pool)
    .await?;

    Ok(())
}
