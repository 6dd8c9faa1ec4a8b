use crate::models::DbSchedule;
use advisor_core::models::Schedule;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Fetches the student's schedule row, inserting an empty one if none exists yet.
pub async fn get_or_create_schedule(pool: &Pool<Postgres>, student_id: Uuid) -> Result<DbSchedule> {
    tracing::debug!("Getting or creating schedule for student {}", student_id);

    sqlx::query(
        r#"
        INSERT INTO schedules (id, student_id, visible, approved, created_at)
        VALUES ($1, $2, FALSE, NULL, $3)
        ON CONFLICT (student_id) DO NOTHING
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(student_id)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    let schedule = sqlx::query_as::<_, DbSchedule>(
        r#"
        SELECT id, student_id, visible, approved, created_at
        FROM schedules
        WHERE student_id = $1
        "#,
    )
    .bind(student_id)
    .fetch_one(pool)
    .await?;

    Ok(schedule)
}

/// Writes visibility, approval and the full section set in one transaction.
pub async fn save_schedule(pool: &Pool<Postgres>, schedule: &Schedule) -> Result<()> {
    tracing::debug!(
        "Saving schedule {}: {} sections, visible={}, approval={:?}",
        schedule.id,
        schedule.len(),
        schedule.visible,
        schedule.approval
    );

    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        UPDATE schedules
        SET visible = $2, approved = $3
        WHERE id = $1
        "#,
    )
    .bind(schedule.id)
    .bind(schedule.visible)
    .bind(schedule.approval.as_flag())
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        DELETE FROM schedule_sections
        WHERE schedule_id = $1
        "#,
    )
    .bind(schedule.id)
    .execute(&mut *tx)
    .await?;

    for key in schedule.section_keys() {
        sqlx::query(
            r#"
            INSERT INTO schedule_sections (schedule_id, semester, class_number)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(schedule.id)
        .bind(&key.semester)
        .bind(key.class_number)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::debug!("Schedule saved successfully: id={}", schedule.id);
    Ok(())
}
