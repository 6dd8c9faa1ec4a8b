use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create users table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            username VARCHAR(150) NOT NULL UNIQUE,
            first_name VARCHAR(150) NOT NULL DEFAULT '',
            last_name VARCHAR(150) NOT NULL DEFAULT '',
            is_advisor BOOLEAN NOT NULL DEFAULT FALSE,
            advisor_id UUID NULL REFERENCES users(id) ON DELETE SET NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create sections table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS sections (
            semester VARCHAR(10) NOT NULL,
            class_number INTEGER NOT NULL,
            name VARCHAR(400) NOT NULL DEFAULT '',
            subject VARCHAR(10) NOT NULL,
            catalog_number VARCHAR(10) NOT NULL,
            class_section VARCHAR(10) NOT NULL DEFAULT '',
            component VARCHAR(10) NOT NULL,
            units VARCHAR(10) NOT NULL DEFAULT '',
            enrollment_status VARCHAR(1) NOT NULL,
            meetings JSONB NOT NULL DEFAULT '[]'::jsonb,
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            PRIMARY KEY (semester, class_number),
            CONSTRAINT valid_enrollment_status CHECK (enrollment_status IN ('O', 'W', 'C'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create schedules table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schedules (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            student_id UUID NOT NULL UNIQUE REFERENCES users(id) ON DELETE CASCADE,
            visible BOOLEAN NOT NULL DEFAULT FALSE,
            approved BOOLEAN NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create schedule_sections table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schedule_sections (
            schedule_id UUID NOT NULL REFERENCES schedules(id) ON DELETE CASCADE,
            semester VARCHAR(10) NOT NULL,
            class_number INTEGER NOT NULL,
            PRIMARY KEY (schedule_id, semester, class_number),
            FOREIGN KEY (semester, class_number)
                REFERENCES sections(semester, class_number) ON DELETE CASCADE
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_users_advisor_id ON users(advisor_id)",
        "CREATE INDEX IF NOT EXISTS idx_sections_subject ON sections(semester, subject, catalog_number)",
        "CREATE INDEX IF NOT EXISTS idx_schedule_sections_schedule_id ON schedule_sections(schedule_id)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
