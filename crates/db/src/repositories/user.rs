use crate::models::DbUser;
use eyre::{Result, eyre};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn get_user_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbUser>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, username, first_name, last_name, is_advisor, advisor_id, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn get_user_by_username(pool: &Pool<Postgres>, username: &str) -> Result<Option<DbUser>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, username, first_name, last_name, is_advisor, advisor_id, created_at
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn set_advisor(
    pool: &Pool<Postgres>,
    student_id: Uuid,
    advisor_id: Option<Uuid>,
) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET advisor_id = $2
        WHERE id = $1
        "#,
    )
    .bind(student_id)
    .bind(advisor_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(eyre!("User not found"));
    }
    Ok(())
}

pub async fn get_advisees(pool: &Pool<Postgres>, advisor_id: Uuid) -> Result<Vec<DbUser>> {
    let users = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, username, first_name, last_name, is_advisor, advisor_id, created_at
        FROM users
        WHERE advisor_id = $1
        ORDER BY last_name, first_name, username
        "#,
    )
    .bind(advisor_id)
    .fetch_all(pool)
    .await?;

    Ok(users)
}

/// `%query%` with LIKE wildcards in `query` escaped.
pub fn like_pattern(query: &str) -> String {
    let escaped = query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

pub async fn search_students(pool: &Pool<Postgres>, query: &str) -> Result<Vec<DbUser>> {
    let pattern = like_pattern(query);

    let users = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, username, first_name, last_name, is_advisor, advisor_id, created_at
        FROM users
        WHERE is_advisor = FALSE
          AND (first_name ILIKE $1 OR last_name ILIKE $1 OR username ILIKE $1)
        ORDER BY last_name, first_name, username
        "#,
    )
    .bind(pattern)
    .fetch_all(pool)
    .await?;

    Ok(users)
}
