#[cfg(feature = "ssr")]
use chrono::{NaiveDate, Utc};
#[cfg(feature = "ssr")]
use shared_types::{Appointment, AppointmentStatus, Article, ArticleDraft, NewAppointment};
#[cfg(feature = "ssr")]
use sqlx::Row;

/// Postgres error code for a unique-constraint violation.
pub const UNIQUE_VIOLATION: &str = "23505";

pub fn is_conflict_code(code: Option<&str>) -> bool {
    code == Some(UNIQUE_VIOLATION)
}

#[cfg(feature = "ssr")]
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// The (booked_date, booked_slot) pair is already taken. The unique
    /// constraint in the appointments table is the sole arbiter here.
    #[error("slot already booked")]
    SlotTaken,
    #[error("invalid booking date: {0}")]
    InvalidDate(String),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

#[cfg(feature = "ssr")]
pub type DbResult<T> = Result<T, DbError>;

#[cfg(feature = "ssr")]
fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => is_conflict_code(db.code().as_deref()),
        _ => false,
    }
}

// ---- articles ----

/// Maps a stored article row onto the shared DTO. Column naming is the
/// storage contract; this is the single place the mapping is applied.
#[cfg(feature = "ssr")]
fn map_article(row: &sqlx::postgres::PgRow) -> Article {
    Article {
        id: row.get("id"),
        title: row.get("title"),
        excerpt: row.get("excerpt"),
        content: row.get("content"),
        category: row.get::<String, _>("category").into(),
        date: row.get("date"),
        image_url: row.get("image_url"),
        is_featured: row.get("is_featured"),
    }
}

#[cfg(feature = "ssr")]
pub async fn list_articles() -> DbResult<Vec<Article>> {
    let pool = crate::db::pool::get_pool();

    let rows = sqlx::query(
        "SELECT id, title, excerpt, content, category, date, image_url, is_featured
         FROM articles
         ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(map_article).collect())
}

#[cfg(feature = "ssr")]
pub async fn insert_article(draft: &ArticleDraft) -> DbResult<()> {
    let pool = crate::db::pool::get_pool();

    sqlx::query(
        "INSERT INTO articles (title, excerpt, content, category, date, image_url, is_featured)
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(&draft.title)
    .bind(&draft.excerpt)
    .bind(&draft.content)
    .bind(draft.category.label())
    .bind(&draft.date)
    .bind(&draft.image_url)
    .bind(draft.is_featured)
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(feature = "ssr")]
pub async fn update_article(article: &Article) -> DbResult<()> {
    let pool = crate::db::pool::get_pool();

    sqlx::query(
        "UPDATE articles
         SET title = $1, excerpt = $2, content = $3, category = $4,
             date = $5, image_url = $6, is_featured = $7
         WHERE id = $8",
    )
    .bind(&article.title)
    .bind(&article.excerpt)
    .bind(&article.content)
    .bind(article.category.label())
    .bind(&article.date)
    .bind(&article.image_url)
    .bind(article.is_featured)
    .bind(article.id)
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(feature = "ssr")]
pub async fn delete_article(id: i64) -> DbResult<()> {
    let pool = crate::db::pool::get_pool();

    sqlx::query("DELETE FROM articles WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

// ---- appointments ----

#[cfg(feature = "ssr")]
fn map_appointment(row: &sqlx::postgres::PgRow) -> Appointment {
    let status: String = row.get("status");
    Appointment {
        id: row.get("id"),
        name: row.get("name"),
        phone: row.get("phone"),
        purpose: row.get("purpose"),
        created_at: row
            .get::<chrono::DateTime<Utc>, _>("created_at")
            .to_rfc3339(),
        booked_date: row.get::<NaiveDate, _>("booked_date").to_string(),
        booked_slot: row.get("booked_slot"),
        status: AppointmentStatus::parse(&status).unwrap_or(AppointmentStatus::Pending),
    }
}

#[cfg(feature = "ssr")]
pub async fn list_appointments() -> DbResult<Vec<Appointment>> {
    let pool = crate::db::pool::get_pool();

    let rows = sqlx::query(
        "SELECT id, name, phone, purpose, created_at, booked_date, booked_slot, status
         FROM appointments
         ORDER BY booked_date ASC, booked_slot ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(map_appointment).collect())
}

/// Inserts a new Pending appointment stamped with the current instant.
/// A unique violation on (booked_date, booked_slot) comes back as
/// `DbError::SlotTaken` so callers can surface it distinctly.
#[cfg(feature = "ssr")]
pub async fn insert_appointment(request: &NewAppointment) -> DbResult<()> {
    let pool = crate::db::pool::get_pool();

    let booked_date = NaiveDate::parse_from_str(&request.booked_date, "%Y-%m-%d")
        .map_err(|_| DbError::InvalidDate(request.booked_date.clone()))?;

    sqlx::query(
        "INSERT INTO appointments (name, phone, purpose, created_at, booked_date, booked_slot, status)
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(&request.name)
    .bind(&request.phone)
    .bind(&request.purpose)
    .bind(Utc::now())
    .bind(booked_date)
    .bind(&request.booked_slot)
    .bind(AppointmentStatus::Pending.as_str())
    .execute(pool)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            DbError::SlotTaken
        } else {
            DbError::Sqlx(e)
        }
    })?;

    Ok(())
}

#[cfg(feature = "ssr")]
pub async fn update_appointment_status(id: i64, status: AppointmentStatus) -> DbResult<()> {
    let pool = crate::db::pool::get_pool();

    sqlx::query("UPDATE appointments SET status = $1 WHERE id = $2")
        .bind(status.as_str())
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

#[cfg(feature = "ssr")]
pub async fn delete_appointment(id: i64) -> DbResult<()> {
    let pool = crate::db::pool::get_pool();

    sqlx::query("DELETE FROM appointments WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

// ---- admins ----

#[cfg(feature = "ssr")]
#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
}

#[cfg(feature = "ssr")]
pub async fn find_admin_by_email(email: &str) -> DbResult<Option<AdminAccount>> {
    let pool = crate::db::pool::get_pool();

    let row = sqlx::query("SELECT id, email, password_hash FROM admins WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| AdminAccount {
        id: row.get("id"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_postgres_unique_violation_counts_as_a_conflict() {
        assert!(is_conflict_code(Some("23505")));
        assert!(!is_conflict_code(Some("23503")));
        assert!(!is_conflict_code(None));
    }
}
