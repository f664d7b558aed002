use sqlx::PgPool;

use super::types::{Document, NewDocument};

const SELECT_DOCUMENT: &str = "\
    SELECT id, name, description, priority, status, date_submitted, date_approved, url, user_id \
    FROM documents";

/// All active documents, newest submission first.
pub async fn find_active(pool: &PgPool) -> Result<Vec<Document>, sqlx::Error> {
    sqlx::query_as::<_, Document>(&format!(
        "{SELECT_DOCUMENT} WHERE status = 1 ORDER BY date_submitted DESC, id DESC"
    ))
    .fetch_all(pool)
    .await
}

/// Find a document by id regardless of status.
pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Document>, sqlx::Error> {
    sqlx::query_as::<_, Document>(&format!("{SELECT_DOCUMENT} WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Insert an active, unapproved document and return the stored row.
pub async fn create(pool: &PgPool, new: &NewDocument) -> Result<Document, sqlx::Error> {
    sqlx::query_as::<_, Document>(
        "INSERT INTO documents (name, description, priority, status, date_submitted, date_approved, url, user_id) \
         VALUES ($1, $2, $3, 1, $4, NULL, $5, $6) \
         RETURNING id, name, description, priority, status, date_submitted, date_approved, url, user_id",
    )
    .bind(&new.name)
    .bind(&new.description)
    .bind(new.priority)
    .bind(new.date_submitted)
    .bind(&new.url)
    .bind(new.user_id)
    .fetch_one(pool)
    .await
}

/// Replace every mutable column of one row. Returns false if the id is unknown.
pub async fn save(pool: &PgPool, doc: &Document) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE documents SET name = $2, description = $3, priority = $4, status = $5, \
         date_approved = $6, url = $7, user_id = $8, updated_at = now() \
         WHERE id = $1",
    )
    .bind(doc.id)
    .bind(&doc.name)
    .bind(&doc.description)
    .bind(doc.priority)
    .bind(doc.status)
    .bind(doc.date_approved)
    .bind(&doc.url)
    .bind(doc.user_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() == 1)
}

pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM documents")
        .fetch_one(pool)
        .await
}
