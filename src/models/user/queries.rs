use sqlx::PgPool;

use super::types::{NewUser, User, UserCredentials};

const SELECT_USER: &str = "SELECT id, name, email, permissions, created_at, updated_at FROM users";

/// All users ordered by id, for the assignment dropdown.
pub async fn find_all(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("{SELECT_USER} ORDER BY id"))
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("{SELECT_USER} WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Find login credentials by email (case-insensitive).
pub async fn find_credentials_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<UserCredentials>, sqlx::Error> {
    sqlx::query_as::<_, UserCredentials>(
        "SELECT id, password FROM users WHERE lower(email) = lower($1)",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
}

/// Insert a user and return the stored row.
pub async fn create(pool: &PgPool, new: &NewUser) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (name, email, password, permissions) VALUES ($1, $2, $3, $4) \
         RETURNING id, name, email, permissions, created_at, updated_at",
    )
    .bind(&new.name)
    .bind(&new.email)
    .bind(&new.password)
    .bind(new.permissions)
    .fetch_one(pool)
    .await
}
