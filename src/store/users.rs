//! Credential store queries. Conflict handling and error mapping stay with
//! the handlers; this module speaks plain sqlx.

use crate::store::models::User;
use sqlx::{PgPool, Row};

/// Whether a user with the given email or username already exists.
///
/// # Errors
/// Returns the underlying sqlx error on query failure.
pub async fn exists(pool: &PgPool, email: &str, username: &str) -> Result<bool, sqlx::Error> {
    let row = sqlx::query(
        "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1 OR username = $2) AS exists",
    )
    .bind(email)
    .bind(username)
    .fetch_one(pool)
    .await?;

    Ok(row.get("exists"))
}

/// Persist a new user. The unique constraints on email and username are the
/// last line of defense against a concurrent duplicate registration.
///
/// # Errors
/// Returns the underlying sqlx error on insert failure.
pub async fn insert(pool: &PgPool, user: &User) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO users (id, username, email, password, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(user.id)
    .bind(&user.username)
    .bind(&user.email)
    .bind(&user.password)
    .bind(user.created_at)
    .bind(user.updated_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Look up a user by email. Used only by login.
///
/// # Errors
/// Returns the underlying sqlx error on query failure.
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let row = sqlx::query(
        "SELECT id, username, email, password, created_at, updated_at
         FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    row.map(|row| {
        Ok(User {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            email: row.try_get("email")?,
            password: row.try_get("password")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    })
    .transpose()
}
