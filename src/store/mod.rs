//! Persistence layer: a `users` table and a `questions` table. Answers are
//! embedded in their question as a JSONB array, so a question and its answers
//! form one atomically-updated document.

pub mod models;
pub mod questions;
pub mod users;

use anyhow::{Context, Result};
use sqlx::PgPool;

const CREATE_USERS: &str = "CREATE TABLE IF NOT EXISTS users (
    id UUID PRIMARY KEY,
    username TEXT UNIQUE NOT NULL,
    email TEXT UNIQUE NOT NULL,
    password TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
)";

const CREATE_QUESTIONS: &str = "CREATE TABLE IF NOT EXISTS questions (
    id UUID PRIMARY KEY,
    title TEXT NOT NULL,
    body TEXT NOT NULL,
    created_by TEXT NOT NULL,
    author_id UUID NOT NULL REFERENCES users (id),
    answers JSONB NOT NULL DEFAULT '[]'::jsonb,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
)";

/// Ensure the schema exists.
///
/// # Errors
/// Returns an error if either statement fails.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(CREATE_USERS)
        .execute(pool)
        .await
        .context("Failed to create users table")?;

    sqlx::query(CREATE_QUESTIONS)
        .execute(pool)
        .await
        .context("Failed to create questions table")?;

    Ok(())
}

/// Whether a sqlx error is a Postgres unique-constraint violation.
#[must_use]
pub fn is_unique_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|code| code == "23505")
}
