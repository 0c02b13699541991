//! Question store queries. Each question row carries its answers as a JSONB
//! array; appending an answer is a single UPDATE, so concurrent appends to
//! the same question both land.

use crate::store::models::{Answer, Question};
use sqlx::{postgres::PgRow, types::Json, PgPool, Row};
use uuid::Uuid;

const QUESTION_COLUMNS: &str =
    "id, title, body, created_by, author_id, answers, created_at, updated_at";

fn question_from_row(row: &PgRow) -> Result<Question, sqlx::Error> {
    let answers: Json<Vec<Answer>> = row.try_get("answers")?;

    Ok(Question {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        body: row.try_get("body")?,
        created_by: row.try_get("created_by")?,
        author_id: row.try_get("author_id")?,
        answers: answers.0,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

/// All questions, newest first.
///
/// # Errors
/// Returns the underlying sqlx error on query failure.
pub async fn list(pool: &PgPool) -> Result<Vec<Question>, sqlx::Error> {
    let rows = sqlx::query(&format!(
        "SELECT {QUESTION_COLUMNS} FROM questions ORDER BY created_at DESC"
    ))
    .fetch_all(pool)
    .await?;

    rows.iter().map(question_from_row).collect()
}

/// A single question with its answers.
///
/// # Errors
/// Returns the underlying sqlx error on query failure.
pub async fn get(pool: &PgPool, id: Uuid) -> Result<Option<Question>, sqlx::Error> {
    let row = sqlx::query(&format!(
        "SELECT {QUESTION_COLUMNS} FROM questions WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(question_from_row).transpose()
}

/// Persist a new question. Answers start empty.
///
/// # Errors
/// Returns the underlying sqlx error on insert failure.
pub async fn insert(pool: &PgPool, question: &Question) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO questions (id, title, body, created_by, author_id, answers, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
    )
    .bind(question.id)
    .bind(&question.title)
    .bind(&question.body)
    .bind(&question.created_by)
    .bind(question.author_id)
    .bind(Json(&question.answers))
    .bind(question.created_at)
    .bind(question.updated_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Append an answer to a question and return the updated question, or `None`
/// if the question does not exist.
///
/// The append is one atomic UPDATE (`answers || $2::jsonb`), not a
/// load-mutate-save cycle.
///
/// # Errors
/// Returns the underlying sqlx error on update failure.
pub async fn append_answer(
    pool: &PgPool,
    question_id: Uuid,
    answer: &Answer,
) -> Result<Option<Question>, sqlx::Error> {
    let row = sqlx::query(&format!(
        "UPDATE questions
         SET answers = answers || $2::jsonb, updated_at = $3
         WHERE id = $1
         RETURNING {QUESTION_COLUMNS}"
    ))
    .bind(question_id)
    .bind(Json(std::slice::from_ref(answer)))
    .bind(answer.created_at)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(question_from_row).transpose()
}
