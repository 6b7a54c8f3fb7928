use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::author::{Author, AuthorRegistrationForm, AuthorShortResponse};
use crate::validation;

const AUTHOR_ALREADY_EXISTS: &str = "Author already exists";

#[derive(Clone)]
pub struct AuthorService {
    pool: SqlitePool,
}

impl AuthorService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_all(&self) -> Result<Vec<AuthorShortResponse>, AppError> {
        let authors = sqlx::query_as::<_, AuthorShortResponse>(
            "SELECT a.id, a.username, u.first_name AS user_first_name, \
             u.last_name AS user_last_name \
             FROM authors a JOIN users u ON u.id = a.user_id ORDER BY a.id",
        )
        .fetch_all(&self.pool)
        .await?;
        if authors.is_empty() {
            return Err(AppError::NotFound("No authors was found.".into()));
        }
        Ok(authors)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<AuthorShortResponse, AppError> {
        sqlx::query_as::<_, AuthorShortResponse>(
            "SELECT a.id, a.username, u.first_name AS user_first_name, \
             u.last_name AS user_last_name \
             FROM authors a JOIN users u ON u.id = a.user_id WHERE a.id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author with ID: {id} not found.")))
    }

    /// Registers an author for an existing user. Both the username and the
    /// one-author-per-user rule are pre-checked in the insert transaction.
    pub async fn register(
        &self,
        form: AuthorRegistrationForm,
    ) -> Result<AuthorShortResponse, AppError> {
        let author = Author::new(form.username, form.user_id);
        validation::validate(&author)?;

        let mut tx = self.pool.begin().await?;
        let taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM authors WHERE username = ? OR user_id = ?)",
        )
        .bind(&author.username)
        .bind(author.user_id)
        .fetch_one(tx.as_mut())
        .await?;
        if taken {
            return Err(AppError::AlreadyExists(AUTHOR_ALREADY_EXISTS.into()));
        }

        let user_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = ?)")
                .bind(author.user_id)
                .fetch_one(tx.as_mut())
                .await?;
        if !user_exists {
            return Err(AppError::NotFound(format!(
                "User with ID: {} not found",
                author.user_id
            )));
        }

        let now = Utc::now();
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO authors (username, user_id, created_at, updated_at) \
             VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(&author.username)
        .bind(author.user_id)
        .bind(now)
        .bind(now)
        .fetch_one(tx.as_mut())
        .await?;
        tx.commit().await?;

        self.get_by_id(id).await
    }

    pub async fn update_username(
        &self,
        id: i64,
        username: String,
    ) -> Result<AuthorShortResponse, AppError> {
        let mut tx = self.pool.begin().await?;
        let taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM authors WHERE username = ? AND id <> ?)",
        )
        .bind(&username)
        .bind(id)
        .fetch_one(tx.as_mut())
        .await?;
        if taken {
            return Err(AppError::AlreadyExists(AUTHOR_ALREADY_EXISTS.into()));
        }

        let updated = sqlx::query("UPDATE authors SET username = ?, updated_at = ? WHERE id = ?")
            .bind(&username)
            .bind(Utc::now())
            .bind(id)
            .execute(tx.as_mut())
            .await?;
        if updated.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Author with ID: {id} not found."
            )));
        }
        tx.commit().await?;

        self.get_by_id(id).await
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let deleted = sqlx::query("DELETE FROM authors WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if deleted.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Author with ID: {id} not found."
            )));
        }
        Ok(())
    }
}
