use chrono::Utc;
use sqlx::types::Json;
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::article::{
    Article, ArticlePublishingForm, ArticleUpdateForm, ArticleWithContent, ArticleWithoutContent,
};
use crate::validation;

#[derive(Clone)]
pub struct ArticleService {
    pool: SqlitePool,
}

impl ArticleService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List shape: excludes the article body.
    pub async fn get_all_without_content(&self) -> Result<Vec<ArticleWithoutContent>, AppError> {
        let articles = sqlx::query_as::<_, ArticleWithoutContent>(
            "SELECT a.id, a.title, a.tags, a.author_id, au.username AS author_username, \
             a.created_at \
             FROM articles a JOIN authors au ON au.id = a.author_id ORDER BY a.id",
        )
        .fetch_all(&self.pool)
        .await?;
        if articles.is_empty() {
            return Err(AppError::NotFound("No articles found".into()));
        }
        Ok(articles)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ArticleWithContent, AppError> {
        sqlx::query_as::<_, ArticleWithContent>(
            "SELECT a.id, a.title, a.content, a.tags, a.author_id, \
             au.username AS author_username, a.created_at \
             FROM articles a JOIN authors au ON au.id = a.author_id WHERE a.id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Article with ID: {id} not found.")))
    }

    /// Publishes a new article after resolving the owning author.
    pub async fn publish(&self, form: ArticlePublishingForm) -> Result<ArticleWithContent, AppError> {
        let article = Article::new(form.title, form.content, form.tags, form.author_id);
        validation::validate(&article)?;

        let mut tx = self.pool.begin().await?;
        let author_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM authors WHERE id = ?)")
                .bind(article.author_id)
                .fetch_one(tx.as_mut())
                .await?;
        if !author_exists {
            return Err(AppError::NotFound(format!(
                "Author with ID: {} not found.",
                article.author_id
            )));
        }

        let now = Utc::now();
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO articles (title, content, tags, author_id, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(&article.title)
        .bind(&article.content)
        .bind(Json(&article.tags))
        .bind(article.author_id)
        .bind(now)
        .bind(now)
        .fetch_one(tx.as_mut())
        .await?;
        tx.commit().await?;

        self.get_by_id(id).await
    }

    /// Partial update: only title and content are mutable.
    pub async fn update(
        &self,
        id: i64,
        form: ArticleUpdateForm,
    ) -> Result<ArticleWithContent, AppError> {
        let updated = sqlx::query(
            "UPDATE articles SET title = ?, content = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&form.title)
        .bind(&form.content)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;
        if updated.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Article with ID: {id} not found."
            )));
        }
        self.get_by_id(id).await
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let deleted = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if deleted.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Article with ID: {id} not found."
            )));
        }
        Ok(())
    }
}
