use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::artist::{Artist, ArtistRegistrationForm, ArtistResponse};
use crate::validation;

#[derive(Clone)]
pub struct ArtistService {
    pool: SqlitePool,
}

impl ArtistService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_all(&self) -> Result<Vec<ArtistResponse>, AppError> {
        let artists = sqlx::query_as::<_, ArtistResponse>(
            "SELECT id, first_name, last_name FROM artists ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        if artists.is_empty() {
            return Err(AppError::NotFound("No artists found".into()));
        }
        Ok(artists)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ArtistResponse, AppError> {
        sqlx::query_as::<_, ArtistResponse>(
            "SELECT id, first_name, last_name FROM artists WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Artist with id: {id} not found")))
    }

    pub async fn register(&self, form: ArtistRegistrationForm) -> Result<ArtistResponse, AppError> {
        let artist = Artist::new(form.first_name, form.last_name);
        validation::validate(&artist)?;

        let now = Utc::now();
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO artists (first_name, last_name, created_at, updated_at) \
             VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(&artist.first_name)
        .bind(&artist.last_name)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Deleting an artist removes their artworks as well; ownership is
    /// exclusive.
    pub async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let deleted = sqlx::query("DELETE FROM artists WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if deleted.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Artist with id: {id} not found")));
        }
        Ok(())
    }
}
