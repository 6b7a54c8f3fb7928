use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::artwork::{Artwork, ArtworkRegistrationForm, ArtworkResponse};
use crate::validation;

#[derive(Clone)]
pub struct ArtworkService {
    pool: SqlitePool,
}

impl ArtworkService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_all(&self) -> Result<Vec<ArtworkResponse>, AppError> {
        let artworks = sqlx::query_as::<_, ArtworkResponse>(
            "SELECT id, name, price, artist_id FROM artworks ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        if artworks.is_empty() {
            return Err(AppError::NotFound("No artworks found".into()));
        }
        Ok(artworks)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ArtworkResponse, AppError> {
        sqlx::query_as::<_, ArtworkResponse>(
            "SELECT id, name, price, artist_id FROM artworks WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Artwork with id: {id} not found")))
    }

    /// Saves a new artwork. Names are globally unique; the owning artist
    /// must exist.
    pub async fn save(&self, form: ArtworkRegistrationForm) -> Result<ArtworkResponse, AppError> {
        let artwork = Artwork::new(form.name, form.price, form.artist_id);
        validation::validate(&artwork)?;

        let mut tx = self.pool.begin().await?;
        let taken =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM artworks WHERE name = ?)")
                .bind(&artwork.name)
                .fetch_one(tx.as_mut())
                .await?;
        if taken {
            return Err(AppError::AlreadyExists(format!(
                "Artwork with name: {} already exist.",
                artwork.name
            )));
        }

        let artist_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM artists WHERE id = ?)")
                .bind(artwork.artist_id)
                .fetch_one(tx.as_mut())
                .await?;
        if !artist_exists {
            return Err(AppError::NotFound(format!(
                "Artist with id: {} not found",
                artwork.artist_id
            )));
        }

        let now = Utc::now();
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO artworks (name, price, artist_id, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(&artwork.name)
        .bind(artwork.price)
        .bind(artwork.artist_id)
        .bind(now)
        .bind(now)
        .fetch_one(tx.as_mut())
        .await?;
        tx.commit().await?;

        self.get_by_id(id).await
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let deleted = sqlx::query("DELETE FROM artworks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if deleted.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Artwork with id: {id} not found"
            )));
        }
        Ok(())
    }
}
