use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::event::{Event, EventPublishingForm, EventWithBody, EventWithoutBody};
use crate::validation;

#[derive(Clone)]
pub struct EventService {
    pool: SqlitePool,
}

impl EventService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List shape: excludes the event body and status.
    pub async fn get_all_without_body(&self) -> Result<Vec<EventWithoutBody>, AppError> {
        let events = sqlx::query_as::<_, EventWithoutBody>(
            "SELECT e.id, e.title, e.timing, e.capacity, e.author_id, \
             au.username AS author_username \
             FROM events e JOIN authors au ON au.id = e.author_id ORDER BY e.id",
        )
        .fetch_all(&self.pool)
        .await?;
        if events.is_empty() {
            return Err(AppError::NotFound("No events found".into()));
        }
        Ok(events)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<EventWithBody, AppError> {
        sqlx::query_as::<_, EventWithBody>(
            "SELECT e.id, e.title, e.content AS body, e.timing, e.capacity, e.status, \
             e.author_id, au.username AS author_username \
             FROM events e JOIN authors au ON au.id = e.author_id WHERE e.id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event with ID: {id} not found.")))
    }

    /// Publishes a new event. The status always starts out `SCHEDULED`.
    pub async fn publish(&self, form: EventPublishingForm) -> Result<EventWithBody, AppError> {
        let event = Event::new(
            form.title,
            form.content,
            form.timing,
            form.capacity,
            form.author_id,
        );
        validation::validate(&event)?;

        let mut tx = self.pool.begin().await?;
        let author_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM authors WHERE id = ?)")
                .bind(event.author_id)
                .fetch_one(tx.as_mut())
                .await?;
        if !author_exists {
            return Err(AppError::NotFound(format!(
                "Author with ID: {} not found.",
                event.author_id
            )));
        }

        let now = Utc::now();
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO events (title, content, timing, capacity, status, author_id, \
             created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(&event.title)
        .bind(&event.content)
        .bind(event.timing)
        .bind(event.capacity)
        .bind(event.status)
        .bind(event.author_id)
        .bind(now)
        .bind(now)
        .fetch_one(tx.as_mut())
        .await?;
        tx.commit().await?;

        self.get_by_id(id).await
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let deleted = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if deleted.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Event with ID: {id} not found.")));
        }
        Ok(())
    }
}
