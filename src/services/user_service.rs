use chrono::Utc;
use sqlx::types::Json;
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::user::{AddressForm, User, UserRegistrationForm, UserResponse};
use crate::validation;

#[derive(Clone)]
pub struct UserService {
    pool: SqlitePool,
}

impl UserService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_all(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = sqlx::query_as::<_, UserResponse>(
            "SELECT id, first_name, last_name, email FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        if users.is_empty() {
            return Err(AppError::NotFound("No users found".into()));
        }
        Ok(users)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<UserResponse, AppError> {
        sqlx::query_as::<_, UserResponse>(
            "SELECT id, first_name, last_name, email FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User with ID: {id} not found")))
    }

    /// Registers a new user. Email uniqueness is pre-checked inside the
    /// insert transaction; the schema's unique constraint settles races.
    pub async fn register(&self, form: UserRegistrationForm) -> Result<UserResponse, AppError> {
        let user = User::new(form.first_name, form.last_name, form.email, form.password);
        validation::validate(&user)?;

        let mut tx = self.pool.begin().await?;
        let taken =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = ?)")
                .bind(&user.email)
                .fetch_one(tx.as_mut())
                .await?;
        if taken {
            return Err(AppError::AlreadyExists(format!(
                "User with email: {} already exist.",
                user.email
            )));
        }

        let now = Utc::now();
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO users (first_name, last_name, email, password, roles, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(Json(&user.roles))
        .bind(now)
        .bind(now)
        .fetch_one(tx.as_mut())
        .await?;
        tx.commit().await?;

        self.get_by_id(id).await
    }

    /// Replaces the embedded address of an existing user.
    pub async fn update_address(
        &self,
        id: i64,
        form: AddressForm,
    ) -> Result<UserResponse, AppError> {
        let mut tx = self.pool.begin().await?;
        let mut user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(tx.as_mut())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with ID: {id} not found")))?;
        user.set_address(form.into());

        sqlx::query(
            "UPDATE users SET address_city = ?, address_street = ?, address_number = ?, \
             address_apartment = ?, address_zip = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&user.address_city)
        .bind(&user.address_street)
        .bind(&user.address_number)
        .bind(&user.address_apartment)
        .bind(&user.address_zip)
        .bind(Utc::now())
        .bind(id)
        .execute(tx.as_mut())
        .await?;
        tx.commit().await?;

        self.get_by_id(id).await
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let deleted = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if deleted.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User with ID: {id} not found")));
        }
        Ok(())
    }
}
