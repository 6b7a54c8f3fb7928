use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::constraints::{self, MAX_NAME_LENGTH, MIN_NAME_LENGTH};

/// Author entity. Exactly one author may exist per user account.
#[derive(Clone, Debug, Validate, sqlx::FromRow)]
pub struct Author {
    pub id: Option<i64>,
    #[validate(
        custom(function = constraints::not_blank),
        length(min = MIN_NAME_LENGTH, max = MAX_NAME_LENGTH)
    )]
    pub username: String,
    #[validate(range(min = 1))]
    pub user_id: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Author {
    pub fn new(username: String, user_id: i64) -> Self {
        Self {
            id: None,
            username,
            user_id,
            created_at: None,
            updated_at: None,
        }
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        matches!((self.id, other.id), (Some(a), Some(b)) if a == b)
    }
}

/// Inbound registration form: the username plus the owning user's id.
#[derive(Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRegistrationForm {
    #[validate(
        custom(function = constraints::not_blank),
        length(min = MIN_NAME_LENGTH, max = MAX_NAME_LENGTH)
    )]
    pub username: String,
    #[validate(range(min = 1))]
    pub user_id: i64,
}

/// Inbound username update form.
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct AuthorUsernameForm {
    #[validate(
        custom(function = constraints::not_blank),
        length(min = MIN_NAME_LENGTH, max = MAX_NAME_LENGTH)
    )]
    pub username: String,
}

/// Outbound author projection, flattening the owning user's names.
#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AuthorShortResponse {
    pub id: i64,
    pub username: String,
    pub user_first_name: String,
    pub user_last_name: String,
}
