use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::constraints::{self, MAX_GALLERY_NAME_LENGTH};

/// Gallery artist entity.
#[derive(Clone, Debug, Validate, sqlx::FromRow)]
pub struct Artist {
    pub id: Option<i64>,
    #[validate(
        custom(function = constraints::not_blank),
        length(max = MAX_GALLERY_NAME_LENGTH)
    )]
    pub first_name: String,
    #[validate(
        custom(function = constraints::not_blank),
        length(max = MAX_GALLERY_NAME_LENGTH)
    )]
    pub last_name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Artist {
    pub fn new(first_name: String, last_name: String) -> Self {
        Self {
            id: None,
            first_name,
            last_name,
            created_at: None,
            updated_at: None,
        }
    }
}

impl PartialEq for Artist {
    fn eq(&self, other: &Self) -> bool {
        matches!((self.id, other.id), (Some(a), Some(b)) if a == b)
    }
}

#[derive(Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ArtistRegistrationForm {
    #[validate(
        custom(function = constraints::not_blank),
        length(max = MAX_GALLERY_NAME_LENGTH)
    )]
    pub first_name: String,
    #[validate(
        custom(function = constraints::not_blank),
        length(max = MAX_GALLERY_NAME_LENGTH)
    )]
    pub last_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ArtistResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}
