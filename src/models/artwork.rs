use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::constraints::{self, MAX_GALLERY_NAME_LENGTH};

/// Gallery artwork entity. Names are globally unique; each artwork belongs
/// to exactly one artist.
#[derive(Clone, Debug, Validate, sqlx::FromRow)]
pub struct Artwork {
    pub id: Option<i64>,
    #[validate(
        custom(function = constraints::not_blank),
        length(max = MAX_GALLERY_NAME_LENGTH)
    )]
    pub name: String,
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
    #[validate(range(min = 1))]
    pub artist_id: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Artwork {
    pub fn new(name: String, price: f64, artist_id: i64) -> Self {
        Self {
            id: None,
            name,
            price,
            artist_id,
            created_at: None,
            updated_at: None,
        }
    }
}

impl PartialEq for Artwork {
    fn eq(&self, other: &Self) -> bool {
        matches!((self.id, other.id), (Some(a), Some(b)) if a == b)
    }
}

#[derive(Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkRegistrationForm {
    #[validate(
        custom(function = constraints::not_blank),
        length(max = MAX_GALLERY_NAME_LENGTH)
    )]
    pub name: String,
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
    #[validate(range(min = 1))]
    pub artist_id: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkResponse {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub artist_id: i64,
}
