use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::constraints::{
    self, MAX_CONTENT_LENGTH, MAX_TITLE_LENGTH, MIN_CONTENT_LENGTH, MIN_TITLE_LENGTH,
};

/// Topic tag attached to an article. An article may carry none.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArticleTag {
    ArtHistory,
    Exhibitions,
    Events,
    Archaeology,
    Interviews,
    BehindTheScenes,
}

/// Museum article entity, owned by exactly one author.
#[derive(Clone, Debug, Validate, sqlx::FromRow)]
pub struct Article {
    pub id: Option<i64>,
    #[validate(
        custom(function = constraints::not_blank),
        length(min = MIN_TITLE_LENGTH, max = MAX_TITLE_LENGTH)
    )]
    pub title: String,
    #[validate(
        custom(function = constraints::not_blank),
        length(min = MIN_CONTENT_LENGTH, max = MAX_CONTENT_LENGTH)
    )]
    pub content: String,
    #[sqlx(json)]
    pub tags: BTreeSet<ArticleTag>,
    #[validate(range(min = 1))]
    pub author_id: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Article {
    pub fn new(title: String, content: String, tags: BTreeSet<ArticleTag>, author_id: i64) -> Self {
        Self {
            id: None,
            title,
            content,
            tags,
            author_id,
            created_at: None,
            updated_at: None,
        }
    }
}

impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        matches!((self.id, other.id), (Some(a), Some(b)) if a == b)
    }
}

/// Inbound publishing form. Tags default to the empty set.
#[derive(Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePublishingForm {
    #[validate(
        custom(function = constraints::not_blank),
        length(min = MIN_TITLE_LENGTH, max = MAX_TITLE_LENGTH)
    )]
    pub title: String,
    #[validate(
        custom(function = constraints::not_blank),
        length(min = MIN_CONTENT_LENGTH, max = MAX_CONTENT_LENGTH)
    )]
    pub content: String,
    #[serde(default)]
    pub tags: BTreeSet<ArticleTag>,
    #[validate(range(min = 1))]
    pub author_id: i64,
}

/// Inbound partial-update form: only title and content are mutable.
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct ArticleUpdateForm {
    #[validate(
        custom(function = constraints::not_blank),
        length(min = MIN_TITLE_LENGTH, max = MAX_TITLE_LENGTH)
    )]
    pub title: String,
    #[validate(
        custom(function = constraints::not_blank),
        length(min = MIN_CONTENT_LENGTH, max = MAX_CONTENT_LENGTH)
    )]
    pub content: String,
}

/// Full read projection used for single-item retrieval.
#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ArticleWithContent {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[sqlx(json)]
    pub tags: BTreeSet<ArticleTag>,
    pub author_id: i64,
    pub author_username: String,
    pub created_at: DateTime<Utc>,
}

/// Summary projection used for list endpoints; excludes the body to bound
/// response size.
#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ArticleWithoutContent {
    pub id: i64,
    pub title: String,
    #[sqlx(json)]
    pub tags: BTreeSet<ArticleTag>,
    pub author_id: i64,
    pub author_username: String,
    pub created_at: DateTime<Utc>,
}
