use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::constraints::{
    self, MAX_CONTENT_LENGTH, MAX_TITLE_LENGTH, MIN_CONTENT_LENGTH, MIN_TITLE_LENGTH,
};

/// Lifecycle status of a museum event. Assigned by the server, never by the
/// client; new events always start out `SCHEDULED`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum EventStatus {
    Scheduled,
    Active,
    Full,
    Transferred,
    Canceled,
    Archived,
}

/// Museum event entity, owned by exactly one author.
#[derive(Clone, Debug, Validate, sqlx::FromRow)]
pub struct Event {
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
    #[validate(custom(function = constraints::future))]
    pub timing: DateTime<Utc>,
    #[validate(range(min = 1))]
    pub capacity: i64,
    pub status: EventStatus,
    #[validate(range(min = 1))]
    pub author_id: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Event {
    pub fn new(
        title: String,
        content: String,
        timing: DateTime<Utc>,
        capacity: i64,
        author_id: i64,
    ) -> Self {
        Self {
            id: None,
            title,
            content,
            timing,
            capacity,
            status: EventStatus::Scheduled,
            author_id,
            created_at: None,
            updated_at: None,
        }
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        matches!((self.id, other.id), (Some(a), Some(b)) if a == b)
    }
}

/// Inbound publishing form. Status is not accepted from the client.
#[derive(Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EventPublishingForm {
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
    #[validate(custom(function = constraints::future))]
    pub timing: DateTime<Utc>,
    #[validate(range(min = 1))]
    pub capacity: i64,
    #[validate(range(min = 1))]
    pub author_id: i64,
}

/// Full read projection used for single-item retrieval.
#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct EventWithBody {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub timing: DateTime<Utc>,
    pub capacity: i64,
    pub status: EventStatus,
    pub author_id: i64,
    pub author_username: String,
}

/// Summary projection used for list endpoints; excludes the body.
#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct EventWithoutBody {
    pub id: i64,
    pub title: String,
    pub timing: DateTime<Utc>,
    pub capacity: i64,
    pub author_id: i64,
    pub author_username: String,
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use validator::Validate;

    use super::*;

    fn valid_event() -> Event {
        Event::new(
            "Night at the museum".into(),
            "An evening tour through the renaissance wing with a guide.".into(),
            Utc::now() + Duration::days(7),
            50,
            1,
        )
    }

    #[test]
    fn valid_event_has_no_violations() {
        assert!(valid_event().validate().is_ok());
    }

    #[test]
    fn new_events_are_scheduled() {
        assert_eq!(valid_event().status, EventStatus::Scheduled);
    }

    #[test]
    fn capacity_must_be_positive() {
        let mut event = valid_event();
        event.capacity = -5;
        let errors = event.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("capacity"));
        assert_eq!(errors.field_errors().len(), 1);

        event.capacity = 0;
        assert!(event.validate().is_err());
    }

    #[test]
    fn timing_must_be_in_the_future() {
        let mut event = valid_event();
        event.timing = Utc::now() - Duration::hours(1);
        let errors = event.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("timing"));
    }

    #[test]
    fn violations_are_collected_not_fail_fast() {
        let mut event = valid_event();
        event.title = "No".into();
        event.capacity = -1;
        event.timing = Utc::now() - Duration::hours(1);
        let errors = event.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 3);
    }

    #[test]
    fn status_serializes_uppercase() {
        let json = serde_json::to_value(EventStatus::Scheduled).unwrap();
        assert_eq!(json, "SCHEDULED");
    }

    #[test]
    fn summary_projection_has_no_body_or_status() {
        let summary = EventWithoutBody {
            id: 1,
            title: "Night at the museum".into(),
            timing: Utc::now(),
            capacity: 50,
            author_id: 1,
            author_username: "jdoe".into(),
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("body").is_none());
        assert!(json.get("status").is_none());
    }
}
