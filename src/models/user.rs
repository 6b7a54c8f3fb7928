use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::constraints::{self, EMAIL_REGEX, MAX_FIELD_LENGTH, MAX_NAME_LENGTH, MIN_NAME_LENGTH};

/// Role granted to a user account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Artist,
    Author,
    Admin,
}

/// Postal address embedded in the user record, stored as nullable columns.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub city: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub apartment: Option<String>,
    pub zip: Option<String>,
}

/// User account entity.
///
/// The password is stored exactly as supplied; the original system performs
/// no hashing and this port does not change that behaviour.
#[derive(Clone, Debug, Validate, sqlx::FromRow)]
pub struct User {
    pub id: Option<i64>,
    #[validate(
        custom(function = constraints::not_blank),
        length(min = MIN_NAME_LENGTH, max = MAX_NAME_LENGTH)
    )]
    pub first_name: String,
    #[validate(
        custom(function = constraints::not_blank),
        length(min = MIN_NAME_LENGTH, max = MAX_NAME_LENGTH)
    )]
    pub last_name: String,
    #[validate(regex(path = *EMAIL_REGEX), length(max = MAX_FIELD_LENGTH))]
    pub email: String,
    #[validate(custom(function = constraints::password))]
    pub password: String,
    pub address_city: Option<String>,
    pub address_street: Option<String>,
    pub address_number: Option<String>,
    pub address_apartment: Option<String>,
    pub address_zip: Option<String>,
    #[sqlx(json)]
    pub roles: BTreeSet<Role>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Builds a transient user with the `USER` role and no address.
    pub fn new(first_name: String, last_name: String, email: String, password: String) -> Self {
        Self {
            id: None,
            first_name,
            last_name,
            email,
            password,
            address_city: None,
            address_street: None,
            address_number: None,
            address_apartment: None,
            address_zip: None,
            roles: BTreeSet::from([Role::User]),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn set_address(&mut self, address: Address) {
        self.address_city = address.city;
        self.address_street = address.street;
        self.address_number = address.number;
        self.address_apartment = address.apartment;
        self.address_zip = address.zip;
    }
}

// Persisted-identity equality: two users are equal iff both carry the same
// storage-assigned id. A transient user compares unequal to everything,
// including itself, so only PartialEq is implemented.
impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        matches!((self.id, other.id), (Some(a), Some(b)) if a == b)
    }
}

/// Inbound registration form. Server-assigned fields are not accepted.
#[derive(Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserRegistrationForm {
    #[validate(
        custom(function = constraints::not_blank),
        length(min = MIN_NAME_LENGTH, max = MAX_NAME_LENGTH)
    )]
    pub first_name: String,
    #[validate(
        custom(function = constraints::not_blank),
        length(min = MIN_NAME_LENGTH, max = MAX_NAME_LENGTH)
    )]
    pub last_name: String,
    #[validate(regex(path = *EMAIL_REGEX), length(max = MAX_FIELD_LENGTH))]
    pub email: String,
    #[validate(custom(function = constraints::password))]
    pub password: String,
}

/// Inbound address update form. All parts are optional, matching the
/// embedded address columns; parts that are present must not be blank.
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct AddressForm {
    #[validate(custom(function = constraints::not_blank), length(max = MAX_FIELD_LENGTH))]
    pub city: Option<String>,
    #[validate(custom(function = constraints::not_blank), length(max = MAX_FIELD_LENGTH))]
    pub street: Option<String>,
    #[validate(custom(function = constraints::not_blank), length(max = MAX_FIELD_LENGTH))]
    pub number: Option<String>,
    #[validate(custom(function = constraints::not_blank), length(max = MAX_FIELD_LENGTH))]
    pub apartment: Option<String>,
    #[validate(custom(function = constraints::not_blank), length(max = MAX_FIELD_LENGTH))]
    pub zip: Option<String>,
}

impl From<AddressForm> for Address {
    fn from(form: AddressForm) -> Self {
        Address {
            city: form.city,
            street: form.street,
            number: form.number,
            apartment: form.apartment,
            zip: form.zip,
        }
    }
}

/// Outbound user projection. Never carries the password.
#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}
