use auth::TokenPair;
use chrono::DateTime;
use chrono::Utc;

use crate::user::models::EmailAddress;
use crate::user::models::PersonName;
use crate::user::models::PhoneNumber;
use crate::user::models::UserId;

/// Latest token pair handed out to a user.
///
/// One record per user; every signup, login and refresh overwrites it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub user_id: UserId,
    pub access_token: String,
    pub refresh_token: String,
    pub updated_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn new(user_id: UserId, tokens: &TokenPair, updated_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            access_token: tokens.access_token.clone(),
            refresh_token: tokens.refresh_token.clone(),
            updated_at,
        }
    }
}

/// Command to register a new user with domain types
#[derive(Debug)]
pub struct SignupCommand {
    pub email: EmailAddress,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub phone: PhoneNumber,
    pub password: String,
}

/// Command to log in with email and password
#[derive(Debug)]
pub struct LoginCommand {
    pub email: EmailAddress,
    pub password: String,
}
