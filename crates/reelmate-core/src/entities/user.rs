//! User entity - an end user who browses, likes, and saves posts

use chrono::{DateTime, Utc};

use super::account::{Account, Role};
use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub fullname: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: Snowflake, fullname: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            fullname,
            email,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Account for User {
    const ROLE: Role = Role::User;

    fn id(&self) -> Snowflake {
        self.id
    }

    fn email(&self) -> &str {
        &self.email
    }
}
