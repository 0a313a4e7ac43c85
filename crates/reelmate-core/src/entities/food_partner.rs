//! Food partner entity - a business account that publishes video posts

use chrono::{DateTime, Utc};

use super::account::{Account, Role};
use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodPartner {
    pub id: Snowflake,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub contact_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FoodPartner {
    /// Create a partner with only the required fields set
    pub fn new(id: Snowflake, name: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            email,
            phone: None,
            address: None,
            contact_name: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_contact(
        mut self,
        phone: Option<String>,
        address: Option<String>,
        contact_name: Option<String>,
    ) -> Self {
        self.phone = phone;
        self.address = address;
        self.contact_name = contact_name;
        self
    }
}

impl Account for FoodPartner {
    const ROLE: Role = Role::FoodPartner;

    fn id(&self) -> Snowflake {
        self.id
    }

    fn email(&self) -> &str {
        &self.email
    }
}
