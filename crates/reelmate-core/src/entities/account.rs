//! Principal kinds and the capabilities shared by every account entity

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::Snowflake;

/// Role encoded in every session token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    User,
    FoodPartner,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::FoodPartner => "foodPartner",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entity that can authenticate
///
/// Implemented once per principal kind. The associated role is what a
/// token must carry to be accepted for routes restricted to that kind.
pub trait Account: Clone + Send + Sync + 'static {
    const ROLE: Role;

    fn id(&self) -> Snowflake;

    fn email(&self) -> &str;
}
