use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::permission::Capabilities;

/// User as exposed over the API. The password hash never leaves the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub permissions: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn capabilities(&self) -> Capabilities {
        Capabilities::for_level(self.permissions)
    }
}

/// User row plus password hash, used only by login.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserCredentials {
    pub id: i64,
    pub password: String,
}

/// New user data for creation. `password` is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub permissions: i16,
}

/// JSON body of `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}
