use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::document::{self, Document, NewDocument};
use crate::models::user::{self, NewUser, User, UserCredentials};

use super::Store;

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn active_documents(&self) -> Result<Vec<Document>, AppError> {
        Ok(document::queries::find_active(&self.pool).await?)
    }

    async fn find_document(&self, id: i64) -> Result<Option<Document>, AppError> {
        Ok(document::queries::find_by_id(&self.pool, id).await?)
    }

    async fn insert_document(&self, new: NewDocument) -> Result<Document, AppError> {
        Ok(document::queries::create(&self.pool, &new).await?)
    }

    async fn save_document(&self, doc: &Document) -> Result<(), AppError> {
        if document::queries::save(&self.pool, doc).await? {
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }

    async fn count_documents(&self) -> Result<i64, AppError> {
        Ok(document::queries::count(&self.pool).await?)
    }

    async fn users(&self) -> Result<Vec<User>, AppError> {
        Ok(user::queries::find_all(&self.pool).await?)
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(user::queries::find_by_id(&self.pool, id).await?)
    }

    async fn find_credentials(&self, email: &str) -> Result<Option<UserCredentials>, AppError> {
        Ok(user::queries::find_credentials_by_email(&self.pool, email).await?)
    }

    async fn insert_user(&self, new: NewUser) -> Result<User, AppError> {
        Ok(user::queries::create(&self.pool, &new).await?)
    }

    async fn count_users(&self) -> Result<i64, AppError> {
        Ok(user::queries::count(&self.pool).await?)
    }
}
