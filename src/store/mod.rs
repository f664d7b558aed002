//! Persistence seam for documents and users.
//!
//! Handlers and the lifecycle code only see `dyn Store`; PostgreSQL backs
//! it in production and the in-memory store backs tests and local runs.

mod memory;
mod postgres;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::document::{Document, NewDocument};
use crate::models::user::{NewUser, User, UserCredentials};

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait Store: Send + Sync {
    /// Documents with status 1, newest submission first.
    async fn active_documents(&self) -> Result<Vec<Document>, AppError>;
    async fn find_document(&self, id: i64) -> Result<Option<Document>, AppError>;
    async fn insert_document(&self, new: NewDocument) -> Result<Document, AppError>;
    /// Whole-row replacement keyed by `doc.id`. `NotFound` if the row is gone.
    async fn save_document(&self, doc: &Document) -> Result<(), AppError>;
    async fn count_documents(&self) -> Result<i64, AppError>;

    async fn users(&self) -> Result<Vec<User>, AppError>;
    async fn find_user(&self, id: i64) -> Result<Option<User>, AppError>;
    async fn find_credentials(&self, email: &str) -> Result<Option<UserCredentials>, AppError>;
    async fn insert_user(&self, new: NewUser) -> Result<User, AppError>;
    async fn count_users(&self) -> Result<i64, AppError>;
}
