use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::models::document::{Document, NewDocument, Status};
use crate::models::user::{NewUser, User, UserCredentials};

use super::Store;

#[derive(Default)]
struct Tables {
    documents: BTreeMap<i64, Document>,
    users: BTreeMap<i64, (User, String)>,
    next_document_id: i64,
    next_user_id: i64,
}

/// Process-local store. Ids start at 1 like a fresh sequence.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn active_documents(&self) -> Result<Vec<Document>, AppError> {
        let tables = self.tables.read().await;
        let mut docs: Vec<Document> = tables
            .documents
            .values()
            .filter(|d| d.status == Status::Active)
            .cloned()
            .collect();
        docs.sort_by(|a, b| b.date_submitted.cmp(&a.date_submitted).then(b.id.cmp(&a.id)));
        Ok(docs)
    }

    async fn find_document(&self, id: i64) -> Result<Option<Document>, AppError> {
        Ok(self.tables.read().await.documents.get(&id).cloned())
    }

    async fn insert_document(&self, new: NewDocument) -> Result<Document, AppError> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&new.user_id) {
            return Err(AppError::Internal(format!("user {} does not exist", new.user_id)));
        }
        tables.next_document_id += 1;
        let doc = Document {
            id: tables.next_document_id,
            name: new.name,
            description: new.description,
            priority: new.priority,
            status: Status::Active,
            date_submitted: new.date_submitted,
            date_approved: None,
            url: new.url,
            user_id: new.user_id,
        };
        tables.documents.insert(doc.id, doc.clone());
        Ok(doc)
    }

    async fn save_document(&self, doc: &Document) -> Result<(), AppError> {
        let mut tables = self.tables.write().await;
        match tables.documents.get_mut(&doc.id) {
            Some(row) => {
                *row = doc.clone();
                Ok(())
            }
            None => Err(AppError::NotFound),
        }
    }

    async fn count_documents(&self) -> Result<i64, AppError> {
        Ok(self.tables.read().await.documents.len() as i64)
    }

    async fn users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.tables.read().await.users.values().map(|(u, _)| u.clone()).collect())
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.tables.read().await.users.get(&id).map(|(u, _)| u.clone()))
    }

    async fn find_credentials(&self, email: &str) -> Result<Option<UserCredentials>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .values()
            .find(|(u, _)| u.email.eq_ignore_ascii_case(email))
            .map(|(u, hash)| UserCredentials { id: u.id, password: hash.clone() }))
    }

    async fn insert_user(&self, new: NewUser) -> Result<User, AppError> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|(u, _)| u.email.eq_ignore_ascii_case(&new.email)) {
            return Err(AppError::Internal(format!("email {} already registered", new.email)));
        }
        tables.next_user_id += 1;
        let now = Utc::now();
        let user = User {
            id: tables.next_user_id,
            name: new.name,
            email: new.email,
            permissions: new.permissions,
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(user.id, (user.clone(), new.password));
        Ok(user)
    }

    async fn count_users(&self) -> Result<i64, AppError> {
        Ok(self.tables.read().await.users.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::Priority;

    fn new_user(email: &str) -> NewUser {
        NewUser { name: "A".into(), email: email.into(), password: "hash".into(), permissions: 2 }
    }

    #[tokio::test]
    async fn withdrawn_documents_are_not_listed_but_still_found() {
        let store = MemoryStore::new();
        let owner = store.insert_user(new_user("a@example.com")).await.unwrap();
        let doc = store
            .insert_document(NewDocument {
                name: "n".into(),
                description: "d".into(),
                priority: Priority::Low,
                date_submitted: Utc::now(),
                url: "documents/x.pdf".into(),
                user_id: owner.id,
            })
            .await
            .unwrap();

        let mut withdrawn = doc.clone();
        withdrawn.status = Status::Withdrawn;
        store.save_document(&withdrawn).await.unwrap();

        assert!(store.active_documents().await.unwrap().is_empty());
        assert_eq!(store.find_document(doc.id).await.unwrap().unwrap().status, Status::Withdrawn);
    }

    #[tokio::test]
    async fn saving_unknown_document_is_not_found() {
        let store = MemoryStore::new();
        let ghost = Document {
            id: 42,
            name: String::new(),
            description: String::new(),
            priority: Priority::High,
            status: Status::Active,
            date_submitted: Utc::now(),
            date_approved: None,
            url: String::new(),
            user_id: 1,
        };
        assert!(matches!(store.save_document(&ghost).await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn credentials_lookup_ignores_email_case() {
        let store = MemoryStore::new();
        let user = store.insert_user(new_user("Admin@Example.com")).await.unwrap();
        let creds = store.find_credentials("admin@example.com").await.unwrap().unwrap();
        assert_eq!(creds.id, user.id);
        assert!(store.insert_user(new_user("admin@example.com")).await.is_err());
    }
}
