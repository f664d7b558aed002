//! Document mutations: create, update, approve, soft delete, lookup.
//!
//! Validation always completes before anything is written, so a rejected
//! request leaves neither a blob nor a row behind.

use chrono::Utc;

use crate::errors::{AppError, FieldErrors};
use crate::models::user::User;
use crate::storage::FileStorage;
use crate::store::Store;

use super::types::{Document, DocumentForm, NewDocument, Status};
use super::validate;

/// Look up a document by id, whatever its status.
pub async fn find(store: &dyn Store, id: i64) -> Result<Document, AppError> {
    store.find_document(id).await?.ok_or(AppError::NotFound)
}

async fn ensure_user_exists(store: &dyn Store, user_id: i64, errors: &mut FieldErrors) -> Result<(), AppError> {
    if store.find_user(user_id).await?.is_none() {
        errors.add("user_id", "The selected user id is invalid.");
    }
    Ok(())
}

/// Validate, store the attachment and persist an active, unapproved document.
///
/// The owner defaults to `actor` when the form carries no `user_id`.
pub async fn create(
    store: &dyn Store,
    files: &FileStorage,
    actor: &User,
    form: DocumentForm,
    max_upload_bytes: usize,
) -> Result<Document, AppError> {
    let fields = validate::validate_create(form, max_upload_bytes).map_err(AppError::Validation)?;

    let owner = fields.user_id.unwrap_or(actor.id);
    let mut errors = FieldErrors::new();
    ensure_user_exists(store, owner, &mut errors).await?;
    errors.into_result()?;

    let url = files.put(&fields.document.file_name, &fields.document.bytes).await?;
    let new = NewDocument {
        name: fields.name,
        description: fields.description,
        priority: fields.priority,
        date_submitted: Utc::now(),
        url: url.clone(),
        user_id: owner,
    };

    match store.insert_document(new).await {
        Ok(doc) => {
            log::info!("document.created id={} owner={} actor={}", doc.id, doc.user_id, actor.id);
            Ok(doc)
        }
        Err(e) => {
            discard_blob(files, &url).await;
            Err(e)
        }
    }
}

/// Best-effort removal of a blob whose record never landed.
async fn discard_blob(files: &FileStorage, url: &str) {
    if let Err(cleanup) = files.remove(url).await {
        log::warn!("Failed to remove orphaned blob {url}: {cleanup}");
    }
}

/// Apply the fields present in `form`. A new attachment replaces the blob
/// reference; the previous file is left on disk.
pub async fn update(
    store: &dyn Store,
    files: &FileStorage,
    actor: &User,
    id: i64,
    form: DocumentForm,
    max_upload_bytes: usize,
) -> Result<Document, AppError> {
    let mut doc = find(store, id).await?;
    let changes = validate::validate_update(form, max_upload_bytes).map_err(AppError::Validation)?;

    let mut errors = FieldErrors::new();
    if let Some(user_id) = changes.user_id {
        ensure_user_exists(store, user_id, &mut errors).await?;
    }
    errors.into_result()?;

    let new_blob = match &changes.document {
        Some(upload) => Some(files.put(&upload.file_name, &upload.bytes).await?),
        None => None,
    };
    if let Some(url) = &new_blob {
        doc.url = url.clone();
    }
    if let Some(name) = changes.name {
        doc.name = name;
    }
    if let Some(description) = changes.description {
        doc.description = description;
    }
    if let Some(priority) = changes.priority {
        doc.priority = priority;
    }
    if let Some(user_id) = changes.user_id {
        doc.user_id = user_id;
    }

    if let Err(e) = store.save_document(&doc).await {
        if let Some(url) = &new_blob {
            discard_blob(files, url).await;
        }
        return Err(e);
    }
    log::info!("document.updated id={} actor={}", doc.id, actor.id);
    Ok(doc)
}

/// Mark a document approved now. Repeating the call only moves the timestamp.
pub async fn approve(store: &dyn Store, actor: &User, id: i64) -> Result<Document, AppError> {
    let mut doc = find(store, id).await?;
    doc.status = Status::Active;
    doc.date_approved = Some(Utc::now());
    store.save_document(&doc).await?;
    log::info!("document.approved id={} actor={}", doc.id, actor.id);
    Ok(doc)
}

/// Withdraw a document. The row and its blob are kept.
pub async fn soft_delete(store: &dyn Store, actor: &User, id: i64) -> Result<Document, AppError> {
    let mut doc = find(store, id).await?;
    doc.status = Status::Withdrawn;
    store.save_document(&doc).await?;
    log::info!("document.deleted id={} actor={}", doc.id, actor.id);
    Ok(doc)
}
