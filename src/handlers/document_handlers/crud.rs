use actix_files::NamedFile;
use actix_multipart::Multipart;
use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::auth::session::{current_user, require_capability};
use crate::errors::AppError;
use crate::models::document::{Document, access, lifecycle};
use crate::models::permission::Capability;
use crate::models::user::User;
use crate::state::AppState;

use super::form::read_document_form;

/// Fetch a document the user is allowed to see; others' documents look absent
/// to lowest-level users.
async fn find_visible(state: &AppState, user: &User, id: i64) -> Result<Document, AppError> {
    let doc = lifecycle::find(state.store(), id).await?;
    if access::can_view(user, &doc) {
        Ok(doc)
    } else {
        Err(AppError::NotFound)
    }
}

/// GET /documents/{id}
pub async fn detail(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session, state.store()).await?;
    require_capability(&user, Capability::CanSee)?;

    let doc = find_visible(&state, &user, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(doc))
}

/// GET /documents/{id}/file
/// Streams the stored attachment.
pub async fn download(
    req: HttpRequest,
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session, state.store()).await?;
    require_capability(&user, Capability::CanSee)?;

    let doc = find_visible(&state, &user, path.into_inner()).await?;
    let file_path = state.files.resolve(&doc.url)?;
    let file = NamedFile::open_async(&file_path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            log::warn!("Blob {} for document {} is missing", doc.url, doc.id);
            AppError::NotFound
        } else {
            AppError::Io(e)
        }
    })?;
    Ok(file.into_response(&req))
}

/// POST /documents
/// Creates a document from a multipart form with its attachment.
pub async fn create(
    state: web::Data<AppState>,
    session: Session,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session, state.store()).await?;
    require_capability(&user, Capability::CanCreate)?;

    let form = read_document_form(payload, state.max_upload_bytes).await?;
    let doc = lifecycle::create(state.store(), &state.files, &user, form, state.max_upload_bytes).await?;
    Ok(HttpResponse::Created().json(doc))
}

/// POST /documents/{id}
/// Updates the fields present in the multipart form.
pub async fn update(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<i64>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session, state.store()).await?;
    require_capability(&user, Capability::CanEdit)?;

    let form = read_document_form(payload, state.max_upload_bytes).await?;
    let doc = lifecycle::update(
        state.store(),
        &state.files,
        &user,
        path.into_inner(),
        form,
        state.max_upload_bytes,
    )
    .await?;
    Ok(HttpResponse::Ok().json(doc))
}

/// PATCH /documents/{id}
/// Approves a document.
pub async fn approve(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session, state.store()).await?;
    require_capability(&user, Capability::CanApprove)?;

    let doc = lifecycle::approve(state.store(), &user, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(doc))
}

/// DELETE /documents/{id}
/// Withdraws a document; the record stays retrievable by id.
pub async fn delete(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = current_user(&session, state.store()).await?;
    require_capability(&user, Capability::CanDelete)?;

    let doc = lifecycle::soft_delete(state.store(), &user, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(doc))
}
