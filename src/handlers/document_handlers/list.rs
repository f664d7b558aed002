use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};
use chrono::Utc;

use crate::auth::session::{current_user, require_capability};
use crate::errors::AppError;
use crate::models::document::{self, Document, DocumentQuery, access, filter, grouping, stats};
use crate::models::permission::Capability;
use crate::models::user::User;
use crate::state::AppState;

/// Active documents the signed-in user may see.
async fn visible_documents(
    state: &AppState,
    session: &Session,
) -> Result<(User, Vec<Document>), AppError> {
    let user = current_user(session, state.store()).await?;
    require_capability(&user, Capability::CanSee)?;
    let documents = state.store().active_documents().await?;
    let visible = access::visible_to(&user, documents);
    Ok((user, visible))
}

/// GET /documents
/// Lists visible active documents with optional filters.
pub async fn list(
    state: web::Data<AppState>,
    session: Session,
    query: web::Query<DocumentQuery>,
) -> Result<HttpResponse, AppError> {
    let (_, visible) = visible_documents(&state, &session).await?;
    let documents = filter::apply(&query, visible)?;
    Ok(HttpResponse::Ok().json(documents))
}

/// GET /api/documents
/// Visible documents grouped by priority, each with a detail link.
pub async fn grouped(
    req: HttpRequest,
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let (_, visible) = visible_documents(&state, &session).await?;
    let groups = grouping::group_by_priority(&visible, |id| {
        req.url_for(super::DETAIL_ROUTE, [id.to_string()])
            .map(|url| url.to_string())
            .unwrap_or_else(|_| format!("/api/documents/{id}"))
    });
    Ok(HttpResponse::Ok().json(groups))
}

/// GET /stats
/// Priority counts and monthly approvals over the visible documents.
pub async fn stats(state: web::Data<AppState>, session: Session) -> Result<HttpResponse, AppError> {
    let (_, visible) = visible_documents(&state, &session).await?;
    let summary: document::DocumentStats = stats::summarize(&visible, Utc::now().date_naive());
    Ok(HttpResponse::Ok().json(summary))
}
