use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::auth::session::current_user;
use crate::errors::AppError;
use crate::state::AppState;

/// GET /users
/// All users, for the owner dropdown on the document form.
pub async fn list(state: web::Data<AppState>, session: Session) -> Result<HttpResponse, AppError> {
    current_user(&session, state.store()).await?;
    let users = state.store().users().await?;
    Ok(HttpResponse::Ok().json(users))
}
