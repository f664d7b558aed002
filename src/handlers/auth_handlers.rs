use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::auth::{password, session};
use crate::errors::AppError;
use crate::models::permission::Capabilities;
use crate::models::user::{LoginForm, User};
use crate::state::AppState;

const BAD_CREDENTIALS: &str = "These credentials do not match our records.";

#[derive(Serialize)]
struct MeResponse {
    user: User,
    permissions: Capabilities,
}

/// POST /login
/// Verifies email/password and starts a session.
pub async fn login(
    state: web::Data<AppState>,
    session: Session,
    form: web::Json<LoginForm>,
) -> Result<HttpResponse, AppError> {
    let creds = state.store().find_credentials(form.email.trim()).await?;

    let user_id = match creds {
        Some(c) if password::verify_password(&form.password, &c.password) => c.id,
        _ => {
            log::info!("Failed login for {}", form.email.trim());
            return Err(AppError::field("email", BAD_CREDENTIALS));
        }
    };

    let user = state.store().find_user(user_id).await?.ok_or(AppError::NotFound)?;
    session::sign_in(&session, user.id)?;
    log::info!("User {} logged in", user.id);
    Ok(HttpResponse::Ok().json(user))
}

/// POST /logout
pub async fn logout(session: Session) -> HttpResponse {
    session::sign_out(&session);
    HttpResponse::NoContent().finish()
}

/// GET /me
/// Current user and resolved capabilities.
pub async fn me(state: web::Data<AppState>, session: Session) -> Result<HttpResponse, AppError> {
    let user = session::current_user(&session, state.store()).await?;
    let permissions = user.capabilities();
    Ok(HttpResponse::Ok().json(MeResponse { user, permissions }))
}
