use actix_session::Session;

use crate::errors::AppError;
use crate::models::permission::Capability;
use crate::models::user::User;
use crate::store::Store;

const USER_ID_KEY: &str = "user_id";

pub fn get_user_id(session: &Session) -> Option<i64> {
    session.get::<i64>(USER_ID_KEY).unwrap_or(None)
}

/// Start a fresh session for `user_id`.
pub fn sign_in(session: &Session, user_id: i64) -> Result<(), AppError> {
    session.renew();
    session
        .insert(USER_ID_KEY, user_id)
        .map_err(|e| AppError::Session(e.to_string()))
}

pub fn sign_out(session: &Session) {
    session.purge();
}

/// Load the signed-in user. A session pointing at a vanished user counts as
/// no session.
pub async fn current_user(session: &Session, store: &dyn Store) -> Result<User, AppError> {
    let id = get_user_id(session).ok_or(AppError::Unauthorized)?;
    store.find_user(id).await?.ok_or(AppError::Unauthorized)
}

/// 403 naming the capability when the user's level lacks it.
pub fn require_capability(user: &User, cap: Capability) -> Result<(), AppError> {
    if user.capabilities().has(cap) {
        Ok(())
    } else {
        Err(AppError::PermissionDenied(cap.code().to_string()))
    }
}
