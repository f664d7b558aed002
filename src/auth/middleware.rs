use actix_session::SessionExt;
use actix_web::{
    Error, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
};

use crate::auth::session::get_user_id;

/// Reject requests without an authenticated session with a JSON 401.
pub async fn require_auth(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    if get_user_id(&req.get_session()).is_none() {
        let response = HttpResponse::Unauthorized()
            .json(serde_json::json!({ "error": "Not authenticated" }));
        return Ok(req.into_response(response).map_into_right_body());
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}
