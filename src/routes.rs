use actix_web::middleware::from_fn;
use actix_web::{HttpRequest, HttpResponse, error, web};

use crate::auth::middleware::require_auth;
use crate::errors::AppError;
use crate::handlers::{auth_handlers, document_handlers, user_handlers};

fn query_error(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

fn json_error(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

fn path_error(err: error::PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "Not found" }))
}

/// Register every route. Shared by the server and the HTTP tests.
///
/// Each protected resource carries its own auth wrap so unknown paths fall
/// through to the JSON 404 instead of a 401.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error))
        .app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::PathConfig::default().error_handler(path_error))
        .route("/login", web::post().to(auth_handlers::login))
        .route("/logout", web::post().to(auth_handlers::logout))
        .service(
            web::resource("/me")
                .wrap(from_fn(require_auth))
                .route(web::get().to(auth_handlers::me)),
        )
        .service(
            web::resource("/users")
                .wrap(from_fn(require_auth))
                .route(web::get().to(user_handlers::list)),
        )
        .service(
            web::resource("/stats")
                .wrap(from_fn(require_auth))
                .route(web::get().to(document_handlers::stats)),
        )
        // Documents: /documents/{id}/file BEFORE /documents/{id}
        .service(
            web::resource("/documents")
                .wrap(from_fn(require_auth))
                .route(web::get().to(document_handlers::list))
                .route(web::post().to(document_handlers::create)),
        )
        .service(
            web::resource("/documents/{id}/file")
                .wrap(from_fn(require_auth))
                .route(web::get().to(document_handlers::download)),
        )
        .service(
            web::resource("/documents/{id}")
                .wrap(from_fn(require_auth))
                .route(web::get().to(document_handlers::detail))
                .route(web::post().to(document_handlers::update))
                .route(web::patch().to(document_handlers::approve))
                .route(web::delete().to(document_handlers::delete)),
        )
        // Grouped JSON view and its detail-link target
        .service(
            web::resource("/api/documents")
                .wrap(from_fn(require_auth))
                .route(web::get().to(document_handlers::grouped)),
        )
        .service(
            web::resource("/api/documents/{id}")
                .name(document_handlers::DETAIL_ROUTE)
                .wrap(from_fn(require_auth))
                .route(web::get().to(document_handlers::detail)),
        )
        .default_service(web::to(not_found));
}
