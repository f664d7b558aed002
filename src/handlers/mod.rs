pub mod auth_handlers;
pub mod document_handlers;
pub mod user_handlers;
