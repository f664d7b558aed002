pub mod crud;
pub mod form;
pub mod list;

pub use crud::{approve, create, delete, detail, download, update};
pub use list::{grouped, list, stats};

/// Resource name of `GET /api/documents/{id}`, used to build detail links.
pub const DETAIL_ROUTE: &str = "api_document_detail";
