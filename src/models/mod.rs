pub mod document;
pub mod permission;
pub mod user;
