pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod storage;
pub mod store;
pub mod validate;
