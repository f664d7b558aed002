pub mod access;
pub mod filter;
pub mod grouping;
pub mod lifecycle;
pub mod queries;
pub mod stats;
pub mod types;
pub mod validate;

pub use types::*;
