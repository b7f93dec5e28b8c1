//! Custom extractors for Axum handlers.

pub mod id_path;
pub mod path_i32;

pub use id_path::IdPath;
pub use path_i32::PathI32;
