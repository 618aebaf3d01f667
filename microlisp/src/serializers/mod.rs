//! Adapters that turn host documents into environments

mod json;

pub use json::from_json;
pub use json::to_environment as from_json_map;
