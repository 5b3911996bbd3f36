pub mod models;

pub use models::{model_filename, resolve_model_path};
