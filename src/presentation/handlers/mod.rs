pub mod api_types;
mod document;
mod error;
mod health;
mod instructions;
mod questions;
mod sessions;

pub use document::{clear_document_handler, upload_document_handler};
pub use error::status_for;
pub use health::health_handler;
pub use instructions::{instruction_catalog_handler, select_instructions_handler};
pub use questions::ask_handler;
pub use sessions::{create_session_handler, delete_session_handler, get_session_handler};
