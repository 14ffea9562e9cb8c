pub mod config;
pub mod document;
pub mod edit;
pub mod error;
pub mod html;
pub mod io;
pub mod markdown;
pub mod report;
pub mod templates;
pub mod types;

pub use document::Document;
pub use error::{PrdError, Result, ValidationError};
