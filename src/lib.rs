pub mod document_extractor;
pub mod models;
pub mod processing;
pub mod utils;

pub use document_extractor::DocumentExtractor;
