pub mod model;
pub mod service;

pub use model::GenerationConfig;
pub use service::{SummaryService, FALLBACK_SUMMARY, NOT_CONFIGURED_SUMMARY};
