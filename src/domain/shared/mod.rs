pub mod dto;
pub mod upstream;

pub use dto::MessageResponse;
pub use upstream::{DegradedReason, Upstream};
