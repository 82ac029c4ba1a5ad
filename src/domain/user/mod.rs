pub mod dto;
pub mod model;
pub mod password;
pub mod service;

pub use dto::{CredentialsRequest, LoginResponse};
pub use model::User;
pub use service::UserService;
