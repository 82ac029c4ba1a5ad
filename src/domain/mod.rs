pub mod activity;
pub mod digest;
pub mod news;
pub mod shared;
pub mod summary;
pub mod user;
