pub mod activity;
pub mod auth;
pub mod digest;
pub mod health;
pub mod root;
