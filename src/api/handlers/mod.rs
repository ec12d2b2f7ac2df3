//! HTTP request handlers.

pub mod user_handler;

pub use user_handler::user_routes;
