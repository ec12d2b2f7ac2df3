//! Domain layer - Core business entities
//!
//! Domain types carry no infrastructure dependencies; storage and HTTP
//! layers convert to and from them.

pub mod user;

pub use user::User;
