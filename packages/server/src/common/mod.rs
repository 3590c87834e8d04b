// Common types and utilities shared across the application

pub mod storage;
pub mod utils;

pub use storage::{InMemoryStore, SessionStore};
