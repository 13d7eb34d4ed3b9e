pub mod auth;
pub mod config;
pub mod credentials;
pub mod data;
pub mod models;
pub mod rtdb;
pub mod seeder;

// Re-export commonly used types
pub use models::*;
