//! Excerpt PDF Text Extraction Service
//!
//! A small HTTP service that extracts plain text from uploaded PDF documents
//! (multipart or base64), plus a colocated Instagram thumbnail resolver.
//!
//! Business failures ("no text found", "parser rejected the file") are
//! reported with HTTP 200 and `success: false`; only malformed requests use
//! 400 and only unexpected faults use 500.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use handlers::router;
pub use state::AppState;
