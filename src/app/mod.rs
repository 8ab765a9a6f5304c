//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (FontSize, FeedbackRequest, FeedbackResult, WindowState)
//! - `services/` - Business operations (UI launcher, result file)
//! - `infrastructure/` - External integrations (platform lookup, logging, error)
//! - `cli.rs` - Command-line arguments of both processes
//! - `server.rs` - MCP tool server

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod server;
pub mod services;

// Re-exports for convenient external access
pub use domain::{FeedbackRequest, FeedbackResult, FontSize, WindowState};
pub use infrastructure::error::{AppError, Result};
pub use server::FeedbackServer;
pub use services::UiLauncher;
