use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid font size: {0}")]
    InvalidFontSize(String),

    #[error("Failed to launch feedback UI: {0}")]
    UiExit(i32),

    #[error("Feedback UI executable not found at {}", .0.display())]
    UiNotFound(PathBuf),

    #[error("MCP error: {0}")]
    Mcp(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
