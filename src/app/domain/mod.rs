//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Font size configuration
//! - Feedback request and result
//! - Persisted window geometry

pub mod feedback;
pub mod font_size;
pub mod window_state;

pub use feedback::{FeedbackRequest, FeedbackResult};
pub use font_size::FontSize;
pub use window_state::WindowState;
