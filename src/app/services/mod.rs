//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Launching the feedback UI process
//! - Reading and writing the result file

pub mod launcher;
pub mod result_file;

pub use launcher::UiLauncher;
