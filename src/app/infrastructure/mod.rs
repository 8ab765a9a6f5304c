//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Locating the feedback UI executable
//! - Logger setup
//! - Error types

pub mod error;
pub mod logging;
pub mod platform;
