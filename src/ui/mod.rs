//! FLTK front end of the feedback popup.

pub mod buffer;
pub mod feedback_window;
pub mod layout;
pub mod theme;

pub use feedback_window::run_feedback_window;
