use clap::Parser;
use log::{LevelFilter, warn};
use std::path::PathBuf;

use super::domain::FontSize;
use super::domain::feedback::{DEFAULT_PROMPT, FeedbackRequest, split_options};

#[derive(Parser, Debug)]
#[command(name = "interactive-feedback", version, about = "Interactive Feedback MCP server")]
pub struct ServerArgs {
    #[arg(long, default_value_t = FontSize::default(), help = "Font size for the feedback UI")]
    pub font_size: FontSize,

    #[arg(long, default_value = "error", help = "Log level (logs go to stderr)")]
    pub log_level: LevelFilter,
}

#[derive(Parser, Debug)]
#[command(name = "feedback-ui", version, about = "Run the feedback UI")]
pub struct UiArgs {
    #[arg(
        long,
        default_value = DEFAULT_PROMPT,
        allow_hyphen_values = true,
        help = "The prompt to show to the user"
    )]
    pub prompt: String,

    #[arg(
        long,
        default_value = "",
        allow_hyphen_values = true,
        help = "Pipe-separated list of predefined options (|||)"
    )]
    pub predefined_options: String,

    #[arg(long, help = "Path to save the feedback result as JSON")]
    pub output_file: Option<PathBuf>,

    #[arg(long, default_value_t = FontSize::default(), help = "Font size for the UI")]
    pub font_size: FontSize,

    #[arg(long, default_value = "warn")]
    pub log_level: LevelFilter,
}

impl ServerArgs {
    pub fn effective_font_size(&self) -> FontSize {
        effective_font_size(self.font_size)
    }
}

impl UiArgs {
    pub fn effective_font_size(&self) -> FontSize {
        effective_font_size(self.font_size)
    }

    pub fn request(&self) -> FeedbackRequest {
        FeedbackRequest {
            prompt: self.prompt.clone(),
            predefined_options: split_options(&self.predefined_options),
        }
    }
}

/// Clamp into the recommended range, warning when the request was outside it
fn effective_font_size(requested: FontSize) -> FontSize {
    if requested.is_recommended() {
        return requested;
    }
    let effective = requested.clamped();
    warn!(
        "Font size {} is outside the recommended range, using {}",
        requested, effective
    );
    effective
}
