use clap::Parser;
use log::info;

use interactive_feedback::app::cli::ServerArgs;
use interactive_feedback::app::infrastructure::{logging, platform};
use interactive_feedback::app::{FeedbackServer, Result, UiLauncher};

#[tokio::main]
async fn main() -> Result<()> {
    let args = ServerArgs::parse();
    logging::init(args.log_level);

    let font_size = args.effective_font_size();
    let ui_executable = platform::locate_ui_executable()?;
    info!(
        "Feedback UI at {} (font size {})",
        ui_executable.display(),
        font_size
    );

    FeedbackServer::new(UiLauncher::new(ui_executable, font_size))
        .serve_stdio()
        .await
}
