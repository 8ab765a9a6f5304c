use clap::Parser;
use fltk::app;
use log::info;

use interactive_feedback::app::Result;
use interactive_feedback::app::cli::UiArgs;
use interactive_feedback::app::infrastructure::logging;
use interactive_feedback::app::services::result_file::write_result;
use interactive_feedback::ui::run_feedback_window;

fn main() -> Result<()> {
    let args = UiArgs::parse();
    logging::init(args.log_level);

    let font_size = args.effective_font_size();
    let request = args.request();

    let _app = app::App::default();
    let result = run_feedback_window(&request, font_size);

    match &args.output_file {
        Some(path) => {
            write_result(path, &result)?;
            info!("Feedback written to {}", path.display());
        }
        None => println!("\nFeedback received:\n{}", result.interactive_feedback),
    }

    Ok(())
}
