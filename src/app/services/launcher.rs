use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use log::{debug, info};
use tokio::process::Command;

use super::result_file::parse_result;
use crate::app::domain::feedback::join_options;
use crate::app::domain::{FeedbackRequest, FeedbackResult, FontSize};
use crate::app::infrastructure::error::{AppError, Result};

/// Starts the feedback UI as a child process and collects its answer
#[derive(Debug, Clone)]
pub struct UiLauncher {
    executable: PathBuf,
    font_size: FontSize,
}

impl UiLauncher {
    pub fn new(executable: impl Into<PathBuf>, font_size: FontSize) -> Self {
        Self {
            executable: executable.into(),
            font_size,
        }
    }

    /// Arguments passed to the UI process for one request.
    ///
    /// Every value is attached with `=` so prompts and options that start
    /// with `-` are never read as flags.
    pub fn command_args(&self, request: &FeedbackRequest, output_file: &Path) -> Vec<OsString> {
        let mut output_arg = OsString::from("--output-file=");
        output_arg.push(output_file.as_os_str());

        vec![
            format!("--prompt={}", request.prompt).into(),
            output_arg,
            format!(
                "--predefined-options={}",
                join_options(&request.predefined_options)
            )
            .into(),
            format!("--font-size={}", self.font_size).into(),
        ]
    }

    /// Run the UI to completion and read the result it wrote.
    ///
    /// The temporary result file is removed on every path.
    pub async fn launch(&self, request: &FeedbackRequest) -> Result<FeedbackResult> {
        let output_file = tempfile::Builder::new()
            .prefix("feedback-")
            .suffix(".json")
            .tempfile()?
            .into_temp_path();

        info!(
            "Launching {} with font size {}",
            self.executable.display(),
            self.font_size
        );

        // Our stdio is the MCP channel; the child must not touch it
        let status = Command::new(&self.executable)
            .args(self.command_args(request, &output_file))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .status()
            .await?;

        if !status.success() {
            return Err(AppError::UiExit(status.code().unwrap_or(-1)));
        }

        let contents = tokio::fs::read_to_string(&output_file).await?;
        let result = parse_result(&contents)?;
        debug!("Feedback UI returned {} bytes", result.interactive_feedback.len());

        output_file.close()?;
        Ok(result)
    }
}
