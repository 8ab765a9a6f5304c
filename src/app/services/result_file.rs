use std::fs;
use std::path::Path;

use crate::app::domain::FeedbackResult;
use crate::app::infrastructure::error::Result;

/// Write the UI result where the server expects it
pub fn write_result(path: &Path, result: &FeedbackResult) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, serde_json::to_string(result)?)?;
    Ok(())
}

pub fn parse_result(contents: &str) -> Result<FeedbackResult> {
    Ok(serde_json::from_str(contents)?)
}
