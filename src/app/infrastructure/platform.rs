use std::env;
use std::path::{Path, PathBuf};

use super::error::{AppError, Result};

/// Overrides where the server looks for the feedback UI executable
pub const UI_EXECUTABLE_ENV: &str = "INTERACTIVE_FEEDBACK_UI";

pub const UI_EXECUTABLE_NAME: &str = "feedback-ui";

/// The UI binary installed next to the given server binary
pub fn sibling_ui_path(server_exe: &Path) -> PathBuf {
    let dir = server_exe.parent().unwrap_or_else(|| Path::new("."));
    dir.join(format!("{}{}", UI_EXECUTABLE_NAME, env::consts::EXE_SUFFIX))
}

/// Resolve the feedback UI executable.
///
/// `INTERACTIVE_FEEDBACK_UI` wins when set; otherwise the UI must sit in
/// the same directory as the running server.
pub fn locate_ui_executable() -> Result<PathBuf> {
    if let Some(path) = env::var_os(UI_EXECUTABLE_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let candidate = sibling_ui_path(&env::current_exe()?);
    if candidate.is_file() {
        Ok(candidate)
    } else {
        Err(AppError::UiNotFound(candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sibling_ui_path() {
        let server = Path::new("/usr/local/bin/interactive-feedback");
        let expected = format!("/usr/local/bin/feedback-ui{}", env::consts::EXE_SUFFIX);
        assert_eq!(sibling_ui_path(server), PathBuf::from(expected));
    }

    #[test]
    fn test_sibling_ui_path_bare_name() {
        let path = sibling_ui_path(Path::new("interactive-feedback"));
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some(format!("feedback-ui{}", env::consts::EXE_SUFFIX).as_str())
        );
    }
}
