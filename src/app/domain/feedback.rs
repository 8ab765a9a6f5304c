use serde::{Deserialize, Serialize};

/// Separator used to pass predefined options on a single command-line argument
pub const OPTION_SEPARATOR: &str = "|||";

pub const DEFAULT_PROMPT: &str = "I implemented the changes you requested.";

const COMMIT_REQUEST_MARKER: &str = "[AUTO COMMIT REQUESTED] Create commit:";
const FALLBACK_COMMIT_MESSAGE: &str = "feat: apply changes";

/// What the server asks the user
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedbackRequest {
    pub prompt: String,
    pub predefined_options: Vec<String>,
}

/// What the UI hands back to the server through the result file
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeedbackResult {
    pub interactive_feedback: String,

    #[serde(default)]
    pub git_commit: bool,
}

impl FeedbackResult {
    /// Combine checked options and free text into the reported feedback.
    ///
    /// Options are joined with `"; "`, the free text is trimmed, and the two
    /// non-empty parts are separated by a blank line.
    pub fn compose(selected_options: &[String], free_text: &str, git_commit: bool) -> Self {
        let mut parts = Vec::with_capacity(2);

        if !selected_options.is_empty() {
            parts.push(selected_options.join("; "));
        }

        let text = free_text.trim();
        if !text.is_empty() {
            parts.push(text.to_string());
        }

        Self {
            interactive_feedback: parts.join("\n\n"),
            git_commit,
        }
    }

    /// Append the auto-commit instruction when the user asked for a commit
    pub fn with_commit_instruction(mut self) -> Self {
        if self.git_commit {
            let message = commit_message(&self.interactive_feedback);
            self.interactive_feedback
                .push_str(&format!("\n\n{} {}", COMMIT_REQUEST_MARKER, message));
        }
        self
    }
}

/// Conventional commit message built from the first sentence of the first line
pub fn commit_message(feedback: &str) -> String {
    let first_sentence = feedback
        .trim()
        .split('\n')
        .next()
        .and_then(|line| line.split('.').next())
        .map(str::trim)
        .unwrap_or_default();

    if first_sentence.is_empty() {
        FALLBACK_COMMIT_MESSAGE.to_string()
    } else {
        format!("feat: {}", first_sentence)
    }
}

/// Split a `|||`-separated option list, dropping empty entries
pub fn split_options(raw: &str) -> Vec<String> {
    raw.split(OPTION_SEPARATOR)
        .filter(|opt| !opt.is_empty())
        .map(|opt| opt.to_string())
        .collect()
}

pub fn join_options(options: &[String]) -> String {
    options.join(OPTION_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_compose_text_only() {
        let result = FeedbackResult::compose(&[], "  looks good\n", false);
        assert_eq!(result.interactive_feedback, "looks good");
        assert!(!result.git_commit);
    }

    #[test]
    fn test_compose_options_only() {
        let result = FeedbackResult::compose(&opts(&["Yes", "Run tests"]), "   ", false);
        assert_eq!(result.interactive_feedback, "Yes; Run tests");
    }

    #[test]
    fn test_compose_options_and_text() {
        let result = FeedbackResult::compose(&opts(&["Yes"]), "but rename the module", true);
        assert_eq!(result.interactive_feedback, "Yes\n\nbut rename the module");
        assert!(result.git_commit);
    }

    #[test]
    fn test_compose_nothing_is_empty() {
        let result = FeedbackResult::compose(&[], "", false);
        assert_eq!(result, FeedbackResult::default());
    }

    #[test]
    fn test_commit_message_uses_first_sentence() {
        assert_eq!(
            commit_message("Add dark mode. Also fix the header.\nSecond line"),
            "feat: Add dark mode"
        );
        assert_eq!(commit_message("\n  Tidy imports  \nmore"), "feat: Tidy imports");
    }

    #[test]
    fn test_commit_message_fallback() {
        assert_eq!(commit_message(""), "feat: apply changes");
        assert_eq!(commit_message("   "), "feat: apply changes");
        assert_eq!(commit_message(". trailing"), "feat: apply changes");
    }

    #[test]
    fn test_commit_instruction_appended_only_when_requested() {
        let untouched = FeedbackResult {
            interactive_feedback: "ship it".to_string(),
            git_commit: false,
        }
        .with_commit_instruction();
        assert_eq!(untouched.interactive_feedback, "ship it");

        let committed = FeedbackResult {
            interactive_feedback: "Ship it. Now.".to_string(),
            git_commit: true,
        }
        .with_commit_instruction();
        assert_eq!(
            committed.interactive_feedback,
            "Ship it. Now.\n\n[AUTO COMMIT REQUESTED] Create commit: feat: Ship it"
        );
    }

    #[test]
    fn test_result_json_shape() {
        let json = r#"{"interactive_feedback": "ok"}"#;
        let result: FeedbackResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.interactive_feedback, "ok");
        assert!(!result.git_commit);

        let out = serde_json::to_string(&result).unwrap();
        assert!(out.contains("\"interactive_feedback\":\"ok\""));
        assert!(out.contains("\"git_commit\":false"));
    }

    #[test]
    fn test_split_options() {
        assert_eq!(split_options("A|||B|||C"), opts(&["A", "B", "C"]));
        assert_eq!(split_options("A||||||B"), opts(&["A", "B"]));
        assert!(split_options("").is_empty());
        assert_eq!(join_options(&opts(&["A", "B"])), "A|||B");
    }
}
