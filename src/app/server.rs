//! MCP server exposing the `interactive_feedback` tool over stdio.

use std::sync::Arc;

use log::{error, info};
use rmcp::{
    RoleServer, ServerHandler, ServiceExt,
    model::{
        CallToolRequestParam, CallToolResult, Content, ErrorData, Implementation, JsonObject,
        ListToolsResult, PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
    transport::stdio,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{FeedbackRequest, FeedbackResult};
use super::infrastructure::error::{AppError, Result};
use super::services::UiLauncher;

pub const SERVER_NAME: &str = "Interactive Feedback MCP";
pub const TOOL_NAME: &str = "interactive_feedback";

/// Arguments accepted by the `interactive_feedback` tool
#[derive(Debug, Default, Deserialize)]
struct FeedbackArgs {
    #[serde(default)]
    message: Option<String>,

    #[serde(default)]
    predefined_options: Vec<String>,
}

impl From<FeedbackArgs> for FeedbackRequest {
    fn from(args: FeedbackArgs) -> Self {
        Self {
            prompt: args.message.unwrap_or_default(),
            predefined_options: args.predefined_options,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FeedbackServer {
    launcher: Arc<UiLauncher>,
}

impl FeedbackServer {
    pub fn new(launcher: UiLauncher) -> Self {
        Self {
            launcher: Arc::new(launcher),
        }
    }

    pub fn tool() -> Tool {
        let schema = json!({
            "type": "object",
            "properties": {
                "message": {
                    "type": "string",
                    "description": "The question or summary shown to the user"
                },
                "predefined_options": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Options the user can tick instead of typing"
                }
            }
        });
        let schema: JsonObject = match schema {
            serde_json::Value::Object(map) => map,
            _ => JsonObject::new(),
        };

        Tool::new(
            TOOL_NAME,
            "Request interactive feedback from the user",
            Arc::new(schema),
        )
    }

    /// Show the popup and post-process its answer
    pub async fn request_feedback(&self, request: FeedbackRequest) -> Result<FeedbackResult> {
        let result = self.launcher.launch(&request).await?;
        Ok(result.with_commit_instruction())
    }

    pub async fn handle_tool_call(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> std::result::Result<CallToolResult, ErrorData> {
        if name != TOOL_NAME {
            return Err(ErrorData::invalid_params(format!("Unknown tool: {}", name), None));
        }

        let args: FeedbackArgs = match arguments {
            Some(map) => serde_json::from_value(serde_json::Value::Object(map))
                .map_err(|e| ErrorData::invalid_params(e.to_string(), None))?,
            None => FeedbackArgs::default(),
        };

        let result = self.request_feedback(args.into()).await.map_err(|e| {
            error!("{}", e);
            ErrorData::internal_error(e.to_string(), None)
        })?;

        let text = serde_json::to_string(&result)
            .map_err(|e| ErrorData::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Serve MCP on stdin/stdout until the client disconnects
    pub async fn serve_stdio(self) -> Result<()> {
        info!("Starting {} on stdio", SERVER_NAME);
        let service = self
            .serve(stdio())
            .await
            .map_err(|e| AppError::Mcp(e.to_string()))?;

        let reason = service
            .waiting()
            .await
            .map_err(|e| AppError::Mcp(e.to_string()))?;
        info!("MCP session ended: {:?}", reason);
        Ok(())
    }
}

impl ServerHandler for FeedbackServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(
                "Call interactive_feedback to ask the user for feedback in a popup window."
                    .to_string(),
            ),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult {
            tools: vec![Self::tool()],
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, ErrorData> {
        self.handle_tool_call(&request.name, request.arguments).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::FontSize;
    use rmcp::model::RawContent;

    fn server_with(executable: &str) -> FeedbackServer {
        FeedbackServer::new(UiLauncher::new(executable, FontSize::default()))
    }

    #[test]
    fn test_tool_definition() {
        let tool = FeedbackServer::tool();
        assert_eq!(tool.name, TOOL_NAME);
        assert_eq!(tool.input_schema["type"], "object");
        assert!(tool.input_schema["properties"]["message"].is_object());
        assert_eq!(
            tool.input_schema["properties"]["predefined_options"]["type"],
            "array"
        );
    }

    #[test]
    fn test_server_info() {
        let info = server_with("feedback-ui").get_info();
        assert_eq!(info.server_info.name, SERVER_NAME);
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn test_args_into_request() {
        let args: FeedbackArgs = serde_json::from_value(json!({
            "message": "Ready to merge?",
            "predefined_options": ["Merge", "Wait"]
        }))
        .unwrap();
        let request: FeedbackRequest = args.into();
        assert_eq!(request.prompt, "Ready to merge?");
        assert_eq!(request.predefined_options, vec!["Merge", "Wait"]);

        let request: FeedbackRequest = FeedbackArgs::default().into();
        assert_eq!(request, FeedbackRequest::default());
    }

    #[tokio::test]
    async fn test_unknown_tool_is_invalid_params() {
        let err = server_with("feedback-ui")
            .handle_tool_call("something_else", None)
            .await
            .unwrap_err();
        assert!(err.message.contains("Unknown tool"));
    }

    #[tokio::test]
    async fn test_bad_arguments_are_invalid_params() {
        let mut args = JsonObject::new();
        args.insert("predefined_options".to_string(), json!("not a list"));

        let err = server_with("feedback-ui")
            .handle_tool_call(TOOL_NAME, Some(args))
            .await
            .unwrap_err();
        assert!(!err.message.is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_launch_failure_is_internal_error() {
        let err = server_with("false")
            .handle_tool_call(TOOL_NAME, None)
            .await
            .unwrap_err();
        assert!(err.message.contains("Failed to launch feedback UI: 1"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_empty_result_file_is_internal_error() {
        // `true` exits 0 without writing anything
        let err = server_with("true")
            .handle_tool_call(TOOL_NAME, None)
            .await
            .unwrap_err();
        assert!(err.message.contains("JSON error"));
    }

    #[test]
    fn test_result_serialises_as_text_content() {
        let result = FeedbackResult {
            interactive_feedback: "fine".to_string(),
            git_commit: false,
        };
        let content = Content::text(serde_json::to_string(&result).unwrap());
        match &content.raw {
            RawContent::Text(text) => {
                let parsed: FeedbackResult = serde_json::from_str(&text.text).unwrap();
                assert_eq!(parsed, result);
            }
            _ => panic!("expected text content"),
        }
    }
}
