// Stdio server loop: one JSON-RPC request per line, one response per line

use crate::protocol::{
    CallToolParams, InitializeResult, JsonRpcError, JsonRpcRequest, JsonRpcResponse,
    ListToolsResult, ServerCapabilities, ServerInfo, PROTOCOL_VERSION,
};
use crate::tools::ToolRegistry;
use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

/// Per-request failures. Each variant is recovered locally and turned into
/// an error response; none of them terminates the loop.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("Parse error")]
    Parse(#[source] serde_json::Error),
    #[error("Method not found: {0}")]
    UnknownMethod(String),
    #[error("{0}")]
    Tool(String),
}

impl From<RequestError> for JsonRpcError {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::Parse(_) => JsonRpcError::parse_error(),
            RequestError::UnknownMethod(method) => JsonRpcError::method_not_found(&method),
            RequestError::Tool(message) => JsonRpcError::tool_error(message),
        }
    }
}

pub struct McpServer {
    registry: ToolRegistry,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Handle one input line. Returns `None` for blank lines, otherwise
    /// exactly one response.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!(error = %err, "discarding unparseable line");
                return Some(JsonRpcResponse::error(
                    serde_json::Value::Null,
                    RequestError::Parse(err).into(),
                ));
            }
        };

        let id = request.id.clone();
        Some(match self.dispatch(request).await {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(err) => JsonRpcResponse::error(id, err.into()),
        })
    }

    async fn dispatch(&self, request: JsonRpcRequest) -> Result<serde_json::Value, RequestError> {
        tracing::debug!(method = %request.method, "routing request");
        match request.method.as_str() {
            "initialize" => {
                let result = InitializeResult {
                    protocol_version: PROTOCOL_VERSION.to_string(),
                    capabilities: ServerCapabilities {
                        tools: serde_json::json!({}),
                    },
                    server_info: ServerInfo {
                        name: env!("CARGO_PKG_NAME").to_string(),
                        version: env!("CARGO_PKG_VERSION").to_string(),
                    },
                };
                Ok(serde_json::to_value(result).expect("initialize result serializes"))
            }
            "tools/list" => {
                let result = ListToolsResult {
                    tools: self.registry.list_schemas(),
                };
                Ok(serde_json::to_value(result).expect("tool schemas serialize"))
            }
            "tools/call" => self.call_tool(request.params.unwrap_or_default()).await,
            other => Err(RequestError::UnknownMethod(other.to_string())),
        }
    }

    async fn call_tool(&self, params: serde_json::Value) -> Result<serde_json::Value, RequestError> {
        let params: CallToolParams = serde_json::from_value(params)
            .map_err(|err| RequestError::Tool(format!("Invalid tool call params: {}", err)))?;

        let tool = self
            .registry
            .get(&params.name)
            .ok_or_else(|| RequestError::Tool(format!("Unknown tool: {}", params.name)))?;

        match tool.execute(params.arguments).await {
            Ok(result) => {
                Ok(serde_json::to_value(result).expect("tool result serializes"))
            }
            Err(err) => Err(RequestError::Tool(format!(
                "Tool {} failed: {:#}",
                params.name, err
            ))),
        }
    }

    /// Drive the loop over arbitrary streams. Used by `run` with the real
    /// stdio handles and by tests with in-memory buffers.
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut line = String::new();

        loop {
            line.clear();
            let read = reader
                .read_line(&mut line)
                .await
                .context("Failed to read from input stream")?;
            if read == 0 {
                tracing::info!("Input stream closed, shutting down");
                break;
            }

            if let Some(response) = self.handle_line(&line).await {
                let serialized =
                    serde_json::to_string(&response).context("Failed to serialize response")?;
                writer
                    .write_all(serialized.as_bytes())
                    .await
                    .context("Failed to write response")?;
                writer
                    .write_all(b"\n")
                    .await
                    .context("Failed to write response")?;
                writer.flush().await.context("Failed to flush response")?;
            }
        }

        Ok(())
    }

    /// Serve JSON-RPC over this process's stdin/stdout
    pub async fn run(&self) -> Result<()> {
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }
}
