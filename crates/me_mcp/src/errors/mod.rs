pub type McpError = rmcp::ErrorData;

/// Result type for server-internal operations
pub type MeServerResult<T> = Result<T, MeServerError>;

/// Type alias for MCP results
pub type McpResult<T> = Result<T, McpError>;

/// Type alias for tool results
pub type ToolResult = McpResult<rmcp::model::CallToolResult>;

/// Errors raised by startup validation and the document store
#[derive(thiserror::Error, Debug)]
pub enum MeServerError {
    #[error("Directory does not exist: {path}")]
    RootNotFound { path: String },
    #[error("Cannot access directory: {path}")]
    RootInaccessible { path: String },
    #[error("Configured path is not a directory: {path}")]
    NotADirectory { path: String },
    #[error("File not found: {file_name} in directory {directory}. Please ensure the file exists.")]
    DocumentNotFound {
        file_name: String,
        directory: String,
    },
    #[error("Attempt to access file outside the configured directory: {file_name}")]
    OutsideConfiguredDirectory { file_name: String },
    #[error("Failed to read {file_name}: {message}")]
    ReadFailed { file_name: String, message: String },
    #[error("Failed to write to {file_name}: {message}")]
    WriteFailed { file_name: String, message: String },
    #[error("Resource not found: {uri}")]
    ResourceNotFound { uri: String },
    /// Logging initialization failed
    #[error("Logging initialization failed: {0}")]
    LoggingInitialization(String),
}

impl From<MeServerError> for McpError {
    fn from(err: MeServerError) -> Self {
        match err {
            MeServerError::RootNotFound { path } => {
                McpError::invalid_params(format!("Directory does not exist: {}", path), None)
            }
            MeServerError::RootInaccessible { path } => {
                McpError::invalid_params(format!("Cannot access directory: {}", path), None)
            }
            MeServerError::NotADirectory { path } => {
                McpError::invalid_params(format!("Configured path is not a directory: {}", path), None)
            }
            MeServerError::DocumentNotFound {
                file_name,
                directory,
            } => McpError::resource_not_found(
                format!(
                    "File not found: {} in directory {}. Please ensure the file exists.",
                    file_name, directory
                ),
                None,
            ),
            MeServerError::OutsideConfiguredDirectory { file_name } => McpError::invalid_request(
                format!(
                    "Attempt to access file outside the configured directory: {}",
                    file_name
                ),
                None,
            ),
            MeServerError::ReadFailed { file_name, message } => McpError::internal_error(
                format!("Failed to read {}: {}", file_name, message),
                None,
            ),
            MeServerError::WriteFailed { file_name, message } => McpError::internal_error(
                format!("Failed to write to {}: {}", file_name, message),
                None,
            ),
            MeServerError::ResourceNotFound { uri } => McpError::resource_not_found(
                format!("Resource not found: {}", uri),
                Some(rmcp::serde_json::json!({
                    "uri": uri,
                    "available_resources": ["me://status", "me://help", "me://documents"]
                })),
            ),
            MeServerError::LoggingInitialization(msg) => {
                McpError::internal_error(format!("Logging initialization failed: {}", msg), None)
            }
        }
    }
}
