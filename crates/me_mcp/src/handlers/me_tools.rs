use core::fmt;
use std::path::PathBuf;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    service::RequestContext,
    tool, tool_handler, tool_router,
};

use crate::{
    errors::{MeServerError, ToolResult},
    models::{Document, requests::UpdateDocumentRequest},
    store::DocumentStore,
};

/// Personal Knowledge Base MCP Service
///
/// Exposes three fixed Markdown documents through read and overwrite tools,
/// all scoped to the directory configured at startup.
pub struct MeService {
    store: DocumentStore,
    tool_router: ToolRouter<MeService>,
}

impl MeService {
    /// Create a new MeService over the resolved documents directory
    pub fn new(root: PathBuf) -> Self {
        Self {
            store: DocumentStore::new(root),
            tool_router: Self::tool_router(),
        }
    }

    fn create_resource_text(&self, uri: &str, name: &str) -> Resource {
        RawResource::new(uri, name.to_string()).no_annotation()
    }

    fn generate_status_content(&self) -> String {
        format!(
            r#"Personal Knowledge Base MCP Server Status

Server: Running
Documents Directory: {}
Tools Available: 6
Resources Available: 3

Documents:
{}

Capabilities:
- Full-text reads of the three knowledge base documents
- Full-content overwrites (previous content is replaced entirely)
- All access contained within the configured directory"#,
            self.store.root().display(),
            Document::ALL
                .iter()
                .map(|d| format!("- {} ({})", d.file_name(), d.description()))
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }

    fn generate_help_content(&self) -> String {
        format!(
            r##"Personal Knowledge Base MCP Server Help

TOOLS:

READING:
- get_resume_document: Read the full text of resume.md
- get_cognitive_core_document: Read the full text of cognitive_core.md
- get_projects_overview_document: Read the full text of projects_overview.md
  - No parameters required
  - The document file must already exist in the configured directory

UPDATING:
- update_resume_document: Overwrite resume.md with new content
- update_cognitive_core_document: Overwrite cognitive_core.md with new content
- update_projects_overview_document: Overwrite projects_overview.md with new content
  - new_content: Complete new Markdown content (required)
  - The previous content is replaced in full; the file is created if absent
  - Example: {{"new_content": "# Notes\n\nhello"}}

RESOURCES:
- me://status: Current server status and configuration
- me://help: This help documentation
- me://documents: The served documents and their file names

DOCUMENTS DIRECTORY:
{}

NOTES:
- Only the three fixed documents are addressable; there is no directory
  browsing or multi-file listing
- Updates are not versioned; overwritten content cannot be recovered"##,
            self.store.root().display()
        )
    }

    fn generate_documents_content(&self) -> String {
        format!(
            r#"Served Documents

Directory: {}

{}

Each document is read and written as a whole; update tools replace the
entire previous content."#,
            self.store.root().display(),
            Document::ALL
                .iter()
                .enumerate()
                .map(|(i, d)| format!("  {}. {} — {}", i + 1, d.file_name(), d.description()))
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

#[tool_router]
impl MeService {
    #[tool(
        description = "Read the full text of the resume document (resume.md) from the configured documents directory. Use this when you need the complete professional history, skills and project experience."
    )]
    async fn get_resume_document(&self) -> ToolResult {
        let content = self.store.read(Document::Resume).await?;
        Ok(CallToolResult::success(vec![Content::text(content)]))
    }

    #[tool(
        description = "Read the full text of the cognitive core notes (cognitive_core.md) from the configured documents directory. Use this to explore core thinking, methodology and lessons learned."
    )]
    async fn get_cognitive_core_document(&self) -> ToolResult {
        let content = self.store.read(Document::CognitiveCore).await?;
        Ok(CallToolResult::success(vec![Content::text(content)]))
    }

    #[tool(
        description = "Read the full text of the projects overview (projects_overview.md) from the configured documents directory. Use this for a quick picture of current projects, their goals, status and stack."
    )]
    async fn get_projects_overview_document(&self) -> ToolResult {
        let content = self.store.read(Document::ProjectsOverview).await?;
        Ok(CallToolResult::success(vec![Content::text(content)]))
    }

    #[tool(
        description = "Completely overwrite the resume document (resume.md) in the configured documents directory with the provided content. Use with caution: the previous content is replaced in full."
    )]
    async fn update_resume_document(
        &self,
        Parameters(req): Parameters<UpdateDocumentRequest>,
    ) -> ToolResult {
        let response = self.store.write(Document::Resume, req.new_content()).await?;
        Ok(CallToolResult::success(vec![response.into()]))
    }

    #[tool(
        description = "Completely overwrite the cognitive core notes (cognitive_core.md) in the configured documents directory with the provided content. Use with caution: the previous content is replaced in full."
    )]
    async fn update_cognitive_core_document(
        &self,
        Parameters(req): Parameters<UpdateDocumentRequest>,
    ) -> ToolResult {
        let response = self
            .store
            .write(Document::CognitiveCore, req.new_content())
            .await?;
        Ok(CallToolResult::success(vec![response.into()]))
    }

    #[tool(
        description = "Completely overwrite the projects overview (projects_overview.md) in the configured documents directory with the provided content. Use with caution: the previous content is replaced in full."
    )]
    async fn update_projects_overview_document(
        &self,
        Parameters(req): Parameters<UpdateDocumentRequest>,
    ) -> ToolResult {
        let response = self
            .store
            .write(Document::ProjectsOverview, req.new_content())
            .await?;
        Ok(CallToolResult::success(vec![response.into()]))
    }
}

#[tool_handler]
impl ServerHandler for MeService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(format!(
                "Personal knowledge base MCP server serving Markdown documents from {}. \
                 Tools: get_resume_document, get_cognitive_core_document, get_projects_overview_document, \
                 update_resume_document, update_cognitive_core_document, update_projects_overview_document. \
                 Update tools replace the entire document content. \
                 Resources: me://status, me://help, me://documents.",
                self.store.root().display()
            )),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult {
            resources: vec![
                self.create_resource_text("me://status", "server-status"),
                self.create_resource_text("me://help", "help-documentation"),
                self.create_resource_text("me://documents", "document-list"),
            ],
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri }: ReadResourceRequestParam,
        _: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        match uri.as_str() {
            "me://status" => {
                let status = self.generate_status_content();
                Ok(ReadResourceResult {
                    contents: vec![ResourceContents::text(status, uri)],
                })
            }
            "me://help" => {
                let help = self.generate_help_content();
                Ok(ReadResourceResult {
                    contents: vec![ResourceContents::text(help, uri)],
                })
            }
            "me://documents" => {
                let documents = self.generate_documents_content();
                Ok(ReadResourceResult {
                    contents: vec![ResourceContents::text(documents, uri)],
                })
            }
            _ => Err(MeServerError::ResourceNotFound {
                uri: uri.to_string(),
            }
            .into()),
        }
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        Ok(ListResourceTemplatesResult {
            next_cursor: None,
            resource_templates: Vec::new(),
        })
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, McpError> {
        tracing::info!("Personal Knowledge Base MCP Server initialized successfully");
        Ok(self.get_info())
    }
}

impl fmt::Debug for MeService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MeService")
            .field("root", &self.store.root())
            .finish()
    }
}
