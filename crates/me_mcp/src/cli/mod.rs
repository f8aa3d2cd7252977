use clap::Parser;

use crate::config::Config;
use crate::errors::MeServerResult;
use crate::utils::fs::resolve_root;

/// Personal Knowledge Base MCP Server
///
/// A Model Context Protocol server exposing three personal Markdown documents
/// (resume.md, cognitive_core.md, projects_overview.md) from a single
/// configured directory.
///
/// ## Features
/// - **Tools**: Full-text read and full-content overwrite per document
/// - **Security**: All access is contained within the configured directory
/// - **Validation**: The directory is resolved and checked once at startup
///
/// ## Development
/// ```bash
/// npx @modelcontextprotocol/inspector cargo run --bin mcp-server-me -- ~/knowledge-base
/// ```
///
/// ## Configuration
/// Add to your MCP client configuration:
/// ```json
/// {
///   "mcpServers": {
///     "me": {
///       "command": "mcp-server-me",
///       "args": ["~/knowledge-base"],
///       "env": {
///         "RUST_LOG": "info"
///       }
///     }
///   }
/// }
/// ```
///
/// ## Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
#[derive(Parser, Debug, Clone)]
#[command(name = "mcp-server-me")]
#[command(about = "An MCP server for a personal knowledge base of Markdown documents")]
#[command(version)]
#[command(
    long_about = "A Model Context Protocol (MCP) server that serves a personal knowledge base. \nProvide the directory where resume.md, cognitive_core.md, and projects_overview.md live; \nthe server exposes one read tool and one overwrite tool per document."
)]
pub struct Cli {
    /// Directory containing the knowledge base documents.
    ///
    /// Supports a leading `~` for the home directory. The path must exist
    /// and be a directory; the server refuses to start otherwise.
    #[arg(
        help = "Directory containing resume.md, cognitive_core.md and projects_overview.md",
        value_name = "DIRECTORY",
        long_help = "Path to the directory holding the three knowledge base documents. \nA leading ~ is expanded to your home directory. The server exits with an error \nif the path is missing or is not a directory."
    )]
    pub directory: String,
}

impl Cli {
    /// Parse CLI arguments and convert to configuration.
    ///
    /// Resolves the documents directory exactly once; the resulting root is
    /// immutable for the lifetime of the process.
    pub async fn parse_config() -> MeServerResult<Config> {
        let cli = Self::parse();
        let root = resolve_root(&cli.directory).await?;
        Ok(Config { root })
    }
}
