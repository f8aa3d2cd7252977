use std::path::PathBuf;

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    /// Resolved, canonical directory holding the knowledge base documents
    pub root: PathBuf,
}
