//! Document store adapter.
//!
//! Maps each logical [`Document`] to its fixed file inside the configured
//! directory and performs the two operations this server supports: full-text
//! read and full-content overwrite. Every access passes the containment
//! check before touching the filesystem.

use std::path::{Path, PathBuf};
use tokio::fs;

use crate::errors::{MeServerError, MeServerResult};
use crate::models::Document;
use crate::models::responses::UpdateDocumentResponse;
use crate::utils::path::normalize_path;

/// Filesystem adapter scoped to one immutable root directory.
///
/// Stateless apart from the root: each call is independent, and concurrent
/// overwrites of the same document are not coordinated (last write wins).
#[derive(Debug, Clone)]
pub struct DocumentStore {
    root: PathBuf,
}

impl DocumentStore {
    /// Create a store over an already-resolved canonical root directory
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a document to its backing path inside the root.
    ///
    /// Invariant: the normalized joined path must stay within the root.
    /// With fixed file names this cannot fail today, but the check guards
    /// the contract should caller-supplied names ever be introduced.
    fn resolve(&self, document: Document) -> MeServerResult<PathBuf> {
        let path = self.root.join(document.file_name());
        if !normalize_path(&path).starts_with(&self.root) {
            return Err(MeServerError::OutsideConfiguredDirectory {
                file_name: document.file_name().to_string(),
            });
        }
        Ok(path)
    }

    /// Read the full text of a document, verbatim.
    ///
    /// A read never creates the backing file; a missing file is reported as
    /// a not-found error naming the file and the configured directory.
    pub async fn read(&self, document: Document) -> MeServerResult<String> {
        let path = self.resolve(document)?;

        match fs::read_to_string(&path).await {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(MeServerError::DocumentNotFound {
                    file_name: document.file_name().to_string(),
                    directory: self.root.display().to_string(),
                })
            }
            Err(e) => Err(MeServerError::ReadFailed {
                file_name: document.file_name().to_string(),
                message: e.to_string(),
            }),
        }
    }

    /// Overwrite a document with new content, creating the file if absent.
    ///
    /// The write replaces the entire previous content; no merge, no partial
    /// update, no recovery attempt on failure.
    pub async fn write(
        &self,
        document: Document,
        new_content: &str,
    ) -> MeServerResult<UpdateDocumentResponse> {
        let path = self.resolve(document)?;

        fs::write(&path, new_content)
            .await
            .map_err(|e| MeServerError::WriteFailed {
                file_name: document.file_name().to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!("updated {} in {}", document.file_name(), self.root.display());
        Ok(UpdateDocumentResponse::new(document))
    }
}
