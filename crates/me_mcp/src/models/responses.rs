use core::fmt;

use rmcp::model::Content;

use crate::models::Document;

/// Confirmation returned by a successful document overwrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateDocumentResponse {
    document: Document,
}

impl UpdateDocumentResponse {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// File name of the document that was updated
    pub fn file_name(&self) -> &'static str {
        self.document.file_name()
    }
}

impl fmt::Display for UpdateDocumentResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Successfully updated {}.", self.file_name())
    }
}

impl From<UpdateDocumentResponse> for Content {
    fn from(value: UpdateDocumentResponse) -> Self {
        Content::text(value.to_string())
    }
}
