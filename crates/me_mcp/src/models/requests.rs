use derive_getters::Getters;
use rmcp::schemars;
use serde::Deserialize;

/// Request to overwrite a knowledge base document.
///
/// The field type enforces the input contract: a missing or non-string
/// `new_content` is rejected during deserialization, before any file I/O.
#[derive(Debug, Deserialize, schemars::JsonSchema, Getters)]
pub struct UpdateDocumentRequest {
    /// The complete new Markdown content for the document. The previous
    /// content is replaced in full; there is no merge or partial update.
    new_content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_valid_request() {
        let json = r##"{"new_content": "# Notes\n\nhello"}"##;
        let request: UpdateDocumentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.new_content(), "# Notes\n\nhello");
    }

    #[test]
    fn test_missing_new_content_is_rejected() {
        let result = serde_json::from_str::<UpdateDocumentRequest>("{}");
        let message = result.unwrap_err().to_string();
        assert!(message.contains("new_content"));
    }

    #[test]
    fn test_non_string_new_content_is_rejected() {
        let result = serde_json::from_str::<UpdateDocumentRequest>(r#"{"new_content": 42}"#);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("string"));
    }

    #[test]
    fn test_content_is_kept_verbatim() {
        // Whitespace and trailing newlines must survive deserialization untouched
        let json = r#"{"new_content": "  leading\n\ntrailing \n"}"#;
        let request: UpdateDocumentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.new_content(), "  leading\n\ntrailing \n");
    }
}
