use core::fmt;

/// The fixed set of knowledge base documents this server exposes.
///
/// Each variant maps to exactly one file name inside the configured
/// directory; no other documents are addressable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    Resume,
    CognitiveCore,
    ProjectsOverview,
}

impl Document {
    pub const ALL: [Document; 3] = [
        Document::Resume,
        Document::CognitiveCore,
        Document::ProjectsOverview,
    ];

    /// File name of the backing Markdown file inside the configured directory
    pub fn file_name(self) -> &'static str {
        match self {
            Document::Resume => "resume.md",
            Document::CognitiveCore => "cognitive_core.md",
            Document::ProjectsOverview => "projects_overview.md",
        }
    }

    /// Short human-readable description used in help and resource listings
    pub fn description(self) -> &'static str {
        match self {
            Document::Resume => "professional history, skills and project experience",
            Document::CognitiveCore => "core thinking, methodology and lessons learned",
            Document::ProjectsOverview => "current projects with goals, status and stack",
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_are_fixed() {
        assert_eq!(Document::Resume.file_name(), "resume.md");
        assert_eq!(Document::CognitiveCore.file_name(), "cognitive_core.md");
        assert_eq!(
            Document::ProjectsOverview.file_name(),
            "projects_overview.md"
        );
    }

    #[test]
    fn test_all_lists_every_document() {
        assert_eq!(Document::ALL.len(), 3);
        for document in Document::ALL {
            assert!(document.file_name().ends_with(".md"));
            assert!(!document.description().is_empty());
        }
    }
}
