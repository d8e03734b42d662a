use relative_path::{RelativePath, RelativePathBuf};

/// A saved assistant reply on disk, identified by its path relative to the
/// replies directory, with a display-friendly name
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyFile {
    relative_path: RelativePathBuf,
    display_name: String,
}

impl ReplyFile {
    /// Create a new ReplyFile from a relative path
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = Self::extract_display_name(&relative_path);

        Self {
            relative_path,
            display_name,
        }
    }

    /// Create from a relative path string
    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    /// Get the relative path
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Get the display name (file name without the transcript extension)
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Extract display name from a relative path (strips .md/.txt extension)
    fn extract_display_name(path: &RelativePath) -> String {
        path.file_name()
            .map(strip_transcript_extension)
            .unwrap_or("Untitled")
            .to_string()
    }
}

fn strip_transcript_extension(name: &str) -> &str {
    name.strip_suffix(".md")
        .or_else(|| name.strip_suffix(".txt"))
        .unwrap_or(name)
}

impl From<RelativePathBuf> for ReplyFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for ReplyFile {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}
