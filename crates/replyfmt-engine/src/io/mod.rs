use crate::models::ReplyFile;
use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Reply not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid replies directory: {0}")]
    InvalidRepliesDir(String),
}

/// Read a saved reply and return its raw text
pub fn read_reply(relative_path: &RelativePath, replies_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(replies_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Scan for saved reply transcripts (.md / .txt) in the replies directory
pub fn scan_reply_files(replies_root: &Path) -> Result<Vec<ReplyFile>, IoError> {
    if !replies_root.exists() {
        return Err(IoError::InvalidRepliesDir(
            "replies directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(replies_root, RelativePath::new(""), &mut files)?;
    files.sort_by(|a, b| a.relative_path().as_str().cmp(b.relative_path().as_str()));
    Ok(files)
}

fn scan_directory_recursive(
    dir: &Path,
    prefix: &RelativePath,
    files: &mut Vec<ReplyFile>,
) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();

        if path.is_dir() {
            scan_directory_recursive(&path, &prefix.join(&name), files)?;
        } else if is_transcript(&path) {
            files.push(ReplyFile::new(prefix.join(&name)));
        }
    }

    Ok(())
}

fn is_transcript(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("md" | "txt")
    )
}

pub fn validate_replies_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidRepliesDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
