pub mod html;
pub mod markdown;

use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Document;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a Markdown file into a document
pub fn read_document(path: &Path) -> Result<Document, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(IoError::Io)?;
    let document = markdown::parse(&content);
    log::info!(
        "Loaded {} block(s) from {}",
        document.len(),
        path.display()
    );
    Ok(document)
}

/// Render a document to HTML and write it to `path`
pub fn write_html(path: &Path, document: &Document) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, html::render(document)).map_err(IoError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_dir, create_test_file};

    #[test]
    fn test_read_document_success() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "list.md", "1. One\n2. Two\n");

        let document = read_document(&path).unwrap();
        assert_eq!(document.len(), 2);
    }

    #[test]
    fn test_read_document_not_found() {
        let dir = create_test_dir();
        let result = read_document(&dir.path().join("missing.md"));

        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_write_html_creates_parent_directories() {
        let dir = create_test_dir();
        let path = dir.path().join("out").join("nested").join("list.html");
        let document = markdown::parse("- Item\n");

        write_html(&path, &document).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<ul>"));
    }

    #[test]
    fn test_write_html_overwrites_existing() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "list.html", "stale");

        write_html(&path, &markdown::parse("Fresh\n")).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>Fresh</p>\n");
    }
}
