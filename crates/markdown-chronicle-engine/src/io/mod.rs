use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid documents directory: {0}")]
    InvalidDocumentsDir(String),
}

/// Read a markdown document and return its content
pub fn read_document(relative_path: &RelativePath, documents_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(documents_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to a markdown document
pub fn write_document(
    relative_path: &RelativePath,
    documents_root: &Path,
    content: &str,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(documents_root);

    // Create parent directories if they don't exist
    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Store a dropped file under `assets/` next to its document.
///
/// Returns the link target to insert into the markdown, relative to the
/// document's own directory, so the link resolves wherever the documents
/// root is mounted. Name collisions get a numeric suffix rather than
/// overwriting an earlier asset.
pub fn write_asset(
    document: &RelativePath,
    file_name: &str,
    bytes: &[u8],
    documents_root: &Path,
) -> Result<RelativePathBuf, IoError> {
    // Drop handlers report whatever name the source had; keep only the
    // final component.
    let name = file_name
        .rsplit(['/', '\\'])
        .next()
        .filter(|n| !n.is_empty())
        .unwrap_or("asset");
    let (stem, ext) = split_name(name);

    let parent = document.parent().unwrap_or_else(|| RelativePath::new(""));
    let mut link = RelativePathBuf::from("assets").join(name);
    let mut counter = 1;
    while parent.join_normalized(&link).to_path(documents_root).exists() {
        link = RelativePathBuf::from("assets").join(format!("{stem}-{counter}{ext}"));
        counter += 1;
    }

    let absolute_path = parent.join_normalized(&link).to_path(documents_root);
    if let Some(dir) = absolute_path.parent() {
        fs::create_dir_all(dir).map_err(IoError::Io)?;
    }
    fs::write(&absolute_path, bytes).map_err(IoError::Io)?;
    Ok(link)
}

fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(i) if i > 0 => (&name[..i], &name[i..]),
        _ => (name, ""),
    }
}

/// Scan for markdown documents in the documents directory
pub fn scan_markdown_files(documents_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !documents_root.exists() {
        return Err(IoError::InvalidDocumentsDir(
            "documents directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(documents_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_documents_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDocumentsDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_docs_dir, create_test_file};

    #[test]
    fn test_scan_and_load_files() {
        // Given a documents directory with markdown files
        let docs_dir = create_test_docs_dir();
        create_test_file(&docs_dir, "test1.md", "- First item\n- Second item");
        create_test_file(&docs_dir, "test2.md", "# Heading\n\nParagraph");

        // When scanning for files
        let files = scan_markdown_files(docs_dir.path()).unwrap();

        // Then we find the expected files
        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.file_name().unwrap() == "test1.md"));
        assert!(files.iter().any(|f| f.file_name().unwrap() == "test2.md"));
    }

    #[test]
    fn test_handle_invalid_documents_directory() {
        let nonexistent_path = PathBuf::from("/this/path/does/not/exist");

        let result = scan_markdown_files(&nonexistent_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("documents directory"));
    }

    #[test]
    fn test_scan_nested_directories() {
        // Given a documents directory with nested structure
        let docs_dir = create_test_docs_dir();
        create_test_file(&docs_dir, "root.md", "# Root file");

        let sub_dir = docs_dir.path().join("subfolder");
        std::fs::create_dir(&sub_dir).unwrap();
        std::fs::write(sub_dir.join("nested.md"), "# Nested file").unwrap();

        // When scanning for files
        let files = scan_markdown_files(docs_dir.path()).unwrap();

        // Then we find both root and nested files
        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.file_name().unwrap() == "root.md"));
        assert!(files.iter().any(|f| f.file_name().unwrap() == "nested.md"));
    }

    #[test]
    fn test_ignore_non_markdown_files() {
        // Given a documents directory with mixed file types
        let docs_dir = create_test_docs_dir();
        create_test_file(&docs_dir, "document.md", "# Markdown");
        create_test_file(&docs_dir, "image.png", "fake image data");
        create_test_file(&docs_dir, "config.json", "{}");

        // When scanning for files
        let files = scan_markdown_files(docs_dir.path()).unwrap();

        // Then we only find markdown files
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name().unwrap(), "document.md");
    }

    #[test]
    fn test_validate_documents_dir_exists() {
        let docs_dir = create_test_docs_dir();
        let result = validate_documents_dir(docs_dir.path());
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_documents_dir_not_exists() {
        let result = validate_documents_dir(Path::new("/nonexistent/path"));
        assert!(result.is_err());
        assert!(matches!(result, Err(IoError::InvalidDocumentsDir(_))));
    }

    #[test]
    fn test_read_document_success() {
        let docs_dir = create_test_docs_dir();
        create_test_file(&docs_dir, "test.md", "# Test Content\n\nParagraph");

        let relative_path = RelativePath::new("test.md");
        let content = read_document(relative_path, docs_dir.path()).unwrap();
        assert_eq!(content, "# Test Content\n\nParagraph");
    }

    #[test]
    fn test_read_document_not_found() {
        let docs_dir = create_test_docs_dir();
        let relative_path = RelativePath::new("nonexistent.md");
        let result = read_document(relative_path, docs_dir.path());
        assert!(result.is_err());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_write_document_success() {
        let docs_dir = create_test_docs_dir();
        let relative_path = RelativePath::new("new_file.md");
        let content = "# New File\n\nThis is new content";

        let result = write_document(relative_path, docs_dir.path(), content);
        assert!(result.is_ok());

        let written_content = read_document(relative_path, docs_dir.path()).unwrap();
        assert_eq!(written_content, content);
    }

    #[test]
    fn test_write_document_creates_parent_directories() {
        let docs_dir = create_test_docs_dir();
        let relative_path = RelativePath::new("folder/subfolder/new_file.md");
        let content = "# New File in Nested Folder";

        let result = write_document(relative_path, docs_dir.path(), content);
        assert!(result.is_ok());

        let written_content = read_document(relative_path, docs_dir.path()).unwrap();
        assert_eq!(written_content, content);

        let parent_dir = docs_dir.path().join("folder").join("subfolder");
        assert!(parent_dir.exists());
        assert!(parent_dir.is_dir());
    }

    #[test]
    fn test_write_document_overwrites_existing() {
        let docs_dir = create_test_docs_dir();
        create_test_file(&docs_dir, "existing.md", "# Original Content");

        let relative_path = RelativePath::new("existing.md");
        let new_content = "# Updated Content\n\nThis is new";

        let result = write_document(relative_path, docs_dir.path(), new_content);
        assert!(result.is_ok());

        let written_content = read_document(relative_path, docs_dir.path()).unwrap();
        assert_eq!(written_content, new_content);
    }

    #[test]
    fn test_write_asset_next_to_document() {
        let docs_dir = create_test_docs_dir();
        create_test_file(&docs_dir, "note.md", "# Note");

        let link = write_asset(
            RelativePath::new("note.md"),
            "shot.png",
            b"png bytes",
            docs_dir.path(),
        )
        .unwrap();

        assert_eq!(link.as_str(), "assets/shot.png");
        let stored = docs_dir.path().join("assets").join("shot.png");
        assert_eq!(std::fs::read(stored).unwrap(), b"png bytes");
    }

    #[test]
    fn test_write_asset_for_nested_document() {
        let docs_dir = create_test_docs_dir();

        let link = write_asset(
            RelativePath::new("journal/today.md"),
            "pic.png",
            b"data",
            docs_dir.path(),
        )
        .unwrap();

        // The link stays relative to the document, the bytes land in the
        // document's own assets folder.
        assert_eq!(link.as_str(), "assets/pic.png");
        let stored = docs_dir.path().join("journal").join("assets").join("pic.png");
        assert!(stored.exists());
    }

    #[test]
    fn test_write_asset_avoids_collisions() {
        let docs_dir = create_test_docs_dir();

        let first = write_asset(RelativePath::new("n.md"), "a.png", b"one", docs_dir.path()).unwrap();
        let second = write_asset(RelativePath::new("n.md"), "a.png", b"two", docs_dir.path()).unwrap();

        assert_eq!(first.as_str(), "assets/a.png");
        assert_eq!(second.as_str(), "assets/a-1.png");
        let kept = docs_dir.path().join("assets").join("a.png");
        assert_eq!(std::fs::read(kept).unwrap(), b"one");
    }

    #[test]
    fn test_write_asset_strips_source_paths() {
        let docs_dir = create_test_docs_dir();

        let link = write_asset(
            RelativePath::new("n.md"),
            "C:\\fakepath\\img.png",
            b"data",
            docs_dir.path(),
        )
        .unwrap();

        assert_eq!(link.as_str(), "assets/img.png");
    }
}
