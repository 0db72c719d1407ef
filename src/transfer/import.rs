use crate::error::{Result, SortlistError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// A user-chosen file whose contents can be read as text
#[async_trait]
pub trait TextFile: Send + Sync {
    /// File name as presented to the user, used for the extension check
    fn name(&self) -> &str;

    /// Reads the full contents
    async fn read_text(&self) -> Result<String>;
}

/// A file on the local filesystem
#[derive(Debug, Clone)]
pub struct LocalFile {
    path: PathBuf,
    name: String,
}

impl LocalFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TextFile for LocalFile {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read_text(&self) -> Result<String> {
        fs::read_to_string(&self.path)
            .await
            .map_err(|e| SortlistError::FileReadFailed {
                file_name: self.name.clone(),
                reason: e.to_string(),
            })
    }
}

/// Rejects names not ending in `.<extension>`. The comparison is case-sensitive.
pub fn check_extension(file_name: &str, extension: &str) -> Result<()> {
    let suffix = format!(".{}", extension);
    if file_name.ends_with(&suffix) {
        Ok(())
    } else {
        Err(SortlistError::InvalidFileType {
            file_name: file_name.to_string(),
            expected: extension.to_string(),
        })
    }
}

/// Splits `text` into one URL per line, skipping blank and whitespace-only lines.
///
/// Lines are otherwise kept as written; a trailing `\r` from CRLF input is dropped.
pub fn parse_url_list(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_drops_blank_lines() {
        let urls = parse_url_list("a.png\n\nb.png\n  \nc.png");
        assert_eq!(urls, ["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn test_parse_crlf_and_trailing_newline() {
        let urls = parse_url_list("https://x/1.jpg\r\nhttps://x/2.jpg\r\n\r\n");
        assert_eq!(urls, ["https://x/1.jpg", "https://x/2.jpg"]);
    }

    #[test]
    fn test_parse_keeps_duplicates_and_order() {
        let urls = parse_url_list("b\na\nb");
        assert_eq!(urls, ["b", "a", "b"]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_url_list("").is_empty());
        assert!(parse_url_list("\n \n\t\n").is_empty());
    }

    #[test]
    fn test_check_extension() {
        assert!(check_extension("output.txt", "txt").is_ok());
        assert!(check_extension("archive.txt.gz", "txt").is_err());
        assert!(check_extension("notes.TXT", "txt").is_err());
        assert!(check_extension("txt", "txt").is_err());

        match check_extension("photo.png", "txt") {
            Err(SortlistError::InvalidFileType { file_name, expected }) => {
                assert_eq!(file_name, "photo.png");
                assert_eq!(expected, "txt");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_local_file_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("urls.txt");
        tokio::fs::write(&path, "a.png\nb.png").await.unwrap();

        let file = LocalFile::new(&path);
        assert_eq!(file.name(), "urls.txt");
        assert_eq!(file.read_text().await.unwrap(), "a.png\nb.png");
    }

    #[tokio::test]
    async fn test_local_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let file = LocalFile::new(temp_dir.path().join("gone.txt"));

        let result = file.read_text().await;
        assert!(matches!(result, Err(SortlistError::FileReadFailed { .. })));
    }
}
