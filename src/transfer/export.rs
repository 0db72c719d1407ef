use crate::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Delivers an exported file to the user
#[async_trait]
pub trait Downloader: Send + Sync {
    async fn download(&self, file_name: &str, contents: &str) -> Result<()>;
}

/// Saves downloads into a directory
#[derive(Debug, Clone)]
pub struct DirectoryDownloader {
    dir: PathBuf,
}

impl DirectoryDownloader {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl Downloader for DirectoryDownloader {
    async fn download(&self, file_name: &str, contents: &str) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).await?;
        }
        let path = self.dir.join(file_name);
        fs::write(&path, contents).await?;
        tracing::info!(path = %path.display(), bytes = contents.len(), "wrote export");
        Ok(())
    }
}

/// One URL per line, in list order, without a trailing newline
pub fn export_contents<I, S>(urls: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    urls.into_iter()
        .map(|url| url.as_ref().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `<prefix>-<YYYY-MM-DD>.txt`
pub fn export_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}-{}.txt", prefix, date.format("%Y-%m-%d"))
}
