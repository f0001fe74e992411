use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{DocumentSource, SourceError};

/// Document source backed by a local file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl DocumentSource for FileSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| SourceError::Unreachable(format!("{}: {}", self.path.display(), e)))
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
