use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;
use crate::error::SourceError;
use crate::traits::PubSource;

/// Offline source backed by a local file or an in-memory document
pub struct FixturePubSource {
    mode: Mode,
}

enum Mode {
    File(PathBuf),
    Inline(String),
}

impl FixturePubSource {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            mode: Mode::File(path.into()),
        }
    }

    pub fn from_document(document: &str) -> Self {
        Self {
            mode: Mode::Inline(document.to_string()),
        }
    }
}

#[async_trait]
impl PubSource for FixturePubSource {
    fn source_name(&self) -> &str {
        "fixture"
    }

    async fn fetch(&self) -> Result<Vec<u8>, SourceError> {
        match &self.mode {
            Mode::File(path) => {
                debug!("Reading pub fixture from {}", path.display());
                tokio::fs::read(path).await.map_err(|e| {
                    SourceError::fetch_failed(
                        self.source_name(),
                        format!("could not read {}: {}", path.display(), e),
                    )
                })
            }
            Mode::Inline(document) => Ok(document.as_bytes().to_vec()),
        }
    }
}
