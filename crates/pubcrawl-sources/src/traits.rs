use async_trait::async_trait;
use pubcrawl_models::Pub;
use tracing::info;
use crate::decode::decode;
use crate::error::SourceError;

/// Anything that can hand over a raw pubcache document
#[async_trait]
pub trait PubSource: Send + Sync {
    fn source_name(&self) -> &str;

    /// Raw response bytes, or `SourceError::FetchFailed`
    async fn fetch(&self) -> Result<Vec<u8>, SourceError>;
}

/// Fetch from `source` and decode the result
pub async fn fetch_pubs(source: &dyn PubSource) -> Result<Vec<Pub>, SourceError> {
    let bytes = source.fetch().await?;
    info!(source = source.source_name(), bytes = bytes.len(), "Fetched pub data");

    let pubs = decode(&bytes)?;
    info!(source = source.source_name(), pubs = pubs.len(), "Decoded pubs");
    Ok(pubs)
}
