use crate::error::DecodeError;
use pubcrawl_models::{Pub, PubList};
use tracing::debug;

/// Decode a `{"Pubs": [...]}` document into its root object
pub fn decode_pub_list(bytes: &[u8]) -> Result<PubList, DecodeError> {
    let list: PubList = serde_json::from_slice(bytes)?;
    debug!(pubs = list.pubs.len(), bytes = bytes.len(), "Decoded pub list");
    Ok(list)
}

/// Decode a pubcache response into pubs, in document order
pub fn decode(bytes: &[u8]) -> Result<Vec<Pub>, DecodeError> {
    decode_pub_list(bytes).map(PubList::into_pubs)
}
