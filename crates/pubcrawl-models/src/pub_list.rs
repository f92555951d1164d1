use serde::{Deserialize, Serialize};
use crate::pub_record::Pub;

/// Root of a pubcache response: `{"Pubs": [...]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PubList {
    #[serde(rename = "Pubs")]
    pub pubs: Vec<Pub>,
}

impl PubList {
    pub fn into_pubs(self) -> Vec<Pub> {
        self.pubs
    }
}
