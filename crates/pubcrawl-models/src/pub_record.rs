use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::unique_key::UniqueKey;

/// A single pub listing as reported by the pubcache API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pub {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "PostCode", default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(rename = "RegularBeers", default, skip_serializing_if = "Option::is_none")]
    pub regular_beers: Option<Vec<String>>,
    #[serde(rename = "GuestBeers", default, skip_serializing_if = "Option::is_none")]
    pub guest_beers: Option<Vec<String>>,
    /// Opaque, never interpreted
    #[serde(rename = "PubService")]
    pub service_url: String,
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Branch")]
    pub branch: String,
    #[serde(rename = "CreateTS", with = "crate::timestamp")]
    pub created_at: NaiveDateTime,
}

impl Pub {
    pub fn unique_key(&self) -> UniqueKey {
        UniqueKey::new(&self.id, &self.branch)
    }

    pub fn regular_beers(&self) -> &[String] {
        self.regular_beers.as_deref().unwrap_or_default()
    }

    pub fn guest_beers(&self) -> &[String] {
        self.guest_beers.as_deref().unwrap_or_default()
    }

    /// Regular beers followed by guest beers; absent lists contribute nothing
    pub fn beers(&self) -> impl Iterator<Item = &String> {
        self.regular_beers().iter().chain(self.guest_beers().iter())
    }
}
