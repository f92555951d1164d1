use pubcrawl_models::Pub;
use serde::Serialize;
use crate::beers::sorted_unique_beers;
use crate::dedup::unique_pubs;

/// Everything a run reports, built without touching the network or stdout
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PubReport {
    pub beers: Vec<String>,
    pub total_pubs: usize,
    pub unique_pubs: usize,
    pub pubs: Vec<Pub>, // Deduplicated, sorted by name
}

impl PubReport {
    pub fn build(pubs: &[Pub]) -> Self {
        let mut unique = unique_pubs(pubs);
        unique.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| a.unique_key().cmp(&b.unique_key()))
        });

        Self {
            beers: sorted_unique_beers(pubs),
            total_pubs: pubs.len(),
            unique_pubs: unique.len(),
            pubs: unique,
        }
    }

    pub fn summary(&self) -> String {
        format!("Total pubs: {}, unique pubs: {}", self.total_pubs, self.unique_pubs)
    }
}
