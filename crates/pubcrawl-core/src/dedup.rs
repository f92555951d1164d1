// Collapsing pubs reported more than once by overlapping query regions

use pubcrawl_models::{Pub, UniqueKey};
use tracing::debug;

/// One pub per `unique_key`, keeping the record with the latest `created_at`.
///
/// Records are stable-sorted by key and each run of equal keys is scanned once, so
/// this is O(n log n). When several records in a run share the maximal `created_at`,
/// the one appearing last in the input wins. Output is ordered by key.
pub fn unique_pubs(pubs: &[Pub]) -> Vec<Pub> {
    let mut keyed: Vec<(UniqueKey, &Pub)> = pubs.iter().map(|p| (p.unique_key(), p)).collect();
    // sort_by is stable: equal keys keep input order
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    let mut unique = Vec::new();
    let mut runs = keyed.into_iter().peekable();
    while let Some((key, first)) = runs.next() {
        let mut newest = first;
        while let Some((_, candidate)) = runs.next_if(|(next_key, _)| *next_key == key) {
            if candidate.created_at >= newest.created_at {
                newest = candidate;
            }
        }
        unique.push(newest.clone());
    }

    debug!(
        "unique_pubs: input_count={}, unique_count={}, duplicates_dropped={}",
        pubs.len(),
        unique.len(),
        pubs.len() - unique.len()
    );

    unique
}
