pub mod beers;
pub mod dedup;
pub mod report;

pub use beers::{sorted_unique_beers, unique_beers};
pub use dedup::unique_pubs;
pub use report::PubReport;

#[cfg(test)]
pub(crate) mod test_support;
