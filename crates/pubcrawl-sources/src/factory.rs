//! Picks the data source for a run from configuration.

use pubcrawl_config::Config;
use std::path::PathBuf;
use tracing::info;
use crate::error::SourceError;
use crate::fixture::FixturePubSource;
use crate::http::HttpPubSource;
use crate::traits::PubSource;

pub struct SourceFactory;

impl SourceFactory {
    /// A local fixture wins over the live API when one is given
    pub fn create(config: &Config, fixture: Option<PathBuf>) -> Result<Box<dyn PubSource>, SourceError> {
        match fixture {
            Some(path) => {
                info!("Using local fixture {}", path.display());
                Ok(Box::new(FixturePubSource::from_path(path)))
            }
            None => {
                info!(
                    lat = config.area.latitude,
                    lng = config.area.longitude,
                    deg = config.area.deg,
                    "Using pubcache API at {}",
                    config.api.base_url
                );
                Ok(Box::new(HttpPubSource::new(&config.api, &config.area)?))
            }
        }
    }
}
