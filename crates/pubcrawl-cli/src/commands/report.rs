use crate::output::Output;
use color_eyre::eyre::{eyre, Context};
use color_eyre::Result;
use pubcrawl_config::{Config, PathManager};
use pubcrawl_core::PubReport;
use pubcrawl_sources::{fetch_pubs, SourceFactory};
use std::path::PathBuf;
use tracing::info;

/// Command-line values that take precedence over the config file
#[derive(Debug, Default, Clone)]
pub struct AreaOverrides {
    pub user_id: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub deg: Option<f64>,
}

impl AreaOverrides {
    pub fn apply(self, config: &mut Config) {
        if let Some(user_id) = self.user_id {
            config.api.user_id = user_id;
        }
        if let Some(latitude) = self.latitude {
            config.area.latitude = latitude;
        }
        if let Some(longitude) = self.longitude {
            config.area.longitude = longitude;
        }
        if let Some(deg) = self.deg {
            config.area.deg = deg;
        }
    }
}

pub async fn run_report(
    overrides: AreaOverrides,
    fixture: Option<PathBuf>,
    list_pubs: bool,
    output: &Output,
) -> Result<()> {
    tracing::debug!("Report command started");

    let path_manager = PathManager::default();
    let config_file = path_manager.config_file();
    let mut config = Config::load_or_default(&config_file).map_err(|e| eyre!("{}", e))?;
    overrides.apply(&mut config);
    config
        .validate()
        .map_err(|e| eyre!("Configuration validation failed: {}", e))?;

    let source = SourceFactory::create(&config, fixture).wrap_err("Failed to create pub source")?;
    let pubs = fetch_pubs(source.as_ref())
        .await
        .wrap_err_with(|| format!("Could not load pubs from {}", source.source_name()))?;

    let report = PubReport::build(&pubs);
    info!(
        total_pubs = report.total_pubs,
        unique_pubs = report.unique_pubs,
        beers = report.beers.len(),
        "Built pub report"
    );

    output.report(&report, list_pubs);
    Ok(())
}
