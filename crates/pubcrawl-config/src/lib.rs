pub mod config;
pub mod paths;

pub use config::{ApiConfig, AreaConfig, Config, DEFAULT_BASE_URL};
pub use paths::{config_dir_override, PathManager};
