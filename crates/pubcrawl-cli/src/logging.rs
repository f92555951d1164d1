use anyhow::Result;
use pubcrawl_config::PathManager;
use std::io;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::{self, time::ChronoUtc, writer::BoxMakeWriter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// `--log-file` given without a path means the default log location
pub fn resolve_log_file(arg: Option<Option<PathBuf>>, path_manager: &PathManager) -> Option<PathBuf> {
    arg.map(|path| path.unwrap_or_else(|| path_manager.log_file()))
}

pub fn init_logging(verbose_level: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    // 0 = info, 1 = debug (hyper connection noise suppressed), 2+ = trace
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        let filter_str = match verbose_level {
            0 => "info",
            1 => "debug,hyper::proto::h1=warn,hyper::client::pool=warn",
            _ => "trace",
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str))
    };

    let json = std::env::var("RUST_LOG_JSON")
        .map(|v| v == "true")
        .unwrap_or_else(|_| !io::stdout().is_terminal());

    let (writer, ansi) = match log_file {
        Some(path) => (BoxMakeWriter::new(rolling_appender(&path)?), false),
        None => (BoxMakeWriter::new(io::stderr), io::stderr().is_terminal()),
    };

    let registry = Registry::default().with(filter);
    if json {
        let json_layer = fmt::layer()
            .json()
            .with_timer(ChronoUtc::rfc_3339())
            .with_writer(writer);
        registry.with(json_layer).init();
    } else {
        let fmt_layer = fmt::layer()
            .with_timer(ChronoUtc::rfc_3339())
            .with_ansi(ansi)
            .with_writer(writer);
        registry.with(fmt_layer).init();
    }

    Ok(())
}

/// Daily-rotated appender; `logs/pubcrawl.log` becomes `logs/pubcrawl.2026-01-17` etc.
fn rolling_appender(log_path: &Path) -> Result<RollingFileAppender> {
    let log_dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(log_dir)?;

    let log_filename = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid log filename: {}", log_path.display()))?;
    let log_prefix = log_filename
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(log_filename);

    Ok(RollingFileAppender::new(Rotation::DAILY, log_dir, log_prefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_file_flag_without_path_uses_default() {
        let dir = TempDir::new().unwrap();
        let path_manager = PathManager::with_base(dir.path().to_path_buf());

        assert_eq!(resolve_log_file(None, &path_manager), None);
        assert_eq!(
            resolve_log_file(Some(None), &path_manager),
            Some(dir.path().join("logs").join("pubcrawl.log"))
        );
        assert_eq!(
            resolve_log_file(Some(Some(PathBuf::from("run.log"))), &path_manager),
            Some(PathBuf::from("run.log"))
        );
    }

    #[test]
    fn test_rolling_appender_creates_log_dir() {
        let dir = TempDir::new().unwrap();
        let log_path = dir.path().join("logs").join("pubcrawl.log");

        rolling_appender(&log_path).unwrap();
        assert!(dir.path().join("logs").is_dir());
    }
}
