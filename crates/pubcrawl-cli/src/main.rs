use clap::{ArgAction, Parser, Subcommand};
use commands::{config, report};
use pubcrawl_config::PathManager;
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "pubcrawl")]
#[command(about = "PubCrawl - Find out what's on tap around you")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Write logs to a daily-rotated file instead of stderr.
    /// Without a PATH, logs go to the default log directory
    #[arg(long, global = true, value_name = "PATH", num_args = 0..=1)]
    log_file: Option<Option<PathBuf>>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch pubs for an area and report unique beers and pubs
    #[command(long_about = "Fetch the pubs listed for an area, then print every beer on offer (sorted, each once) followed by the total and deduplicated pub counts. Pubs reported more than once are collapsed to their most recent listing.")]
    Report {
        /// User id sent to the pubcache API (overrides config)
        #[arg(long)]
        user_id: Option<String>,

        /// Latitude of the search centre (overrides config)
        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude of the search centre (overrides config)
        #[arg(long, allow_negative_numbers = true)]
        lng: Option<f64>,

        /// Search radius in degrees (overrides config)
        #[arg(long)]
        deg: Option<f64>,

        /// Read the pubcache document from a local file instead of the API
        #[arg(long, value_name = "PATH")]
        fixture: Option<PathBuf>,

        /// Also list the deduplicated pubs
        #[arg(long, action = ArgAction::SetTrue)]
        list_pubs: bool,
    },
    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let log_file = logging::resolve_log_file(cli.log_file, &PathManager::default());
    logging::init_logging(cli.verbose, cli.quiet, log_file)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    let result = match cli.command {
        Commands::Report {
            user_id,
            lat,
            lng,
            deg,
            fixture,
            list_pubs,
        } => {
            let overrides = report::AreaOverrides {
                user_id,
                latitude: lat,
                longitude: lng,
                deg,
            };
            report::run_report(overrides, fixture, list_pubs, &output).await
        }
        Commands::Config { cmd } => {
            let cmd = cmd.unwrap_or(ConfigCommands::Show);
            config::run_config(cmd, &output)
        }
    };

    if let Err(err) = result {
        output.error(format!("{:#}", err));
        std::process::exit(1);
    }
    Ok(())
}
