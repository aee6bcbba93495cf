use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::error;

use golang_role_updater::config::UpdaterConfig;
use golang_role_updater::logging::{self, LogFormat};
use golang_role_updater::updater::Updater;
use golang_role_updater::version::registries::GoDevRegistry;

#[derive(Parser)]
#[command(name = "golang-role-updater")]
#[command(version, about = "Adds new Go versions to an Ansible Go role")]
struct Cli {
    /// Root directory of the role checkout
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// JSON file overriding the default configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Go downloads API endpoint
    #[arg(long, env = "GO_DOWNLOAD_URL")]
    download_url: Option<String>,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Write log lines to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the versions missing locally without writing anything
    Missing,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.log_format, cli.log_file.as_deref()) {
        eprintln!("Failed to set up logging: {e:#}");
        return ExitCode::FAILURE;
    }

    let result = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(anyhow::Error::from)
        .and_then(|runtime| runtime.block_on(run(cli)));
    exit_code(result)
}

/// Log a failed run once and turn it into the process exit code
fn exit_code(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("An error occurred: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => UpdaterConfig::load(path)?,
        None => UpdaterConfig::default(),
    };
    if let Some(url) = cli.download_url {
        config.download_url = url;
    }

    let registry = GoDevRegistry::new(
        &config.download_url,
        Duration::from_millis(config.fetch_timeout_ms),
    )?;
    let updater = Updater::new(&cli.root, &config, registry);

    match cli.command {
        None => updater.run().await?,
        Some(Command::Missing) => {
            for version in updater.missing_versions().await?.missing {
                println!("{version}");
            }
        }
    }

    Ok(())
}
