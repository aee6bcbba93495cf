//! Log output setup
//!
//! Messages are single lines on stderr (or a log file), filtered by
//! `RUST_LOG` with `info` as the default level.

use std::path::Path;

use clap::ValueEnum;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Bare messages, one per line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Text layer printing the bare message, the same for stderr and files
fn text_layer<W>(writer: W, ansi: bool) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .with_level(false)
        .without_time()
        .boxed()
}

/// Install the global subscriber
///
/// When `log_file` is set, lines are appended to that file instead of stderr.
pub fn init(format: LogFormat, log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let layer: BoxedLayer = match (format, log_file) {
        (LogFormat::Text, None) => text_layer(std::io::stderr, true),
        (LogFormat::Json, None) => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed(),
        (format, Some(path)) => {
            let directory = path.parent().unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .ok_or_else(|| anyhow::anyhow!("Invalid log file path: {}", path.display()))?;
            let appender = tracing_appender::rolling::never(directory, file_name);
            match format {
                LogFormat::Text => text_layer(appender, false),
                LogFormat::Json => tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(appender)
                    .boxed(),
            }
        }
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init()?;

    Ok(())
}
