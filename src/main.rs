use clap::Parser;
use roadgraph::{run_import, Delivery, DeliveryConfig, DgraphConfig, ImportConfig, ParserOptions};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Load a road-network edge CSV into Dgraph
#[derive(Parser, Debug)]
#[command(name = "roadgraph")]
#[command(about = "Import road-network edges into a graph database", long_about = None)]
struct Args {
    /// The CSV input file
    #[arg(long = "CSV", value_name = "PATH", default_value = roadgraph::DEFAULT_CSV_PATH)]
    csv: PathBuf,

    /// Path of the JSON artifact
    #[arg(short, long, default_value = roadgraph_sink::DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Where to deliver records: artifact, sink or both
    #[arg(long, default_value_t = Delivery::Artifact)]
    delivery: Delivery,

    /// Dgraph alpha HTTP endpoint
    #[arg(long, default_value = roadgraph_sink::DEFAULT_DGRAPH_URL)]
    dgraph_url: String,

    /// Deadline for each graph store request, in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Treat the first line as a header and skip it
    #[arg(long)]
    skip_header: bool,

    /// Reject rows with fewer than seven columns
    #[arg(long)]
    strict_columns: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl From<Args> for ImportConfig {
    fn from(args: Args) -> Self {
        Self {
            csv_path: args.csv,
            parser: ParserOptions {
                has_header: args.skip_header,
                strict_columns: args.strict_columns,
            },
            delivery: DeliveryConfig {
                delivery: args.delivery,
                output: args.output,
            },
            dgraph: DgraphConfig {
                url: args.dgraph_url,
                timeout: args.timeout_secs.map(Duration::from_secs),
            },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting roadgraph v{}", env!("CARGO_PKG_VERSION"));

    let config = ImportConfig::from(args);
    let summary = run_import(&config).await?;

    if let Some(artifact) = &summary.outcome.artifact {
        info!("Artifact: {:?} ({} bytes)", artifact.path, artifact.size);
    }
    if summary.outcome.committed {
        info!("Committed to {}", config.dgraph.url);
    }

    Ok(())
}
