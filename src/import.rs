use crate::config::ImportConfig;
use anyhow::{Context, Result};
use roadgraph_core::{import_file, ImportReport};
use roadgraph_sink::{deliver, DeliveryOutcome, DgraphSink, GraphSink};
use tracing::info;

/// Result of a completed import
#[derive(Debug, Clone)]
pub struct ImportSummary {
    pub report: ImportReport,
    pub outcome: DeliveryOutcome,
}

/// Run an import against the Dgraph endpoint named in `config`.
pub async fn run_import(config: &ImportConfig) -> Result<ImportSummary> {
    let sink = DgraphSink::new(&config.dgraph).context("Failed to set up Dgraph client")?;
    run_import_with(&sink, config).await
}

/// Run an import against an arbitrary graph sink.
///
/// The input is fully read and projected before the sink is contacted.
pub async fn run_import_with<S: GraphSink>(sink: &S, config: &ImportConfig) -> Result<ImportSummary> {
    info!("Importing {:?} (delivery: {})", config.csv_path, config.delivery.delivery);

    let import = import_file(&config.csv_path, config.parser)
        .with_context(|| format!("Failed to read edges from {:?}", config.csv_path))?;

    let outcome = deliver(sink, &import.records, &config.delivery)
        .await
        .context("Failed to deliver edge records")?;

    info!(
        "Import finished: {} rows accepted, {} rejected, {} records",
        import.report.rows_accepted,
        import.report.rows_rejected,
        outcome.records
    );

    Ok(ImportSummary {
        report: import.report,
        outcome,
    })
}
