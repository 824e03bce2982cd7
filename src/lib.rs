//! # roadgraph
//!
//! One-shot importer that loads a road-network edge CSV into a graph
//! database.
//!
//! Each CSV row describes a directed, weighted edge. Valid rows become a
//! node with one outgoing edge, plus the reversed edge when the row has a
//! positive reverse cost. The record set is serialized as a Dgraph JSON
//! mutation and sent to the graph store, written to a local artifact, or
//! both.
//!
//! ## Input
//!
//! Seven comma-separated columns, no header by default:
//!
//! ```text
//! edge_id,source_node,target_node,cost,reverse_cost,mode,distance_km
//! 10,1,2,5.0,4.5,car,1.2
//! ```
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! roadgraph --CSV ./files/edges.csv --delivery both --dgraph-url http://127.0.0.1:8080
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use roadgraph::prelude::*;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ImportConfig {
//!     csv_path: "./files/edges.csv".into(),
//!     ..ImportConfig::default()
//! };
//! let summary = run_import(&config).await?;
//! println!("{} records written", summary.outcome.records);
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! - `roadgraph-core` - Parsing, validation, edge projection, schema
//! - `roadgraph-sink` - JSON payload, graph sinks, artifact writing

pub mod config;
pub mod import;

pub use config::{ImportConfig, DEFAULT_CSV_PATH};
pub use import::{run_import, run_import_with, ImportSummary};

// Re-export core types
pub use roadgraph_core::{
    import_file, import_reader, placeholder_id, project,
    Edge, EdgeRecord, Import, ImportReport, Diagnostic,
    ParserOptions, RawRow, Warning,
};

// Re-export sinks
pub use roadgraph_sink::{
    Delivery, DeliveryConfig, DeliveryOutcome,
    DgraphConfig, DgraphSink, GraphSink, MemorySink,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        run_import, run_import_with, ImportConfig, ImportSummary,
        Delivery, DeliveryConfig, DgraphConfig, ParserOptions,
        EdgeRecord, ImportReport, GraphSink, MemorySink,
    };
}
