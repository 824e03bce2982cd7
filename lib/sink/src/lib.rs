//! # roadgraph Sink
//!
//! Delivery layer for projected edge records:
//!
//! - [`payload`] - Canonical JSON encoding of the record set
//! - [`GraphSink`] - Schema + mutation interface of a graph store
//! - [`DgraphSink`] - HTTP binding for a Dgraph alpha
//! - [`MemorySink`] - In-process sink for dry runs and tests
//! - [`write_artifact`] - Atomic local JSON artifact
//! - [`deliver`] - Schema, mutation and artifact in one ordered step

pub mod error;
pub mod payload;
pub mod sink;
pub mod dgraph;
pub mod memory;
pub mod artifact;
pub mod deliver;

pub use error::{Result, SinkError};
pub use sink::GraphSink;
pub use dgraph::{mutation_body, DgraphConfig, DgraphSink, DEFAULT_DGRAPH_URL};
pub use memory::{MemorySink, Rejection};
pub use artifact::{write_artifact, ArtifactInfo};
pub use deliver::{deliver, Delivery, DeliveryConfig, DeliveryOutcome, DEFAULT_OUTPUT_PATH};
