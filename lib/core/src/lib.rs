//! # roadgraph Core
//!
//! Core pipeline of the roadgraph edge importer.
//!
//! This crate turns a road-network edge CSV into graph edge records:
//!
//! - [`RowParser`] - Typed, per-row fault-tolerant CSV parsing
//! - [`RowValidator`] - Drops rejected rows, warns on implausible values
//! - [`project`] - Forward (and optional reverse) [`EdgeRecord`] per row
//! - [`edge_schema`] - Predicate declaration for the graph store
//!
//! ## Example
//!
//! ```rust
//! use roadgraph_core::{import_reader, ParserOptions};
//!
//! let csv = "10,1,2,5.0,4.5,car,1.2\n";
//! let import = import_reader(csv.as_bytes(), ParserOptions::default()).unwrap();
//!
//! assert_eq!(import.records.len(), 2);
//! assert_eq!(import.records[1].source_placeholder_id, "_:2");
//! ```

pub mod error;
pub mod row;
pub mod parser;
pub mod validate;
pub mod graph;
pub mod schema;
pub mod report;
pub mod pipeline;

pub use error::{Error, FieldErrorKind, ParseError, Result};
pub use row::{RawRow, COLUMN_COUNT};
pub use parser::{ParserOptions, RowParser};
pub use validate::{plausibility_warnings, RowValidator, Warning};
pub use graph::{placeholder_id, project, Edge, EdgeId, EdgeRecord, NodeId, Projection};
pub use schema::{edge_schema, IndexKind, Predicate, PredicateType, EDGE_PREDICATES};
pub use report::{Diagnostic, ImportReport};
pub use pipeline::{import_file, import_reader, project_rows, Import};
