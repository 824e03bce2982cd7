//! Graph schema declaration
//!
//! Predicate types and indexes the graph store needs before edge records
//! are loaded. The set is fixed; it is rendered to Dgraph schema text and
//! applied once per import.

use std::fmt;

/// Scalar type of a predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateType {
    Int,
    Float,
    String,
    Bool,
}

impl PredicateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PredicateType::Int => "int",
            PredicateType::Float => "float",
            PredicateType::String => "string",
            PredicateType::Bool => "bool",
        }
    }
}

/// Index tokenizer of a predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Int,
    Float,
    Exact,
}

impl IndexKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexKind::Int => "int",
            IndexKind::Float => "float",
            IndexKind::Exact => "exact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Predicate {
    pub name: &'static str,
    pub kind: PredicateType,
    pub index: Option<IndexKind>,
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.kind.as_str())?;
        if let Some(index) = self.index {
            write!(f, " @index({})", index.as_str())?;
        }
        write!(f, " .")
    }
}

/// Predicates declared for an edge import.
pub const EDGE_PREDICATES: [Predicate; 6] = [
    Predicate { name: "node_id", kind: PredicateType::Int, index: Some(IndexKind::Int) },
    Predicate { name: "edge_id", kind: PredicateType::Int, index: Some(IndexKind::Int) },
    Predicate { name: "mode", kind: PredicateType::String, index: Some(IndexKind::Exact) },
    Predicate { name: "cost", kind: PredicateType::Float, index: Some(IndexKind::Float) },
    Predicate { name: "distance", kind: PredicateType::Float, index: Some(IndexKind::Float) },
    Predicate { name: "reverse", kind: PredicateType::Bool, index: None },
];

/// Schema text for [`EDGE_PREDICATES`], one predicate per line.
pub fn edge_schema() -> String {
    EDGE_PREDICATES
        .iter()
        .map(|p| format!("{}\n", p))
        .collect()
}
