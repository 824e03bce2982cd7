// Graph edge projection - nodes with one outgoing edge each
use crate::row::RawRow;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

pub type NodeId = i64;
pub type EdgeId = i64;

/// Projections of one row; never more than two.
pub type Projection = SmallVec<[EdgeRecord; 2]>;

/// A source node and one outgoing edge to its target.
///
/// Serializes to the Dgraph mutation shape: the node carries a blank-node
/// `uid`, and the edge attributes ride as `connect_to|*` facets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    #[serde(rename = "uid", default, skip_serializing_if = "String::is_empty")]
    pub source_placeholder_id: String,

    #[serde(rename = "node_id", default, skip_serializing_if = "is_zero_i64")]
    pub source_node_id: NodeId,

    #[serde(rename = "connect_to")]
    pub edge: Edge,
}

/// The outgoing half of an [`EdgeRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    #[serde(rename = "uid", default, skip_serializing_if = "String::is_empty")]
    pub target_placeholder_id: String,

    #[serde(rename = "node_id", default, skip_serializing_if = "is_zero_i64")]
    pub target_node_id: NodeId,

    #[serde(rename = "connect_to|edge_id", default, skip_serializing_if = "is_zero_i64")]
    pub edge_id: EdgeId,

    #[serde(rename = "connect_to|reverse", default)]
    pub reverse: bool,

    #[serde(rename = "connect_to|cost", default, skip_serializing_if = "is_zero_f64")]
    pub cost: f64,

    #[serde(rename = "connect_to|distance", default, skip_serializing_if = "is_zero_f64")]
    pub distance: f64,

    #[serde(rename = "connect_to|mode", default, skip_serializing_if = "String::is_empty")]
    pub mode: String,
}

fn is_zero_i64(v: &i64) -> bool {
    *v == 0
}

fn is_zero_f64(v: &f64) -> bool {
    *v == 0.0
}

/// Blank-node key for a node id. Equal ids always give equal keys, which
/// is what lets the graph store merge references within one mutation.
#[inline]
#[must_use]
pub fn placeholder_id(node: NodeId) -> String {
    format!("_:{}", node)
}

impl EdgeRecord {
    /// Record for the edge `from -> to`, taking the row's shared attributes.
    #[must_use]
    pub fn new(row: &RawRow, from: NodeId, to: NodeId, cost: f64, reverse: bool) -> Self {
        Self {
            source_placeholder_id: placeholder_id(from),
            source_node_id: from,
            edge: Edge {
                target_placeholder_id: placeholder_id(to),
                target_node_id: to,
                edge_id: row.edge_id,
                reverse,
                cost,
                distance: row.edge_distance_km,
                mode: row.edge_mode.clone(),
            },
        }
    }

    #[inline]
    #[must_use]
    pub fn forward(row: &RawRow) -> Self {
        Self::new(row, row.source_node, row.target_node, row.edge_cost, false)
    }

    #[inline]
    #[must_use]
    pub fn reverse(row: &RawRow) -> Self {
        Self::new(row, row.target_node, row.source_node, row.edge_reverse_cost, true)
    }
}

/// Forward record, followed by the reverse record when the row's reverse
/// cost is strictly positive.
#[must_use]
pub fn project(row: &RawRow) -> Projection {
    let mut out: Projection = smallvec![EdgeRecord::forward(row)];
    if row.has_reverse() {
        out.push(EdgeRecord::reverse(row));
    }
    out
}
