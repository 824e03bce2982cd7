use crate::error::ParseError;

/// Number of meaningful columns in an edge row. Extra columns are ignored.
pub const COLUMN_COUNT: usize = 7;

/// Column positions in the edge CSV.
pub mod column {
    pub const EDGE_ID: usize = 0;
    pub const SOURCE_NODE: usize = 1;
    pub const TARGET_NODE: usize = 2;
    pub const EDGE_COST: usize = 3;
    pub const EDGE_REVERSE_COST: usize = 4;
    pub const EDGE_MODE: usize = 5;
    pub const EDGE_DISTANCE_KM: usize = 6;
}

/// One input line after field coercion.
///
/// When `parse_error` is set the row is rejected; fields after the failing
/// column keep their zero value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    /// 1-based line number in the input (header line included).
    pub line: u64,
    pub edge_id: i64,
    pub source_node: i64,
    pub target_node: i64,
    pub edge_cost: f64,
    /// Values `<= 0` mean the edge has no reverse direction.
    pub edge_reverse_cost: f64,
    pub edge_mode: String,
    pub edge_distance_km: f64,
    pub parse_error: Option<ParseError>,
}

impl RawRow {
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.parse_error.is_none()
    }

    /// True when the row projects a second, reversed edge.
    #[inline]
    pub fn has_reverse(&self) -> bool {
        self.edge_reverse_cost > 0.0
    }
}
