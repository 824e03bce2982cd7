use crate::error::ParseError;
use crate::validate::Warning;
use serde::Serialize;
use std::fmt;

/// A logged, non-fatal event tied to an input line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The row was dropped.
    Rejected { line: u64, column: usize, reason: String },
    /// The row was kept but looks implausible.
    Warning { line: u64, message: String },
}

impl Diagnostic {
    pub fn line(&self) -> u64 {
        match self {
            Diagnostic::Rejected { line, .. } | Diagnostic::Warning { line, .. } => *line,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Rejected { line, column, reason } => {
                write!(f, "line {}: Unexpected type in column {} ({})", line, column, reason)
            }
            Diagnostic::Warning { line, message } => write!(f, "line {}: {}", line, message),
        }
    }
}

/// Counters and diagnostics collected over one import run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportReport {
    pub rows_read: u64,
    pub rows_rejected: u64,
    pub rows_accepted: u64,
    pub no_distance: u64,
    pub no_cost: u64,
    pub no_reverse: u64,
    pub forward_records: u64,
    pub reverse_records: u64,
    pub diagnostics: Vec<Diagnostic>,
}

impl ImportReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_rejection(&mut self, line: u64, error: ParseError) {
        self.rows_rejected += 1;
        self.diagnostics.push(Diagnostic::Rejected {
            line,
            column: error.column,
            reason: error.kind.to_string(),
        });
    }

    pub fn record_warning(&mut self, line: u64, warning: Warning) {
        match warning {
            Warning::NoDistance => self.no_distance += 1,
            Warning::NoCost => self.no_cost += 1,
            Warning::NoReverseEdge => self.no_reverse += 1,
        }
        self.diagnostics.push(Diagnostic::Warning {
            line,
            message: warning.to_string(),
        });
    }

    /// Total EdgeRecords produced.
    pub fn records(&self) -> u64 {
        self.forward_records + self.reverse_records
    }

    /// All diagnostics rendered as log lines, in emission order.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }
}
