//! Row validation
//!
//! Drops rows carrying a parse-error marker and flags implausible values
//! on the rows that pass. Flags are warnings only; flagged rows continue.

use crate::error::Result;
use crate::report::ImportReport;
use crate::row::RawRow;
use smallvec::SmallVec;
use std::fmt;
use tracing::warn;

/// Plausibility warning on an accepted row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    NoDistance,
    NoCost,
    NoReverseEdge,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Warning::NoDistance => "No distance",
            Warning::NoCost => "No cost",
            Warning::NoReverseEdge => "No reverse Edge",
        };
        f.write_str(text)
    }
}

/// Plausibility checks for one row, in reporting order.
pub fn plausibility_warnings(row: &RawRow) -> SmallVec<[Warning; 3]> {
    let mut warnings = SmallVec::new();
    if row.edge_distance_km <= 0.0 {
        warnings.push(Warning::NoDistance);
    }
    if row.edge_cost <= 0.0 {
        warnings.push(Warning::NoCost);
    }
    if row.edge_reverse_cost <= 0.0 {
        warnings.push(Warning::NoReverseEdge);
    }
    warnings
}

/// Iterator adapter that passes through accepted rows only.
///
/// Reader errors from the wrapped parser are forwarded untouched.
pub struct RowValidator<I> {
    rows: I,
    report: ImportReport,
}

impl<I> RowValidator<I>
where
    I: Iterator<Item = Result<RawRow>>,
{
    pub fn new(rows: I) -> Self {
        Self {
            rows,
            report: ImportReport::new(),
        }
    }

    pub fn report(&self) -> &ImportReport {
        &self.report
    }

    pub fn into_report(self) -> ImportReport {
        self.report
    }
}

impl<I> Iterator for RowValidator<I>
where
    I: Iterator<Item = Result<RawRow>>,
{
    type Item = Result<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let row = match self.rows.next()? {
                Ok(row) => row,
                Err(e) => return Some(Err(e)),
            };
            self.report.rows_read += 1;

            if let Some(error) = row.parse_error {
                self.report.record_rejection(row.line, error);
                continue;
            }

            for warning in plausibility_warnings(&row) {
                warn!("{} (line {})", warning, row.line);
                self.report.record_warning(row.line, warning);
            }
            self.report.rows_accepted += 1;
            return Some(Ok(row));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FieldErrorKind, ParseError};

    fn row(cost: f64, reverse: f64, distance: f64) -> RawRow {
        RawRow {
            line: 1,
            edge_id: 10,
            source_node: 1,
            target_node: 2,
            edge_cost: cost,
            edge_reverse_cost: reverse,
            edge_mode: "car".to_string(),
            edge_distance_km: distance,
            parse_error: None,
        }
    }

    #[test]
    fn test_warning_texts() {
        assert_eq!(Warning::NoDistance.to_string(), "No distance");
        assert_eq!(Warning::NoCost.to_string(), "No cost");
        assert_eq!(Warning::NoReverseEdge.to_string(), "No reverse Edge");
    }

    #[test]
    fn test_plausibility_warnings() {
        assert!(plausibility_warnings(&row(5.0, 4.5, 1.2)).is_empty());
        assert_eq!(
            plausibility_warnings(&row(5.0, 0.0, 0.0)).as_slice(),
            &[Warning::NoDistance, Warning::NoReverseEdge]
        );
        assert_eq!(
            plausibility_warnings(&row(-1.0, -1.0, -0.5)).as_slice(),
            &[Warning::NoDistance, Warning::NoCost, Warning::NoReverseEdge]
        );
    }

    #[test]
    fn test_validator_drops_rejected_rows() {
        let mut bad = row(5.0, 4.5, 1.2);
        bad.line = 2;
        bad.parse_error = Some(ParseError::new(3, FieldErrorKind::IncorrectField));

        let input: Vec<Result<RawRow>> =
            vec![Ok(row(5.0, 4.5, 1.2)), Ok(bad), Ok(row(5.0, 0.0, 1.2))];
        let mut validator = RowValidator::new(input.into_iter());
        let accepted: Vec<RawRow> = validator.by_ref().map(|r| r.unwrap()).collect();

        assert_eq!(accepted.len(), 2);
        let report = validator.into_report();
        assert_eq!(report.rows_read, 3);
        assert_eq!(report.rows_rejected, 1);
        assert_eq!(report.rows_accepted, 2);
        assert_eq!(report.no_reverse, 1);
        assert_eq!(
            report.messages(),
            vec![
                "line 2: Unexpected type in column 3 (incorrect field)".to_string(),
                "line 1: No reverse Edge".to_string(),
            ]
        );
    }

    #[test]
    fn test_warned_rows_pass_unchanged() {
        let original = row(0.0, 0.0, 0.0);
        let input: Vec<Result<RawRow>> = vec![Ok(original.clone())];
        let mut validator = RowValidator::new(input.into_iter());
        let passed = validator.next().unwrap().unwrap();

        assert_eq!(passed, original);
        assert!(validator.next().is_none());
        assert_eq!(validator.report().diagnostics.len(), 3);
    }
}
