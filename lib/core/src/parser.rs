//! Row parser
//!
//! Reads comma-separated edge rows and coerces each of the seven columns
//! to its typed value. A failing column marks the row as rejected instead
//! of aborting the run; only reader-level failures are fatal.

use crate::error::{Error, FieldErrorKind, ParseError, Result};
use crate::row::{column, RawRow, COLUMN_COUNT};
use csv::{ByteRecord, ReaderBuilder};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::warn;

/// Options for the row parser
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Skip the first line instead of parsing it as data.
    pub has_header: bool,
    /// Reject rows with fewer than seven columns.
    pub strict_columns: bool,
}

/// Lazy, single-pass iterator over the rows of an edge CSV.
///
/// Yields `Err` only when the underlying reader fails; rows with bad
/// fields are yielded with their `parse_error` set.
pub struct RowParser<R: Read> {
    reader: csv::Reader<R>,
    record: ByteRecord,
    options: ParserOptions,
}

impl RowParser<BufReader<File>> {
    /// Open an edge CSV from disk.
    pub fn from_path<P: AsRef<Path>>(path: P, options: ParserOptions) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::InputOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file), options))
    }
}

impl<R: Read> RowParser<R> {
    pub fn new(input: R, options: ParserOptions) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(options.has_header)
            .flexible(true)
            .from_reader(input);

        Self {
            reader,
            record: ByteRecord::new(),
            options,
        }
    }

    fn coerce(&self) -> RawRow {
        let mut row = RawRow {
            line: self.record.position().map(|p| p.line()).unwrap_or_default(),
            ..RawRow::default()
        };

        for (idx, field) in self.record.iter().enumerate().take(COLUMN_COUNT) {
            if let Err(kind) = coerce_field(&mut row, idx, field) {
                reject(&mut row, idx, kind);
                return row;
            }
        }

        if self.options.strict_columns && self.record.len() < COLUMN_COUNT {
            reject(&mut row, self.record.len(), FieldErrorKind::MissingColumn);
        }

        row
    }
}

impl<R: Read> Iterator for RowParser<R> {
    type Item = Result<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_byte_record(&mut self.record) {
            Ok(true) => Some(Ok(self.coerce())),
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
        }
    }
}

fn reject(row: &mut RawRow, idx: usize, kind: FieldErrorKind) {
    warn!("Unexpected type in column {} (line {})", idx, row.line);
    row.parse_error = Some(ParseError::new(idx, kind));
}

fn coerce_field(
    row: &mut RawRow,
    idx: usize,
    raw: &[u8],
) -> std::result::Result<(), FieldErrorKind> {
    let text = std::str::from_utf8(raw).map_err(|_| FieldErrorKind::IncorrectField)?;

    match idx {
        column::EDGE_ID => row.edge_id = parse_int(text)?,
        column::SOURCE_NODE => row.source_node = parse_int(text)?,
        column::TARGET_NODE => row.target_node = parse_int(text)?,
        column::EDGE_COST => row.edge_cost = parse_float(text)?,
        column::EDGE_REVERSE_COST => row.edge_reverse_cost = parse_float(text)?,
        column::EDGE_MODE => {
            if text.is_empty() {
                return Err(FieldErrorKind::EmptyEdgeMode);
            }
            row.edge_mode = text.to_string();
        }
        column::EDGE_DISTANCE_KM => row.edge_distance_km = parse_float(text)?,
        _ => {}
    }

    Ok(())
}

/// Base-10 signed 64-bit integer.
#[inline]
fn parse_int(text: &str) -> std::result::Result<i64, FieldErrorKind> {
    text.parse::<i64>().map_err(|_| FieldErrorKind::IncorrectField)
}

/// Finite 64-bit float; `inf` and `NaN` spellings are rejected.
#[inline]
fn parse_float(text: &str) -> std::result::Result<f64, FieldErrorKind> {
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(FieldErrorKind::IncorrectField),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_all(input: &str, options: ParserOptions) -> Vec<RawRow> {
        RowParser::new(input.as_bytes(), options)
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_parse_valid_row() {
        let rows = parse_all("10,1,2,5.0,4.5,car,1.2\n", ParserOptions::default());
        assert_eq!(rows.len(), 1);

        let row = &rows[0];
        assert!(row.is_valid());
        assert_eq!(row.line, 1);
        assert_eq!(row.edge_id, 10);
        assert_eq!(row.source_node, 1);
        assert_eq!(row.target_node, 2);
        assert_eq!(row.edge_cost, 5.0);
        assert_eq!(row.edge_reverse_cost, 4.5);
        assert_eq!(row.edge_mode, "car");
        assert_eq!(row.edge_distance_km, 1.2);
    }

    #[test]
    fn test_first_failing_column_stops_coercion() {
        let rows = parse_all("10,1,2,notafloat,4.5,car,1.2\n", ParserOptions::default());
        let row = &rows[0];

        assert_eq!(
            row.parse_error,
            Some(ParseError::new(3, FieldErrorKind::IncorrectField))
        );
        assert_eq!(row.edge_id, 10);
        assert_eq!(row.target_node, 2);
        // Columns after the failure stay zero-valued
        assert_eq!(row.edge_reverse_cost, 0.0);
        assert!(row.edge_mode.is_empty());
    }

    #[test]
    fn test_empty_mode_marker() {
        let rows = parse_all("10,1,2,5.0,4.5,,1.2\n", ParserOptions::default());
        assert_eq!(
            rows[0].parse_error,
            Some(ParseError::new(5, FieldErrorKind::EmptyEdgeMode))
        );
        assert_eq!(rows[0].parse_error.unwrap().to_string(), "empty edge mode value in column 5");
    }

    #[test]
    fn test_non_finite_floats_rejected() {
        for bad in ["inf", "NaN", "1e400", "-infinity"] {
            let input = format!("10,1,2,{},0,car,1.0\n", bad);
            let rows = parse_all(&input, ParserOptions::default());
            assert_eq!(rows[0].parse_error.map(|e| e.column), Some(3), "{}", bad);
        }
    }

    #[test]
    fn test_integer_columns() {
        let rows = parse_all("1.5,1,2,1,1,car,1\n+7,-3,2,1,1,car,1\n", ParserOptions::default());
        assert_eq!(rows[0].parse_error.map(|e| e.column), Some(0));
        assert!(rows[1].is_valid());
        assert_eq!(rows[1].edge_id, 7);
        assert_eq!(rows[1].source_node, -3);
    }

    #[test]
    fn test_header_treated_as_data_by_default() {
        let input = "id,source,target,cost,reverse_cost,mode,km\n10,1,2,5.0,0,car,1.2\n";

        let rows = parse_all(input, ParserOptions::default());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].parse_error.map(|e| e.column), Some(0));
        assert!(rows[1].is_valid());

        let options = ParserOptions { has_header: true, ..Default::default() };
        let rows = parse_all(input, options);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_valid());
        assert_eq!(rows[0].line, 2);
    }

    #[test]
    fn test_short_and_long_rows() {
        let input = "10,1,2,5.0\n10,1,2,5.0,0,car,1.2,extra,more\n";

        let rows = parse_all(input, ParserOptions::default());
        assert!(rows[0].is_valid());
        assert_eq!(rows[0].edge_cost, 5.0);
        assert_eq!(rows[0].edge_distance_km, 0.0);
        assert!(rows[1].is_valid());
        assert_eq!(rows[1].edge_distance_km, 1.2);

        let strict = ParserOptions { strict_columns: true, ..Default::default() };
        let rows = parse_all(input, strict);
        assert_eq!(
            rows[0].parse_error,
            Some(ParseError::new(4, FieldErrorKind::MissingColumn))
        );
        assert!(rows[1].is_valid());
    }

    #[test]
    fn test_invalid_utf8_field() {
        let mut input = b"10,1,2,5.0,0,".to_vec();
        input.extend_from_slice(&[0xff, 0xfe]);
        input.extend_from_slice(b",1.2\n10,1,2,5.0,0,car,1.2\n");

        let rows: Vec<RawRow> = RowParser::new(input.as_slice(), ParserOptions::default())
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(
            rows[0].parse_error,
            Some(ParseError::new(5, FieldErrorKind::IncorrectField))
        );
        assert!(rows[1].is_valid());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = RowParser::from_path(dir.path().join("absent.csv"), ParserOptions::default());
        assert!(matches!(result, Err(Error::InputOpen { .. })));
    }
}
