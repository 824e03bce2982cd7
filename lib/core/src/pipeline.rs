use crate::error::Result;
use crate::graph::{project, EdgeRecord};
use crate::parser::{ParserOptions, RowParser};
use crate::report::ImportReport;
use crate::row::RawRow;
use crate::validate::RowValidator;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Projected records of one input, in input order, plus what was
/// logged while producing them.
#[derive(Debug, Clone, Default)]
pub struct Import {
    pub records: Vec<EdgeRecord>,
    pub report: ImportReport,
}

/// Parse, validate and project an edge CSV file.
pub fn import_file<P: AsRef<Path>>(path: P, options: ParserOptions) -> Result<Import> {
    let path = path.as_ref();
    info!("Reading edges from {:?}", path);
    project_rows(RowParser::from_path(path, options)?)
}

/// Parse, validate and project edge CSV from any reader.
pub fn import_reader<R: Read>(input: R, options: ParserOptions) -> Result<Import> {
    project_rows(RowParser::new(input, options))
}

/// Run already-parsed rows through validation and projection.
pub fn project_rows<I>(rows: I) -> Result<Import>
where
    I: Iterator<Item = Result<RawRow>>,
{
    let mut validator = RowValidator::new(rows);
    let mut records = Vec::new();
    let mut forward = 0u64;
    let mut reverse = 0u64;

    for row in validator.by_ref() {
        for record in project(&row?) {
            if record.edge.reverse {
                reverse += 1;
            } else {
                forward += 1;
            }
            records.push(record);
        }
    }

    let mut report = validator.into_report();
    report.forward_records = forward;
    report.reverse_records = reverse;

    info!("Number of nodes {}", report.rows_accepted);
    info!(
        "Projected {} edge records ({} reverse), rejected {} of {} rows",
        report.records(),
        report.reverse_records,
        report.rows_rejected,
        report.rows_read
    );

    Ok(Import { records, report })
}
