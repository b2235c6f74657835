use std::path::Path;
use tracing::{info, instrument};

use crate::error::Result;

/// A row of an output report with a fixed header
pub trait ReportRow {
    const HEADER: &'static [&'static str];

    /// Cells in header order
    fn fields(&self) -> Vec<&str>;
}

/// Write the header and every row to `path`, truncating any existing file.
///
/// Fields are quoted only when they contain the delimiter, a quote or a line
/// break, which is what lets the HTML short description round-trip.
/// Returns the number of data rows written.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn write_report<R: ReportRow>(path: &Path, rows: &[R]) -> Result<usize> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(path)?;

    writer.write_record(R::HEADER)?;
    for row in rows {
        writer.write_record(row.fields())?;
    }
    writer.flush()?;

    info!("Wrote {} rows", rows.len());
    Ok(rows.len())
}
