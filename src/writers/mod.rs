mod write_json;
mod write_tsv;

pub use write_json::write_json;
pub use write_tsv::TsvWriter;

use crate::scan::ScanReport;
use crate::utils::{OutputFormat, Result};
use std::io::Write;

pub fn write_reports<W: Write>(writer: W, format: OutputFormat, reports: &[ScanReport]) -> Result<()> {
    match format {
        OutputFormat::Tsv => {
            let mut tsv = TsvWriter::new(writer)?;
            for report in reports {
                tsv.write(report)?;
            }
            tsv.finish()
        }
        OutputFormat::Json => write_json(writer, reports),
    }
}
