//! Tab-separated motif report, one row per motif.

use crate::motifs::MotifCall;
use crate::scan::ScanReport;
use crate::utils::Result;
use itertools::Itertools;
use std::io::Write;

const HEADER: [&str; 8] = [
    "#id",
    "its_offset",
    "motif",
    "start",
    "end",
    "length",
    "status",
    "sequence",
];

const MISSING: &str = ".";

pub struct TsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> TsvWriter<W> {
    pub fn new(mut writer: W) -> Result<Self> {
        writeln!(writer, "{}", HEADER.iter().join("\t")).map_err(|e| e.to_string())?;
        Ok(Self { writer })
    }

    pub fn write(&mut self, report: &ScanReport) -> Result<()> {
        let offset = report
            .its_offset
            .map_or(MISSING.to_string(), |o| o.to_string());

        let motifs = match &report.result {
            Ok(motifs) => motifs,
            Err(err) => {
                let row = [
                    report.id.as_str(),
                    MISSING,
                    "ITS",
                    MISSING,
                    MISSING,
                    MISSING,
                    err.status(),
                    MISSING,
                ];
                return self.write_row(&row);
            }
        };

        for (name, call) in motifs.calls() {
            let row = match call {
                MotifCall::Found(span) => vec![
                    report.id.clone(),
                    offset.clone(),
                    name.to_string(),
                    span.start.to_string(),
                    span.end.to_string(),
                    span.len().to_string(),
                    "found".to_string(),
                    motifs
                        .sequence_of(name)
                        .filter(|s| !s.is_empty())
                        .unwrap_or(MISSING)
                        .to_string(),
                ],
                MotifCall::NotFound => vec![
                    report.id.clone(),
                    offset.clone(),
                    name.to_string(),
                    MISSING.to_string(),
                    MISSING.to_string(),
                    MISSING.to_string(),
                    "not_found".to_string(),
                    MISSING.to_string(),
                ],
            };
            self.write_row(&row)?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<()> {
        self.writer.flush().map_err(|e| e.to_string())
    }

    fn write_row<S: AsRef<str>>(&mut self, fields: &[S]) -> Result<()> {
        writeln!(
            self.writer,
            "{}",
            fields.iter().map(|f| f.as_ref()).join("\t")
        )
        .map_err(|e| e.to_string())
    }
}
