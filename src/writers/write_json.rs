//! JSON motif report. Motifs are emitted in discovery order; not-found motifs are `null`.

use crate::motifs::{MotifCall, MotifSet};
use crate::scan::ScanReport;
use crate::utils::Result;
use serde::{ser::SerializeMap, Serialize, Serializer};
use std::io::Write;

#[derive(Serialize)]
struct JsonReport<'a> {
    id: &'a str,
    its_offset: Option<usize>,
    its: Option<&'a str>,
    motifs: Option<MotifEntries<'a>>,
    error: Option<String>,
}

#[derive(Serialize)]
struct JsonMotif<'a> {
    start: usize,
    end: usize,
    sequence: &'a str,
}

struct MotifEntries<'a>(&'a MotifSet);

impl Serialize for MotifEntries<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let set = self.0;
        let mut map = serializer.serialize_map(None)?;
        for (name, call) in set.calls() {
            let entry = match call {
                MotifCall::Found(span) => Some(JsonMotif {
                    start: span.start,
                    end: span.end,
                    sequence: &set.its()[span.start..span.end],
                }),
                MotifCall::NotFound => None,
            };
            map.serialize_entry(name.as_str(), &entry)?;
        }
        map.end()
    }
}

impl<'a> From<&'a ScanReport> for JsonReport<'a> {
    fn from(report: &'a ScanReport) -> Self {
        let motifs = report.motifs();
        JsonReport {
            id: &report.id,
            its_offset: report.its_offset,
            its: motifs.map(|m| m.its()),
            motifs: motifs.map(MotifEntries),
            error: report.result.as_ref().err().map(|e| e.to_string()),
        }
    }
}

pub fn write_json<W: Write>(writer: W, reports: &[ScanReport]) -> Result<()> {
    let reports: Vec<JsonReport> = reports.iter().map(JsonReport::from).collect();
    serde_json::to_writer_pretty(writer, &reports).map_err(|e| e.to_string())
}
