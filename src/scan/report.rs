use crate::motifs::{find_motifs, locate_its, MotifSet, ScanError};
use crate::utils::SequenceRecord;

/// Outcome for one input sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanReport {
    pub id: String,
    /// Start of the ITS in the input sequence, when it was located.
    pub its_offset: Option<usize>,
    pub result: Result<MotifSet, ScanError>,
}

impl ScanReport {
    pub fn failed(id: impl Into<String>, err: ScanError) -> Self {
        Self {
            id: id.into(),
            its_offset: None,
            result: Err(err),
        }
    }

    pub fn motifs(&self) -> Option<&MotifSet> {
        self.result.as_ref().ok()
    }
}

pub fn scan_record(record: &SequenceRecord) -> ScanReport {
    match locate_its(&record.seq) {
        Ok(region) => {
            let motifs = find_motifs(region.seq);
            for name in motifs.missing() {
                log::warn!(
                    "{}: {} was not found, please verify manually",
                    record.id,
                    name
                );
            }
            ScanReport {
                id: record.id.clone(),
                its_offset: Some(region.offset),
                result: Ok(motifs),
            }
        }
        Err(err) => {
            log::warn!("{}: {}", record.id, err);
            ScanReport::failed(record.id.clone(), err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motifs::{MotifName, Span};

    #[test]
    fn scan_locates_its_then_motifs() {
        let record = SequenceRecord::new("seq1", "ACGTCCTCCTTGACCCXXXAGGTCYYY");
        let report = scan_record(&record);

        assert_eq!(report.id, "seq1");
        assert_eq!(report.its_offset, Some(11));
        let motifs = report.motifs().unwrap();
        assert_eq!(motifs.its(), "GACCCXXXAGGTCYYY");
        assert_eq!(motifs.span(MotifName::Leader), Some(Span::new(0, 0)));
        assert_eq!(motifs.span(MotifName::D1D1), Some(Span::new(0, 13)));
    }

    #[test]
    fn scan_without_boundary_reports_failure() {
        let record = SequenceRecord::new("seq2", "ACGTACGTGACCCAAAGGTC");
        let report = scan_record(&record);
        assert_eq!(report.its_offset, None);
        assert_eq!(report.result, Err(ScanError::ItsBoundaryNotFound));
        assert!(report.motifs().is_none());
    }

    #[test]
    fn failed_report_carries_reason() {
        let report = ScanReport::failed("AB000001", ScanError::UpstreamFetchFailure("HTTP 400".into()));
        assert_eq!(report.its_offset, None);
        assert_eq!(report.result.unwrap_err().status(), "fetch_failed");
    }
}
