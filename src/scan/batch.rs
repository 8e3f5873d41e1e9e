use super::{scan_record, ScanReport};
use crate::utils::{Result, SequenceRecord};
use rayon::{
    iter::{IntoParallelRefIterator, ParallelIterator},
    ThreadPool, ThreadPoolBuilder,
};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScanSummary {
    pub records: usize,
    pub its_located: usize,
    pub motifs_found: usize,
    pub motifs_missing: usize,
}

impl ScanSummary {
    pub fn from_reports(reports: &[ScanReport]) -> Self {
        let mut summary = ScanSummary {
            records: reports.len(),
            ..Default::default()
        };
        for motifs in reports.iter().filter_map(|r| r.motifs()) {
            summary.its_located += 1;
            summary.motifs_missing += motifs.missing().len();
            summary.motifs_found += motifs.spans().count();
        }
        summary
    }

    pub fn log(&self) {
        log::info!(
            "Scanned {} record(s): ITS located in {}, motifs found={}, not found={}",
            self.records,
            self.its_located,
            self.motifs_found,
            self.motifs_missing
        );
    }
}

pub fn initialize_thread_pool(num_threads: usize) -> Result<ThreadPool> {
    ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .thread_name(|i| format!("itscan-{}", i))
        .build()
        .map_err(|e| format!("Failed to initialize thread pool: {}", e))
}

/// Scans records in parallel. Reports come back in input order.
pub fn scan_records(pool: &ThreadPool, records: &[SequenceRecord]) -> Vec<ScanReport> {
    log::debug!(
        "Scanning {} record(s) on {} thread(s)",
        records.len(),
        pool.current_num_threads()
    );
    pool.install(|| records.par_iter().map(scan_record).collect())
}
