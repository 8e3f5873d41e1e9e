//! Runs ITS location and motif walking over input records.

mod batch;
mod report;

pub use batch::{initialize_thread_pool, scan_records, ScanSummary};
pub use report::{scan_record, ScanReport};
