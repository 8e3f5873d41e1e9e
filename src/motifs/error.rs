use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ScanError {
    /// The end-of-16S anchor is absent from the gene region.
    ItsBoundaryNotFound,
    InvalidPattern(String),
    /// The sequence could not be retrieved, so it was never scanned.
    UpstreamFetchFailure(String),
}

impl ScanError {
    /// Short machine-readable label used in reports.
    pub fn status(&self) -> &'static str {
        match self {
            ScanError::ItsBoundaryNotFound => "its_not_found",
            ScanError::InvalidPattern(_) => "invalid_pattern",
            ScanError::UpstreamFetchFailure(_) => "fetch_failed",
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::ItsBoundaryNotFound => {
                write!(f, "ITS region not found in this sequence")
            }
            ScanError::InvalidPattern(msg) => write!(f, "Invalid anchor pattern: {}", msg),
            ScanError::UpstreamFetchFailure(msg) => write!(f, "Sequence retrieval failed: {}", msg),
        }
    }
}

impl std::error::Error for ScanError {}

impl From<ScanError> for String {
    fn from(err: ScanError) -> Self {
        err.to_string()
    }
}
