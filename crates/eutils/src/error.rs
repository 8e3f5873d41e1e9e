use std::fmt;

#[derive(Debug, PartialEq)]
pub enum EutilsError {
    Http(String),
    Parse(String),
    NotFound(String),
}

impl fmt::Display for EutilsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EutilsError::Http(msg) => write!(f, "E-utilities request failed: {}", msg),
            EutilsError::Parse(msg) => write!(f, "Unable to parse E-utilities response: {}", msg),
            EutilsError::NotFound(query) => write!(f, "No record found for {}", query),
        }
    }
}

impl std::error::Error for EutilsError {}

impl From<EutilsError> for String {
    fn from(err: EutilsError) -> Self {
        err.to_string()
    }
}
