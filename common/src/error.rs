use thiserror::Error;

/// Why a candidate line did not make it into the pool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("expected 4 octets, found {found}")]
    TokenCount { found: usize },
    #[error("'{token}' is not a base-10 integer")]
    UnparsableToken { token: String },
    #[error("octet {token} is out of range (0-255)")]
    OctetOutOfRange { token: String },
}

impl RecordError {
    /// Only unparsable tokens may stop a run; see [`crate::config::TokenPolicy`].
    pub fn is_fatal(&self) -> bool {
        matches!(self, RecordError::UnparsableToken { .. })
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to read or write address data")]
    Io(#[from] std::io::Error),
    #[error("line {line_no}: {source}")]
    Fatal {
        line_no: usize,
        #[source]
        source: RecordError,
    },
}
