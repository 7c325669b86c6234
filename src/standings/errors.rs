use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StandingsError {
    #[error("Malformed result at position {index}: score must have exactly 2 entries, got {len}")]
    MalformedResult { index: usize, len: usize },
}
