use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Input is not a timestamp in any accepted grammar.
    #[error("invalid timestamp: {input:?}")]
    InvalidTimestamp { input: String },

    /// Wall-clock time falls into a DST gap of the target zone.
    #[error("local time does not exist in the target time zone: {input:?}")]
    NonexistentLocalTime { input: String },
}

pub type Result<T> = std::result::Result<T, FormatError>;
