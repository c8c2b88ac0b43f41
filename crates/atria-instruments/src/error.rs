use atria_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("question {0} appears more than once in the catalog")]
    DuplicateQuestion(u16),

    #[error("catalog is missing question {0}")]
    MissingQuestion(u16),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
