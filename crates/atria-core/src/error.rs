use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown core domain: {0}")]
    UnknownDomain(String),

    #[error("unknown subdomain: {0}")]
    UnknownSubdomain(String),

    #[error("invalid choice '{0}', expected \"A\" or \"B\"")]
    InvalidChoice(String),

    #[error("invalid statement key: {0}")]
    InvalidStatementKey(String),
}
