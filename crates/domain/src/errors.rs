use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Resolver error: {0}")]
    ResolverError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
