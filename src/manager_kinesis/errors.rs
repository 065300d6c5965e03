use thiserror::Error;

/// Error depicting errors that occur while publishing to a Kinesis stream
///
#[derive(Error, Debug)]
pub enum KinesisError {
    #[error("CredentialsError: {0}")]
    CredentialsError(String),
    #[error("EndpointError: {0}")]
    EndpointError(String),
    #[error("SigningError: {0}")]
    SigningError(String),
    #[error("DocumentError: {0}")]
    DocumentError(#[from] serde_json::Error),
    #[error("NetworkError: {0}")]
    NetworkError(#[from] reqwest::Error),
    #[error("ServiceError: status {status}: {body}")]
    ServiceError { status: u16, body: String },
}
