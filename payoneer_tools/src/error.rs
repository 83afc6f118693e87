use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayoneerApiError {
    #[error("Could not initialize client: {0}")]
    Initialization(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Could not send request to Payoneer: {0}")]
    RestRequestError(String),
    #[error("Invalid response from Payoneer: {0}")]
    RestResponseError(String),
    #[error("Query failed. Error {status}. {message}")]
    QueryError { status: u16, message: String },
    #[error("Payoneer returned an empty response")]
    EmptyResponse,
}
