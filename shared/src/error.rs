use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Why a generation call produced no value.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error("Could not encode request: {0}")]
    Encode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    /// Builds a status error, lifting the message out of an `{"error": ...}` body
    /// when the server sent one.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => parsed.error,
            Err(_) if body.trim().is_empty() => "no response body".to_string(),
            Err(_) => body.trim().to_string(),
        };
        ApiError::Status { status, message }
    }
}

/// Turns a finished HTTP exchange into a result: any non-success status is an
/// error, otherwise the body must decode as `T`.
pub fn decode_response<T: DeserializeOwned>(ok: bool, status: u16, body: &str) -> ApiResult<T> {
    if !ok {
        return Err(ApiError::from_status(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
