pub mod error;
pub mod export;
pub mod forms;
pub mod models;
pub mod service;
pub mod session;

pub use error::{ApiError, ApiResult, decode_response};
