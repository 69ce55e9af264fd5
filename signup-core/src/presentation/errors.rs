//! Error descriptors returned to callers of a controller

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors a controller reports back in the response body
///
/// `MissingParam` and `InvalidParam` name the offending field. `Server`
/// carries no detail of the underlying failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    #[error("Missing param: {0}")]
    MissingParam(String),

    #[error("Invalid param: {0}")]
    InvalidParam(String),

    #[error("Internal server error")]
    Server,
}

impl HttpError {
    pub fn missing_param(field: impl Into<String>) -> Self {
        Self::MissingParam(field.into())
    }

    pub fn invalid_param(field: impl Into<String>) -> Self {
        Self::InvalidParam(field.into())
    }

    /// Name exposed to clients in the `name` field of the body
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MissingParam(_) => "MissingParamError",
            Self::InvalidParam(_) => "InvalidParamError",
            Self::Server => "ServerError",
        }
    }

    /// HTTP status code this error maps to
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::MissingParam(_) | Self::InvalidParam(_) => 400,
            Self::Server => 500,
        }
    }
}

/// Serialized form of an [`HttpError`]: `{ "name": ..., "message": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub name: String,
    pub message: String,
}

impl From<&HttpError> for ErrorBody {
    fn from(err: &HttpError) -> Self {
        Self {
            name: err.name().to_string(),
            message: err.to_string(),
        }
    }
}
