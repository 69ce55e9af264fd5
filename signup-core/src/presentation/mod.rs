//! Presentation layer - request handling and response shaping
//!
//! Controllers are transport-agnostic: they take an [`HttpRequest`] and always
//! answer with a complete [`HttpResponse`]. Failures of the layers below are
//! caught here, once, and never escape a controller.

pub mod errors;
pub mod http;
mod signup;

use async_trait::async_trait;

pub use errors::{ErrorBody, HttpError};
pub use http::{HttpRequest, HttpResponse, ResponseBody};
pub use signup::{SignUpBody, SignUpController};

/// A request handler
#[async_trait]
pub trait Controller: Send + Sync {
    /// Request body this controller accepts
    type Body: Send;

    async fn handle(&self, request: HttpRequest<Self::Body>) -> HttpResponse;
}
