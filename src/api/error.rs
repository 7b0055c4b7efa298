use crate::application_port::*;
use std::convert::Infallible;
use tracing::warn;
use warp::http::StatusCode;
use warp::reject::{self, MethodNotAllowed};
use warp::{Rejection, Reply};

/// Renders every rejection as a plain-text body carrying the raw error text.
///
/// The body is decoded inside the handler and the query filter accepts any
/// pairs, so a route whose path and method matched reports through `ApiError`.
/// `MethodNotAllowed` from sibling routes is only consulted when no handler ran.
pub async fn recover_error(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, message) = if let Some(err) = err.find::<ApiError>() {
        (err.status, err.message.clone())
    } else if err.is_not_found() {
        (StatusCode::NOT_FOUND, "not found".to_string())
    } else if let Some(err) = err.find::<MethodNotAllowed>() {
        (StatusCode::METHOD_NOT_ALLOWED, err.to_string())
    } else {
        warn!("Unhandled rejection: {:?}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Unhandled error: {:?}", err),
        )
    };

    Ok(warp::reply::with_status(message, status))
}

#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl reject::Reject for ApiError {}

impl ApiError {
    pub fn bad_request<E: std::fmt::Display>(error: E) -> ApiError {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            message: error.to_string(),
        }
    }
}

// Lookup misses are reported as server errors too; clients match on 500 here.
impl From<UserError> for ApiError {
    fn from(error: UserError) -> Self {
        if let UserError::Store(e) = &error {
            warn!("Store error: {}", e);
        }
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: error.to_string(),
        }
    }
}
